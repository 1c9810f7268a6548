//! Budget usage and spending alerts.

use fedha_shared::config::BudgetConfig;
use fedha_shared::types::{Currency, Money, checked_percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Usage classification against the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    /// Below the warning threshold.
    OnTrack,
    /// At or above the warning threshold, below the exceeded threshold.
    Warning,
    /// At or above the exceeded threshold.
    Exceeded,
}

/// Percentages at which a budget changes status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageThresholds {
    /// Warning threshold (percent of limit).
    pub warning: Decimal,
    /// Exceeded threshold (percent of limit).
    pub exceeded: Decimal,
}

impl Default for UsageThresholds {
    fn default() -> Self {
        Self {
            warning: Decimal::from(80),
            exceeded: Decimal::ONE_HUNDRED,
        }
    }
}

impl From<&BudgetConfig> for UsageThresholds {
    fn from(config: &BudgetConfig) -> Self {
        Self {
            warning: Decimal::from(config.warning_threshold_percent),
            exceeded: Decimal::from(config.exceeded_threshold_percent),
        }
    }
}

impl UsageThresholds {
    /// Classifies a usage percentage. Thresholds are inclusive.
    #[must_use]
    pub fn classify(&self, percent_used: Decimal) -> UsageStatus {
        if percent_used >= self.exceeded {
            UsageStatus::Exceeded
        } else if percent_used >= self.warning {
            UsageStatus::Warning
        } else {
            UsageStatus::OnTrack
        }
    }
}

/// Spending against a budget's limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Budget limit.
    pub limit: Decimal,
    /// Amount spent.
    pub spent: Decimal,
    /// `spent / limit * 100`, rounded to 2 decimal places.
    pub percent_used: Decimal,
    /// Amount left before the limit is reached (never negative).
    pub remaining: Decimal,
    /// Amount spent beyond the limit (never negative).
    pub overspent: Decimal,
    /// Usage status.
    pub status: UsageStatus,
}

impl BudgetUsage {
    /// Calculates usage for a limit and spent amount.
    ///
    /// The status is classified on the exact ratio; only the reported
    /// percentage is rounded. A zero limit reports 0% while nothing is spent
    /// and 100% afterwards. A ratio too large to represent reports
    /// `Decimal::MAX` and `Exceeded`.
    #[must_use]
    pub fn calculate(limit: Decimal, spent: Decimal, thresholds: &UsageThresholds) -> Self {
        let (status, percent_used) = if limit.is_zero() {
            if spent > Decimal::ZERO {
                (UsageStatus::Exceeded, Decimal::ONE_HUNDRED)
            } else {
                (UsageStatus::OnTrack, Decimal::ZERO)
            }
        } else {
            match checked_percent(spent, limit) {
                Some(percent) => (thresholds.classify(percent), percent.round_dp(2)),
                // Spending is so far past the limit that the ratio overflows.
                None => (UsageStatus::Exceeded, Decimal::MAX),
            }
        };

        Self {
            limit,
            spent,
            percent_used,
            remaining: (limit - spent).max(Decimal::ZERO),
            overspent: (spent - limit).max(Decimal::ZERO),
            status,
        }
    }

    /// Builds the user-facing alert, if the status warrants one.
    #[must_use]
    pub fn alert(&self, currency: Currency) -> Option<BudgetAlert> {
        let message = match self.status {
            UsageStatus::OnTrack => return None,
            UsageStatus::Warning => format!(
                "Approaching budget limit! {} remaining",
                Money::new(self.remaining, currency)
            ),
            UsageStatus::Exceeded if self.overspent.is_zero() => "Budget limit reached".to_string(),
            UsageStatus::Exceeded => format!(
                "Budget exceeded by {}",
                Money::new(self.overspent, currency)
            ),
        };

        Some(BudgetAlert {
            status: self.status,
            message,
        })
    }
}

/// Alert raised when a budget nears or passes its limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// Status that triggered the alert.
    pub status: UsageStatus,
    /// Message for display.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(0), dec!(0), UsageStatus::OnTrack)]
    #[case(dec!(1000), dec!(799.99), dec!(80.00), UsageStatus::OnTrack)]
    #[case(dec!(1000), dec!(799.90), dec!(79.99), UsageStatus::OnTrack)]
    #[case(dec!(1000), dec!(800), dec!(80), UsageStatus::Warning)]
    #[case(dec!(1000), dec!(999.99), dec!(100.00), UsageStatus::Warning)]
    #[case(dec!(1000), dec!(1000), dec!(100), UsageStatus::Exceeded)]
    #[case(dec!(1000), dec!(1250), dec!(125), UsageStatus::Exceeded)]
    #[case(dec!(3), dec!(1), dec!(33.33), UsageStatus::OnTrack)]
    fn test_usage_status(
        #[case] limit: Decimal,
        #[case] spent: Decimal,
        #[case] percent: Decimal,
        #[case] status: UsageStatus,
    ) {
        let usage = BudgetUsage::calculate(limit, spent, &UsageThresholds::default());
        assert_eq!(usage.percent_used, percent);
        assert_eq!(usage.status, status);
    }

    #[test]
    fn test_remaining_and_overspent_never_negative() {
        let thresholds = UsageThresholds::default();

        let under = BudgetUsage::calculate(dec!(500), dec!(120.50), &thresholds);
        assert_eq!(under.remaining, dec!(379.50));
        assert_eq!(under.overspent, dec!(0));

        let over = BudgetUsage::calculate(dec!(500), dec!(620), &thresholds);
        assert_eq!(over.remaining, dec!(0));
        assert_eq!(over.overspent, dec!(120));
    }

    #[test]
    fn test_zero_limit() {
        let thresholds = UsageThresholds::default();

        let untouched = BudgetUsage::calculate(dec!(0), dec!(0), &thresholds);
        assert_eq!(untouched.percent_used, dec!(0));
        assert_eq!(untouched.status, UsageStatus::OnTrack);

        let spent = BudgetUsage::calculate(dec!(0), dec!(10), &thresholds);
        assert_eq!(spent.percent_used, dec!(100));
        assert_eq!(spent.status, UsageStatus::Exceeded);
    }

    #[test]
    fn test_ratio_overflow_saturates() {
        let spent = Decimal::from_i128_with_scale(10_i128.pow(27), 0);
        let usage = BudgetUsage::calculate(dec!(0.01), spent, &UsageThresholds::default());

        assert_eq!(usage.status, UsageStatus::Exceeded);
        assert_eq!(usage.percent_used, Decimal::MAX);
        assert_eq!(usage.overspent, spent - dec!(0.01));
        assert!(usage.alert(Currency::Kes).is_some());
    }

    #[test]
    fn test_alert_messages() {
        let thresholds = UsageThresholds::default();

        let warning = BudgetUsage::calculate(dec!(10000), dec!(8500), &thresholds)
            .alert(Currency::Kes)
            .unwrap();
        assert_eq!(warning.status, UsageStatus::Warning);
        assert_eq!(
            warning.message,
            "Approaching budget limit! KES 1,500.00 remaining"
        );

        let exceeded = BudgetUsage::calculate(dec!(10000), dec!(12345.6), &thresholds)
            .alert(Currency::Kes)
            .unwrap();
        assert_eq!(exceeded.message, "Budget exceeded by KES 2,345.60");

        let reached = BudgetUsage::calculate(dec!(100), dec!(100), &thresholds)
            .alert(Currency::Kes)
            .unwrap();
        assert_eq!(reached.message, "Budget limit reached");

        assert!(
            BudgetUsage::calculate(dec!(100), dec!(10), &thresholds)
                .alert(Currency::Kes)
                .is_none()
        );
    }

    #[test]
    fn test_thresholds_from_config() {
        let config = BudgetConfig {
            warning_threshold_percent: 90,
            exceeded_threshold_percent: 110,
            ..BudgetConfig::default()
        };
        let thresholds = UsageThresholds::from(&config);

        assert_eq!(thresholds.classify(dec!(89.99)), UsageStatus::OnTrack);
        assert_eq!(thresholds.classify(dec!(90)), UsageStatus::Warning);
        assert_eq!(thresholds.classify(dec!(105)), UsageStatus::Warning);
        assert_eq!(thresholds.classify(dec!(110)), UsageStatus::Exceeded);
    }
}
