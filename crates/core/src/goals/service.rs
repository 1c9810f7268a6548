//! Savings goal validation, progress and milestones.

use chrono::NaiveDate;
use fedha_shared::types::checked_percent;
use rust_decimal::Decimal;

use super::error::GoalError;
use super::types::{Milestone, SavingsGoal};

/// Savings goal service for business logic.
pub struct GoalService;

impl GoalService {
    /// Validate a new goal.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::EmptyName` for a blank name,
    /// `GoalError::NonPositiveTarget` if the target is not above zero and
    /// `GoalError::DeadlineInPast` if the deadline precedes `today`.
    pub fn validate_new(
        name: &str,
        target_amount: Decimal,
        deadline: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), GoalError> {
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }

        if target_amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveTarget);
        }

        if let Some(deadline) = deadline
            && deadline < today
        {
            return Err(GoalError::DeadlineInPast { deadline, today });
        }

        Ok(())
    }

    /// Percentage of the target saved, rounded to 2 decimal places.
    /// A zero target reports 0; a ratio too large to represent saturates
    /// at `Decimal::MAX`.
    #[must_use]
    pub fn progress_percent(saved: Decimal, target: Decimal) -> Decimal {
        if target.is_zero() {
            return Decimal::ZERO;
        }
        checked_percent(saved, target).map_or(Decimal::MAX, |percent| percent.round_dp(2))
    }

    /// Determines which milestone a contribution crosses.
    ///
    /// Reaching 100% always reports `GoalAchieved`. Otherwise the highest
    /// threshold `t` with `before < t <= after` is reported. Comparisons use
    /// the exact ratio, so landing precisely on a threshold counts.
    #[must_use]
    pub fn milestone_reached(
        previous_saved: Decimal,
        contribution: Decimal,
        target: Decimal,
        thresholds: &[u8],
    ) -> Milestone {
        if target <= Decimal::ZERO {
            return Milestone::None;
        }

        let Some(saved) = previous_saved.checked_add(contribution) else {
            return Milestone::GoalAchieved;
        };

        let percent = |saved: Decimal| checked_percent(saved, target).unwrap_or(Decimal::MAX);
        let before = percent(previous_saved);
        let after = percent(saved);

        if after >= Decimal::ONE_HUNDRED {
            return Milestone::GoalAchieved;
        }

        thresholds
            .iter()
            .copied()
            .filter(|&t| {
                let t = Decimal::from(t);
                before < t && t <= after
            })
            .max()
            .map_or(Milestone::None, Milestone::Reached)
    }

    /// Applies a contribution and reports the milestone it crossed.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveContribution` if `amount` is not above
    /// zero and `GoalError::AmountOverflow` if the new saved amount cannot be
    /// represented. The goal is left untouched on error.
    pub fn contribute(
        goal: &mut SavingsGoal,
        amount: Decimal,
        thresholds: &[u8],
    ) -> Result<Milestone, GoalError> {
        if amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveContribution);
        }

        let saved = goal
            .saved_amount
            .checked_add(amount)
            .ok_or(GoalError::AmountOverflow)?;
        let milestone =
            Self::milestone_reached(goal.saved_amount, amount, goal.target_amount, thresholds);
        goal.saved_amount = saved;

        Ok(milestone)
    }

    /// Returns true once the saved amount meets the target.
    #[must_use]
    pub fn is_complete(goal: &SavingsGoal) -> bool {
        goal.target_amount > Decimal::ZERO && goal.saved_amount >= goal.target_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedha_shared::types::{GoalId, UserId};
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const MILESTONES: &[u8] = &[25, 50, 75];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn emergency_fund(saved: Decimal) -> SavingsGoal {
        SavingsGoal {
            id: GoalId::new(),
            owner: UserId::new(),
            name: "Emergency Fund".to_string(),
            target_amount: dec!(10000),
            saved_amount: saved,
            deadline: None,
        }
    }

    #[rstest]
    #[case(dec!(0), dec!(2400), Milestone::None)]
    #[case(dec!(0), dec!(2500), Milestone::Reached(25))]
    #[case(dec!(2400), dec!(200), Milestone::Reached(25))]
    #[case(dec!(2500), dec!(100), Milestone::None)]
    #[case(dec!(1000), dec!(6000), Milestone::Reached(50))]
    #[case(dec!(4900), dec!(2600), Milestone::Reached(75))]
    #[case(dec!(0), dec!(8000), Milestone::Reached(75))]
    #[case(dec!(9000), dec!(1000), Milestone::GoalAchieved)]
    #[case(dec!(12000), dec!(1), Milestone::GoalAchieved)]
    fn test_milestones(
        #[case] previous: Decimal,
        #[case] contribution: Decimal,
        #[case] expected: Milestone,
    ) {
        assert_eq!(
            GoalService::milestone_reached(previous, contribution, dec!(10000), MILESTONES),
            expected
        );
    }

    #[test]
    fn test_validate_new() {
        let today = date(2025, 6, 1);

        assert!(GoalService::validate_new("Car", dec!(0.01), None, today).is_ok());
        assert!(GoalService::validate_new("Car", dec!(100), Some(today), today).is_ok());
        assert_eq!(
            GoalService::validate_new(" ", dec!(100), None, today),
            Err(GoalError::EmptyName)
        );
        assert_eq!(
            GoalService::validate_new("Car", dec!(0), None, today),
            Err(GoalError::NonPositiveTarget)
        );
        assert_eq!(
            GoalService::validate_new("Car", dec!(100), Some(date(2025, 5, 31)), today),
            Err(GoalError::DeadlineInPast {
                deadline: date(2025, 5, 31),
                today
            })
        );
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(GoalService::progress_percent(dec!(1), dec!(3)), dec!(33.33));
        assert_eq!(GoalService::progress_percent(dec!(500), dec!(0)), dec!(0));
        assert_eq!(
            GoalService::progress_percent(dec!(15000), dec!(10000)),
            dec!(150)
        );
    }

    #[test]
    fn test_contribute_updates_goal() {
        let mut goal = emergency_fund(dec!(7000));

        let milestone = GoalService::contribute(&mut goal, dec!(600), MILESTONES).unwrap();
        assert_eq!(milestone, Milestone::Reached(75));
        assert_eq!(goal.saved_amount, dec!(7600));
        assert!(!GoalService::is_complete(&goal));

        let milestone = GoalService::contribute(&mut goal, dec!(2400), MILESTONES).unwrap();
        assert_eq!(milestone, Milestone::GoalAchieved);
        assert!(GoalService::is_complete(&goal));
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let mut goal = emergency_fund(dec!(0));

        assert_eq!(
            GoalService::contribute(&mut goal, dec!(0), MILESTONES),
            Err(GoalError::NonPositiveContribution)
        );
        assert_eq!(goal.saved_amount, dec!(0));
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        assert_eq!(
            GoalService::progress_percent(Decimal::MAX, dec!(0.01)),
            Decimal::MAX
        );
        assert_eq!(
            GoalService::milestone_reached(Decimal::MAX, dec!(1), dec!(10000), MILESTONES),
            Milestone::GoalAchieved
        );

        let mut goal = emergency_fund(Decimal::MAX);
        assert_eq!(
            GoalService::contribute(&mut goal, dec!(1), MILESTONES),
            Err(GoalError::AmountOverflow)
        );
        assert_eq!(goal.saved_amount, Decimal::MAX);
    }

    proptest! {
        /// A contribution that stays below the target never reports achievement,
        /// and any reported milestone lies within the crossed interval.
        #[test]
        fn prop_milestone_within_crossed_interval(
            previous in 0i64..1_000_000,
            contribution in 1i64..1_000_000,
        ) {
            let target = dec!(10000);
            let previous = Decimal::new(previous, 2);
            let contribution = Decimal::new(contribution, 2);

            let milestone = GoalService::milestone_reached(previous, contribution, target, MILESTONES);
            let before = previous / target * Decimal::ONE_HUNDRED;
            let after = (previous + contribution) / target * Decimal::ONE_HUNDRED;

            match milestone {
                Milestone::GoalAchieved => prop_assert!(after >= Decimal::ONE_HUNDRED),
                Milestone::Reached(t) => {
                    let t = Decimal::from(t);
                    prop_assert!(before < t && t <= after);
                }
                Milestone::None => prop_assert!(MILESTONES
                    .iter()
                    .all(|&t| !(before < Decimal::from(t) && Decimal::from(t) <= after))),
            }
        }
    }
}
