//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Budget configuration.
    #[serde(default)]
    pub budgets: BudgetConfig,
    /// Savings goal configuration.
    #[serde(default)]
    pub goals: GoalConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "fedha=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Budget configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Currency all budget amounts are expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Spending categories offered when creating budgets and expenses.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Usage percentage at which a budget is flagged as approaching its limit.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_percent: u32,
    /// Usage percentage at which a budget is flagged as exceeded.
    #[serde(default = "default_exceeded_threshold")]
    pub exceeded_threshold_percent: u32,
}

fn default_categories() -> Vec<String> {
    [
        "Food",
        "Transport",
        "Entertainment",
        "Shopping",
        "Bills",
        "Healthcare",
        "Other",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_warning_threshold() -> u32 {
    80
}

fn default_exceeded_threshold() -> u32 {
    100
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            categories: default_categories(),
            warning_threshold_percent: default_warning_threshold(),
            exceeded_threshold_percent: default_exceeded_threshold(),
        }
    }
}

impl BudgetConfig {
    /// Returns true if `category` is one of the configured labels.
    #[must_use]
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Savings goal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalConfig {
    /// Progress percentages announced as milestones (100% is always "achieved").
    #[serde(default = "default_milestones")]
    pub milestones: Vec<u8>,
}

fn default_milestones() -> Vec<u8> {
    vec![25, 50, 75]
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            milestones: default_milestones(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and the environment.
    ///
    /// Sources, later overriding earlier: `config/default`, `config/{RUN_MODE}`,
    /// then `FEDHA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FEDHA")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("budgets.categories")
                    .with_list_parse_key("goals.milestones")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
