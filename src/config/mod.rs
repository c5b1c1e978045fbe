use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::core::services::Thresholds;
use crate::errors::{PlannerError, Result};

const DEFAULT_DIR_NAME: &str = ".budget_planner";
const CONFIG_FILE: &str = "config.json";
pub const HOME_ENV: &str = "BUDGET_PLANNER_HOME";

pub const DEFAULT_HOME_TERM_MONTHS: u32 = 360;

/// How the tax prompt is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    #[default]
    Amount,
    Rate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub tax_mode: TaxMode,
    pub default_home_term_months: u32,
    pub home_loan_income_share: f64,
    pub expense_income_share: f64,
    pub plain_output: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            tax_mode: TaxMode::default(),
            default_home_term_months: DEFAULT_HOME_TERM_MONTHS,
            home_loan_income_share: thresholds.home_loan_income_share,
            expense_income_share: thresholds.expense_income_share,
            plain_output: false,
        }
    }
}

impl PlannerConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            home_loan_income_share: self.home_loan_income_share,
            expense_income_share: self.expense_income_share,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_home_term_months == 0 {
            return Err(PlannerError::ConfigError(
                "default_home_term_months must be greater than zero".into(),
            ));
        }
        for (name, share) in [
            ("home_loan_income_share", self.home_loan_income_share),
            ("expense_income_share", self.expense_income_share),
        ] {
            if !share.is_finite() || share <= 0.0 {
                return Err(PlannerError::ConfigError(format!(
                    "{name} must be a positive number, got {share}"
                )));
            }
        }
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.budget_planner`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Read-only access to the planner configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(app_data_dir().join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves an explicit path if given, otherwise the default location.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::with_path(path),
            None => Self::new(),
        }
    }

    /// A missing file yields the defaults.
    pub fn load(&self) -> Result<PlannerConfig> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: PlannerConfig = serde_json::from_str(&data).map_err(|err| {
            PlannerError::ConfigError(format!("{}: {}", self.path.display(), err))
        })?;
        config.validate()?;
        debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
