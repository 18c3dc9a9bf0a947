//! User settings for the finance tracker
//!
//! Display preferences, dashboard knobs, the log level and the category
//! lists. Every field has a serde default so older or hand-edited files load.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::CategoryConfig;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many transactions the dashboard lists as recent activity
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Utilization percentage at which a budget is flagged as a warning
    #[serde(default = "default_budget_warning_percent")]
    pub budget_warning_percent: f64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Allowed categories per transaction type
    #[serde(default)]
    pub categories: CategoryConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_transactions() -> usize {
    5
}

fn default_budget_warning_percent() -> f64 {
    80.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_transactions: default_recent_transactions(),
            budget_warning_percent: default_budget_warning_percent(),
            log_level: default_log_level(),
            categories: CategoryConfig::default(),
        }
    }
}

impl Settings {
    /// The category configuration handed to the services
    pub fn category_config(&self) -> CategoryConfig {
        self.categories.clone()
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), TrackerError> {
        if !(self.budget_warning_percent > 0.0 && self.budget_warning_percent <= 100.0) {
            return Err(TrackerError::Config(format!(
                "budget_warning_percent must be in (0, 100], got {}",
                self.budget_warning_percent
            )));
        }
        if !date_format_is_usable(&self.date_format) {
            return Err(TrackerError::Config(format!(
                "date_format '{}' is not a valid strftime format for dates",
                self.date_format
            )));
        }
        if self.categories.income.is_empty() || self.categories.expense.is_empty() {
            return Err(TrackerError::Config(
                "income and expense category lists cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// A format is usable if it parses and renders a date without time or
/// offset fields, which a `NaiveDate` cannot supply
fn date_format_is_usable(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::MIN.format(format)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_transactions, 5);
        assert_eq!(settings.budget_warning_percent, 80.0);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.recent_transactions = 10;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.recent_transactions, 10);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"recent_transactions": 3}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_transactions, 3);
        assert_eq!(loaded.categories, CategoryConfig::default());
    }

    #[test]
    fn test_invalid_warning_percent_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"budget_warning_percent": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn test_time_fields_in_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%H:%M", "%Y-%m-%d %H:%M"] {
            std::fs::write(
                paths.settings_file(),
                format!(r#"{{"date_format": "{}"}}"#, format),
            )
            .unwrap();
            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, TrackerError::Config(_)), "{format} accepted");
        }

        std::fs::write(paths.settings_file(), r#"{"date_format": "%d %b %Y"}"#).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().date_format, "%d %b %Y");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
