//! Application configuration. Expiry window, mock latency, sample data.

use crate::domain::expiry::DEFAULT_WARNING_DAYS;
use serde::Deserialize;

/// Default simulated latency of the mock search backend.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Days before expiry at which a license counts as expiring soon. Read from ENVLIC_EXPIRY_WARNING_DAYS.
    #[serde(default)]
    pub expiry_warning_days: Option<i64>,

    /// Simulated latency of the mock document search in ms. Read from ENVLIC_SEARCH_DELAY_MS.
    #[serde(default)]
    pub search_delay_ms: Option<u64>,

    /// Load the embedded demo processes, documents and notifications at startup. Read from ENVLIC_SEED_SAMPLE_DATA.
    #[serde(default)]
    pub seed_sample_data: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ENVLIC").try_parsing(true));
        if let Ok(path) = std::env::var("ENVLIC_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the warning window in days. Defaults to 30 if unset or not positive.
    pub fn expiry_warning_days_or_default(&self) -> i64 {
        self.expiry_warning_days
            .filter(|d| *d > 0)
            .unwrap_or(DEFAULT_WARNING_DAYS)
    }

    /// Returns the mock search delay in milliseconds. Defaults to DEFAULT_SEARCH_DELAY_MS.
    pub fn search_delay_ms_or_default(&self) -> u64 {
        self.search_delay_ms.unwrap_or(DEFAULT_SEARCH_DELAY_MS)
    }

    /// Sample data is seeded unless explicitly disabled.
    pub fn seed_sample_data_or_default(&self) -> bool {
        self.seed_sample_data.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.expiry_warning_days_or_default(), 30);
        assert_eq!(cfg.search_delay_ms_or_default(), 1000);
        assert!(cfg.seed_sample_data_or_default());
    }

    #[test]
    fn test_non_positive_window_uses_default() {
        let cfg = AppConfig {
            expiry_warning_days: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.expiry_warning_days_or_default(), 30);

        let cfg = AppConfig {
            expiry_warning_days: Some(60),
            ..AppConfig::default()
        };
        assert_eq!(cfg.expiry_warning_days_or_default(), 60);
    }

    #[test]
    fn test_deserializes_from_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("expiry_warning_days", 45i64)
            .unwrap()
            .set_override("seed_sample_data", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.expiry_warning_days_or_default(), 45);
        assert!(!cfg.seed_sample_data_or_default());
        assert_eq!(cfg.search_delay_ms, None);
    }
}
