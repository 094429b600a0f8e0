//! Configuration management

use std::path::Path;
use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::*;
use crate::types::ComboPricing;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendSettings,
    pub polling: PollingSettings,
    pub pricing: PricingSettings,
    pub kitchen: KitchenSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub retry: RetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrySettings {
    pub max_times: usize,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub catalog_interval_secs: u64,
    pub orders_interval_secs: u64,
    pub clock_tick_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    pub combo_policy: ComboPricing,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KitchenSettings {
    pub overdue_minutes: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl RetrySettings {
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl PollingSettings {
    pub fn catalog_interval(&self) -> Duration {
        Duration::from_secs(self.catalog_interval_secs)
    }

    pub fn orders_interval(&self) -> Duration {
        Duration::from_secs(self.orders_interval_secs)
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }
}

impl AppConfig {
    /// Loads `config/default`, `config/{APP_ENV}` and `POS__*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &env)
    }

    pub fn load_from(dir: &Path, env: &str) -> Result<Self, ConfigError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);
        let config = Self::defaults()?
            .set_override("app.env", env)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("POS").separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "pos-terminal")?
            .set_default("backend.base_url", "http://127.0.0.1:3000/api")?
            .set_default("backend.timeout_seconds", DEFAULT_HTTP_TIMEOUT_SECS)?
            .set_default("backend.retry.max_times", DEFAULT_RETRY_MAX_TIMES as u64)?
            .set_default("backend.retry.min_delay_ms", DEFAULT_RETRY_MIN_DELAY_MS)?
            .set_default("backend.retry.max_delay_ms", DEFAULT_RETRY_MAX_DELAY_MS)?
            .set_default("polling.catalog_interval_secs", DEFAULT_CATALOG_POLL_SECS)?
            .set_default("polling.orders_interval_secs", DEFAULT_ORDERS_POLL_SECS)?
            .set_default("polling.clock_tick_ms", DEFAULT_CLOCK_TICK_MS)?
            .set_default("pricing.combo_policy", ComboPricing::default().as_str())?
            .set_default("kitchen.overdue_minutes", DEFAULT_KITCHEN_OVERDUE_MINUTES)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let cfg = AppConfig::load_from(Path::new("no-such-config-dir"), "test").unwrap();
        assert_eq!(cfg.app.env, "test");
        assert_eq!(cfg.pricing.combo_policy, ComboPricing::FlatBase);
        assert_eq!(cfg.polling.orders_interval(), Duration::from_secs(DEFAULT_ORDERS_POLL_SECS));
        assert_eq!(cfg.backend.retry.max_times, DEFAULT_RETRY_MAX_TIMES);
        assert!(cfg.logging.directory.is_none());
    }
}
