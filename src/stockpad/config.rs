use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100x100.png?text=No+Image";
const DEFAULT_NOTICE_SECONDS: u64 = 3;
const DEFAULT_CURRENCY: &str = "$";

pub const CONFIG_KEYS: [&str; 3] = ["placeholder-image", "notice-seconds", "currency"];

/// Display settings, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Image shown on cards for products without an image URL
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// How long a notification stays up. Only long-lived clients that drive
    /// `Notifier::tick` see this; the CLI prints each notice once and exits.
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,

    /// Symbol printed before prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_notice_seconds() -> u64 {
    DEFAULT_NOTICE_SECONDS
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            notice_seconds: DEFAULT_NOTICE_SECONDS,
            currency: default_currency(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }

    /// Value of a config key, in the form the `config` command prints.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "placeholder-image" => Ok(self.placeholder_image.clone()),
            "notice-seconds" => Ok(self.notice_seconds.to_string()),
            "currency" => Ok(self.currency.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "placeholder-image" => self.placeholder_image = value.trim().to_string(),
            "notice-seconds" => {
                self.notice_seconds = value.trim().parse().map_err(|_| {
                    StockError::Config(format!(
                        "notice-seconds must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?
            }
            "currency" => self.currency = value.trim().to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.notice_seconds, 3);
        assert_eq!(config.currency, "$");
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(config.notice_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockConfig::load(dir.path().join("missing")).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = StockConfig::default();
        config.set("currency", "€").unwrap();
        config.set("notice-seconds", "5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
        assert_eq!(loaded.notice_seconds, 5);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"currency": "£"}"#).unwrap();

        let loaded = StockConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "£");
        assert_eq!(loaded.notice_seconds, 3);
        assert_eq!(loaded.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = StockConfig::default();
        config
            .set("placeholder-image", " http://img/none.png ")
            .unwrap();
        assert_eq!(
            config.get("placeholder-image").unwrap(),
            "http://img/none.png"
        );
        assert_eq!(config.get("notice-seconds").unwrap(), "3");
    }

    #[test]
    fn test_rejects_bad_keys_and_values() {
        let mut config = StockConfig::default();
        assert!(matches!(config.get("colour"), Err(StockError::Config(_))));
        assert!(matches!(
            config.set("notice-seconds", "soon"),
            Err(StockError::Config(_))
        ));
        assert_eq!(config.notice_seconds, 3);
    }
}
