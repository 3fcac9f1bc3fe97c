use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for the ledger file. Defaults to the application data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            recent_limit: Self::default_recent_limit(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            storage_key: Self::default_storage_key(),
            data_dir: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 6] = [
        "locale",
        "currency",
        "recent_limit",
        "color",
        "storage_key",
        "data_dir",
    ];

    pub fn default_recent_limit() -> usize {
        5
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_storage_key() -> String {
        "transactions".into()
    }

    /// Directory holding the ledger file, given the application data directory.
    pub fn resolve_data_dir(&self, app_dir: &std::path::Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| app_dir.to_path_buf())
    }

    /// Current value of a user-facing key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "locale" => self.locale.clone(),
            "currency" => self.currency.clone(),
            "recent_limit" => self.recent_limit.to_string(),
            "color" => self.ui_color_enabled.to_string(),
            "storage_key" => self.storage_key.clone(),
            "data_dir" => self
                .data_dir
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(default)".into()),
            other => return Err(ConfigError::UnknownKey(other.into())),
        };
        Ok(value)
    }

    /// Updates a user-facing key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        };
        match key {
            "locale" => {
                if value.is_empty() {
                    return Err(invalid("locale cannot be empty"));
                }
                self.locale = value.into();
            }
            "currency" => {
                if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid("expected a three-letter currency code"));
                }
                self.currency = value.to_ascii_uppercase();
            }
            "recent_limit" => {
                self.recent_limit = value
                    .parse()
                    .map_err(|_| invalid("expected a whole number"))?;
            }
            "color" => {
                self.ui_color_enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => return Err(invalid("expected on or off")),
                };
            }
            "storage_key" => {
                if value.is_empty() {
                    return Err(invalid("storage key cannot be empty"));
                }
                // Keys map one-to-one onto file names.
                let plain = value
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
                    && value.chars().any(|c| c.is_ascii_alphanumeric());
                if !plain {
                    return Err(invalid(
                        "use lowercase letters, digits, `-` or `_` only",
                    ));
                }
                self.storage_key = value.into();
            }
            "data_dir" => {
                self.data_dir = match value {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.into())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_normalizes_currency() {
        let mut config = Config::default();
        config.set("currency", "idr").unwrap();
        assert_eq!(config.currency, "IDR");
        assert!(config.set("currency", "rupiah").is_err());
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("theme", "dark"),
            Err(ConfigError::UnknownKey(key)) if key == "theme"
        ));
    }

    #[test]
    fn storage_key_must_already_be_a_file_name() {
        let mut config = Config::default();
        config.set("storage_key", "house_hold-2").unwrap();
        assert_eq!(config.storage_key, "house_hold-2");
        for spelled in ["Household", "house hold", "ledger/2024", "__"] {
            assert!(
                config.set("storage_key", spelled).is_err(),
                "{spelled} should be rejected"
            );
        }
        assert_eq!(config.storage_key, "house_hold-2");
    }

    #[test]
    fn every_key_is_readable() {
        let config = Config::default();
        for key in Config::KEYS {
            assert!(config.get(key).is_ok(), "key {key} should be readable");
        }
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"locale":"id-ID","currency":"IDR"}"#).unwrap();
        assert_eq!(config.recent_limit, 5);
        assert!(config.ui_color_enabled);
        assert_eq!(config.storage_key, "transactions");
        assert!(config.data_dir.is_none());
    }
}
