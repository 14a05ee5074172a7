//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default body weight for the calculator
//! - Card display options
//! - An optional custom activity catalog
//!
//! Configuration is stored at `~/.config/kcalburn/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::activity::{Activity, Catalog};
use crate::calculator::DEFAULT_WEIGHT_KG;
use crate::error::{CatalogError, ConfigError};

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Used when the weight field is left blank.
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: f64,
}

/// Result card settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_intensity: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/kcalburn/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Replaces the built-in catalog when non-empty.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
}
fn default_true() -> bool {
    true
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_weight_kg: default_weight_kg(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_intensity: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calculator: CalculatorConfig::default(),
            display: DisplayConfig::default(),
            activities: Vec::new(),
        }
    }
}

/// Returns `~/.config/kcalburn[-dev]/` based on KCALBURN_ENV.
///
/// `KCALBURN_CONFIG_DIR` overrides the location entirely.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var("KCALBURN_CONFIG_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("KCALBURN_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("kcalburn-dev")
    } else {
        base_dir.join("kcalburn")
    })
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => value
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. The result is validated before it
    /// replaces `self`; saving is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting config is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weight = self.calculator.default_weight_kg;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "calculator.default_weight_kg".into(),
                message: format!("{weight} is not a positive weight"),
            });
        }
        self.catalog().map(|_| ()).map_err(|e| ConfigError::InvalidValue {
            key: "activities".into(),
            message: e.to_string(),
        })
    }

    /// Configured catalog, or the built-in one when none is configured.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        if self.activities.is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::new(self.activities.clone())
        }
    }

    pub fn default_weight_kg(&self) -> f64 {
        self.calculator.default_weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.calculator.default_weight_kg, 60.0);
        assert!(parsed.display.show_intensity);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("display.show_intensity").as_deref(), Some("true"));
        assert_eq!(cfg.get("calculator.default_weight_kg").as_deref(), Some("60.0"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.set("calculator.default_weight_kg", "72.5").unwrap();
        assert_eq!(cfg.default_weight_kg(), 72.5);
        cfg.set("display.show_intensity", "false").unwrap();
        assert!(!cfg.display.show_intensity);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("display.nonexistent_key", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
        let err = cfg.set("nope.deeper", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("display.show_intensity", "not_a_bool").is_err());
        assert!(cfg.set("calculator.default_weight_kg", "heavy").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_rejects_non_positive_weight() {
        let mut cfg = Config::default();
        assert!(cfg.set("calculator.default_weight_kg", "0").is_err());
        assert!(cfg.set("calculator.default_weight_kg", "-5").is_err());
        assert_eq!(cfg.default_weight_kg(), 60.0);
    }

    #[test]
    fn set_replaces_catalog_from_json() {
        let mut cfg = Config::default();
        cfg.set(
            "activities",
            r#"[{"key":"swim","label":"Swimming","icon":"🏊","mets":6.0}]"#,
        )
        .unwrap();
        let catalog = cfg.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("swim").unwrap().mets, 6.0);
    }

    #[test]
    fn empty_activity_list_falls_back_to_builtin() {
        assert_eq!(Config::default().catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn load_and_save_with_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let mut cfg = Config::default();
        cfg.calculator.default_weight_kg = 55.0;
        cfg.activities.push(Activity::new("row", "Rowing", "🚣", 7.0));
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_rejects_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[[activities]]\nkey = \"a\"\nlabel = \"A\"\nmets = -1.0\n",
        )
        .unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "calculator = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
