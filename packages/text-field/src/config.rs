//! Settings loaded from a TOML file.
//!
//! ```toml
//! locale = "ko"        # "ko", "en" or "system"
//! theme = "light"      # "light" or "dark"
//!
//! [logging]
//! filter = "text_field=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::component::TextFieldContext;
use crate::i18n::{detect_locale, is_supported, I18n, DEFAULT_LOCALE, FALLBACK_LOCALE};
use crate::theme::Theme;
use crate::Result;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TEXT_FIELD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleSetting {
    /// Follow `LC_ALL` / `LC_MESSAGES` / `LANG`
    System(SystemMarker),
    Fixed(String),
}

/// Serialises as the literal string `"system"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemMarker {
    System,
}

impl Default for LocaleSetting {
    fn default() -> Self {
        LocaleSetting::Fixed(DEFAULT_LOCALE.to_string())
    }
}

impl LocaleSetting {
    /// Locale to load.
    ///
    /// A system locale without a catalogue resolves to `en`; a fixed one is
    /// returned as written and rejected later by `I18n::new` if unsupported.
    pub fn resolve(&self) -> String {
        match self {
            LocaleSetting::System(_) => {
                let detected = detect_locale();
                if is_supported(&detected) {
                    detected
                } else {
                    tracing::debug!(locale = %detected, "no catalogue for system locale, using fallback");
                    FALLBACK_LOCALE.to_string()
                }
            }
            LocaleSetting::Fixed(locale) => locale.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleSetting,
    pub theme: String,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleSetting::default(),
            theme: "light".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Default config path.
    ///
    /// `TEXT_FIELD_CONFIG` if set, else `<config dir>/text-field/config.toml`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        directories::ProjectDirs::from("", "", "text-field")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("text-field.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), theme = %config.theme, "config loaded");
        Ok(config)
    }

    /// Resolve theme and catalogue.
    pub fn context(&self) -> Result<TextFieldContext> {
        Ok(TextFieldContext {
            theme: Theme::by_id(&self.theme)?,
            i18n: I18n::new(&self.locale.resolve())?,
        })
    }
}
