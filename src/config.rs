use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub presenter: PresenterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the match backend lives
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceSettings {
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: Option<u64>,
}

impl ServiceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String { "http://localhost:5000".to_string() }

/// Display fallbacks and asset locations for rendered cards
#[derive(Debug, Clone, Deserialize)]
pub struct PresenterSettings {
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
    #[serde(default = "default_unknown_text")]
    pub unknown_text: String,
    #[serde(default = "default_missing_text")]
    pub missing_text: String,
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            static_prefix: default_static_prefix(),
            placeholder_image: default_placeholder_image(),
            placeholder_title: default_placeholder_title(),
            unknown_text: default_unknown_text(),
            missing_text: default_missing_text(),
        }
    }
}

fn default_static_prefix() -> String { "/static/".to_string() }
fn default_placeholder_image() -> String { "placeholder.jpg".to_string() }
fn default_placeholder_title() -> String { "No More Matches".to_string() }
fn default_unknown_text() -> String { "Unknown".to_string() }
fn default_missing_text() -> String { "N/A".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PETLIFE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PETLIFE__SERVICE__BASE_URL -> service.base_url
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid service settings: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            presenter: PresenterSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PETLIFE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_presenter_fallbacks() {
        let presenter = PresenterSettings::default();
        assert_eq!(presenter.static_prefix, "/static/");
        assert_eq!(presenter.placeholder_image, "placeholder.jpg");
        assert_eq!(presenter.unknown_text, "Unknown");
        assert_eq!(presenter.missing_text, "N/A");
    }

    #[test]
    fn test_default_service_timeout() {
        let service = ServiceSettings::default();
        assert_eq!(service.base_url, "http://localhost:5000");
        assert_eq!(service.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("petlife-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[service]\nbase_url = \"https://pets.example.com\"\ntimeout_secs = 5\n\n[presenter]\nunknown_text = \"?\""
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.service.base_url, "https://pets.example.com");
        assert_eq!(settings.service.timeout(), Duration::from_secs(5));
        assert_eq!(settings.presenter.unknown_text, "?");
        assert_eq!(settings.presenter.missing_text, "N/A");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let settings = Settings {
            service: ServiceSettings {
                base_url: "not a url".to_string(),
                timeout_secs: None,
            },
            ..Settings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_timeout_out_of_range_rejected() {
        let settings = Settings {
            service: ServiceSettings {
                base_url: default_base_url(),
                timeout_secs: Some(0),
            },
            ..Settings::default()
        };

        assert!(settings.validate().is_err());
    }
}
