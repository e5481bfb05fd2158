//! Layered settings.
//!
//! Precedence (highest wins):
//! 1. `--api-url` on the command line
//! 2. Environment variables (`TASKDECK_*`, `__` separates nested sections,
//!    e.g. `TASKDECK_DISPLAY__DATE_FORMAT`)
//! 3. `./.taskdeck.toml`
//! 4. `<config dir>/taskdeck/config.toml`
//! 5. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::TaskdeckError;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const PROJECT_CONFIG_FILE: &str = ".taskdeck.toml";
pub const MAX_SUCCESS_FLASH_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Base URL of the task service; `/tasks` is appended.
    pub api_url: String,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// chrono format used for the deadline annotation appended to descriptions.
    pub date_format: String,
    /// chrono format used for the created-at line in the detail view.
    pub datetime_format: String,
    /// How long the submit control shows its success label.
    pub success_flash_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: 10,
            display: DisplaySettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            datetime_format: "%b %-d, %Y, %-I:%M:%S %p".to_string(),
            success_flash_ms: 2000,
        }
    }
}

impl Settings {
    /// Load from every layer. `api_url` overrides all other sources when given.
    pub fn load(api_url: Option<&str>) -> Result<Self, TaskdeckError> {
        let mut figment = Self::figment();
        if let Some(url) = api_url {
            figment = figment.merge(Serialized::default("api_url", url));
        }
        let settings: Self = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::user_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TASKDECK_").split("__"))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskdeck").join("config.toml"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<(), TaskdeckError> {
        if self.api_url.trim().is_empty() {
            return Err(TaskdeckError::config("api_url must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(TaskdeckError::config(
                "request_timeout_secs must be greater than zero",
            ));
        }
        self.display.validate()
    }
}

impl DisplaySettings {
    pub fn success_flash(&self) -> Duration {
        Duration::from_millis(self.success_flash_ms)
    }

    fn validate(&self) -> Result<(), TaskdeckError> {
        check_format("display.date_format", &self.date_format)?;
        check_format("display.datetime_format", &self.datetime_format)?;
        if self.success_flash_ms > MAX_SUCCESS_FLASH_MS {
            return Err(TaskdeckError::config(format!(
                "display.success_flash_ms must be at most {MAX_SUCCESS_FLASH_MS}"
            )));
        }
        Ok(())
    }
}

/// Reject chrono format strings containing unknown or malformed specifiers.
fn check_format(key: &str, format: &str) -> Result<(), TaskdeckError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(TaskdeckError::config(format!(
            "{key} is not a valid date format: {format:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_any_source() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            let s = Settings::load(None).expect("load");
            assert_eq!(s, Settings::default());
            assert_eq!(s.display.success_flash(), Duration::from_secs(2));
            Ok(())
        });
    }

    #[test]
    fn project_file_then_env_then_flag() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                api_url = "http://file.example/api"
                request_timeout_secs = 3

                [display]
                date_format = "%Y-%m-%d"
                "#,
            )?;
            let s = Settings::load(None).expect("load");
            assert_eq!(s.api_url, "http://file.example/api");
            assert_eq!(s.request_timeout_secs, 3);
            assert_eq!(s.display.date_format, "%Y-%m-%d");
            assert_eq!(s.display.success_flash_ms, 2000);

            jail.set_env("TASKDECK_API_URL", "http://env.example/api");
            jail.set_env("TASKDECK_DISPLAY__SUCCESS_FLASH_MS", "500");
            let s = Settings::load(None).expect("load");
            assert_eq!(s.api_url, "http://env.example/api");
            assert_eq!(s.display.success_flash_ms, 500);

            let s = Settings::load(Some("http://flag.example")).expect("load");
            assert_eq!(s.api_url, "http://flag.example");
            Ok(())
        });
    }

    #[test]
    fn empty_api_url_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            let err = Settings::load(Some("  ")).unwrap_err();
            assert!(matches!(err, TaskdeckError::Config { .. }));
            Ok(())
        });
    }

    #[test]
    fn unknown_format_specifier_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                [display]
                date_format = "%Q"
                "#,
            )?;
            let err = Settings::load(None).unwrap_err();
            assert!(matches!(err, TaskdeckError::Config { .. }));
            assert!(err.to_string().contains("display.date_format"));

            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                [display]
                datetime_format = "%Y-%"
                "#,
            )?;
            let err = Settings::load(None).unwrap_err();
            assert!(err.to_string().contains("display.datetime_format"));
            Ok(())
        });
    }

    #[test]
    fn oversized_success_flash_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            jail.set_env("TASKDECK_DISPLAY__SUCCESS_FLASH_MS", "18446744073709551615");
            let err = Settings::load(None).unwrap_err();
            assert!(err.to_string().contains("success_flash_ms"));

            jail.set_env("TASKDECK_DISPLAY__SUCCESS_FLASH_MS", "60000");
            let s = Settings::load(None).expect("load");
            assert_eq!(s.display.success_flash(), Duration::from_secs(60));
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("none").display());
            jail.set_env("TASKDECK_REQUEST_TIMEOUT_SECS", "0");
            let err = Settings::load(None).unwrap_err();
            assert!(err.to_string().contains("request_timeout_secs"));
            Ok(())
        });
    }
}
