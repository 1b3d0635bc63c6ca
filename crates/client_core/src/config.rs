use std::{fs, path::Path, time::Duration};

use chrono::{DateTime, FixedOffset};
use shared::countdown::festival_start;
use tracing::warn;
use url::Url;

use crate::{carousel::DEFAULT_ADVANCE_INTERVAL, error::SettingsError};

pub const SETTINGS_FILE: &str = "carousel.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Validated http(s) URL without a trailing slash.
    pub api_base_url: String,
    pub advance_interval: Duration,
    pub request_timeout: Duration,
    pub fest_starts_at: DateTime<FixedOffset>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            fest_starts_at: festival_start(),
        }
    }
}

impl Settings {
    pub fn set_api_base_url(&mut self, raw: &str) -> Result<(), SettingsError> {
        self.api_base_url = parse_base_url(raw)?;
        Ok(())
    }

    pub fn set_advance_interval_ms(&mut self, raw: &str) -> Result<(), SettingsError> {
        self.advance_interval = Duration::from_millis(parse_positive("advance_interval_ms", raw)?);
        Ok(())
    }

    pub fn set_request_timeout_secs(&mut self, raw: &str) -> Result<(), SettingsError> {
        self.request_timeout = Duration::from_secs(parse_positive("request_timeout_secs", raw)?);
        Ok(())
    }

    pub fn set_fest_starts_at(&mut self, raw: &str) -> Result<(), SettingsError> {
        self.fest_starts_at =
            DateTime::parse_from_rfc3339(raw.trim()).map_err(|source| {
                SettingsError::InvalidStart {
                    value: raw.to_string(),
                    source,
                }
            })?;
        Ok(())
    }
}

/// Defaults, then `carousel.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Same layering as [`load_settings`] with an explicit file and variable lookup.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<toml::Table>(&raw) {
            Ok(file_cfg) => {
                for (key, value) in &file_cfg {
                    let value = match value {
                        toml::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    apply(&mut settings, key, &value);
                }
            }
            Err(err) => warn!(path = %path.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    for (var, key) in [
        ("EVENTS_API_BASE_URL", "api_base_url"),
        ("APP__API_BASE_URL", "api_base_url"),
        ("APP__ADVANCE_INTERVAL_MS", "advance_interval_ms"),
        ("APP__REQUEST_TIMEOUT_SECS", "request_timeout_secs"),
        ("APP__FEST_STARTS_AT", "fest_starts_at"),
    ] {
        if let Some(value) = env(var) {
            apply(&mut settings, key, &value);
        }
    }

    settings
}

fn apply(settings: &mut Settings, key: &str, value: &str) {
    let result = match key {
        "api_base_url" => settings.set_api_base_url(value),
        "advance_interval_ms" => settings.set_advance_interval_ms(value),
        "request_timeout_secs" => settings.set_request_timeout_secs(value),
        "fest_starts_at" => settings.set_fest_starts_at(value),
        other => {
            warn!(key = other, "unknown setting ignored");
            Ok(())
        }
    };
    if let Err(err) = result {
        warn!(key, "keeping previous value: {err}");
    }
}

fn parse_base_url(raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|source| SettingsError::InvalidBaseUrl {
        value: raw.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SettingsError::UnsupportedScheme(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, SettingsError> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| SettingsError::InvalidNumber {
            key,
            value: raw.to_string(),
        })?;
    if value == 0 {
        return Err(SettingsError::Zero(key));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
