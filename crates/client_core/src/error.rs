use reqwest::StatusCode;
use thiserror::Error;

/// Why an events fetch produced no list. The carousel treats every variant
/// the same way; the distinction exists for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid events endpoint for base url '{0}'")]
    InvalidEndpoint(String),
    #[error("events request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("events endpoint answered {0}")]
    Status(StatusCode),
    #[error("events payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("events endpoint reported failure or sent no data")]
    Unsuccessful,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid api base url '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("api base url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("invalid {key} '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("invalid festival start '{value}': {source}")]
    InvalidStart {
        value: String,
        source: chrono::ParseError,
    },
}
