use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Event,
    protocol::{EventsEnvelope, EVENTS_ALL_PATH},
};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::FetchError};

/// Where the carousel gets its events from.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError>;
}

pub struct HttpEventSource {
    http: Client,
    endpoint: Url,
}

impl HttpEventSource {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&format!(
            "{}{EVENTS_ALL_PATH}",
            base_url.trim_end_matches('/')
        ))
        .map_err(|_| FetchError::InvalidEndpoint(base_url.to_string()))?;
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(&settings.api_base_url, settings.request_timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting events");
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        EventsEnvelope::from_slice(&body)?
            .into_events()
            .ok_or(FetchError::Unsuccessful)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
