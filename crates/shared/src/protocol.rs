use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::Event;

/// Path of the listing endpoint, relative to the API base URL.
pub const EVENTS_ALL_PATH: &str = "/events/all";

/// Body of `GET /events/all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "readable_events",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Vec<Event>>,
}

// `data` must be a list, but one unreadable record only drops that record.
fn readable_events<'de, D>(deserializer: D) -> Result<Option<Vec<Event>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(records) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let events = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match serde_json::from_value::<Event>(record) {
            Ok(event) => Some(event),
            Err(err) => {
                warn!(position, "skipping unreadable event record: {err}");
                None
            }
        })
        .collect();
    Ok(Some(events))
}

impl EventsEnvelope {
    pub fn ok(events: Vec<Event>) -> Self {
        Self {
            success: true,
            data: Some(events),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
        }
    }

    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// The event list, but only when the server flagged success and sent one.
    /// An empty list is a valid answer.
    pub fn into_events(self) -> Option<Vec<Event>> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}
