use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(EventId);

/// Entry fee as published by the events API, which sends either a bare number
/// or a preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistrationFee {
    Amount(serde_json::Number),
    Text(String),
}

impl RegistrationFee {
    /// Zero amounts and blank strings count as "no fee published".
    pub fn is_unset(&self) -> bool {
        match self {
            RegistrationFee::Amount(n) => n.as_f64() == Some(0.0),
            RegistrationFee::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for RegistrationFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationFee::Amount(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => {
                    write!(f, "{}", v as i64)
                }
                _ => write!(f, "{n}"),
            },
            RegistrationFee::Text(s) => f.write_str(s.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "scalar_id")]
    pub event_id: EventId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_fee",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_fee: Option<RegistrationFee>,
    #[serde(
        default,
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl Event {
    pub fn new(event_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            event_id: EventId(event_id.into()),
            name: name.into(),
            description: String::new(),
            poster_url: None,
            registration_fee: None,
            date: None,
        }
    }

    pub fn poster_url(&self) -> Option<&str> {
        non_blank(self.poster_url.as_deref())
    }

    pub fn date(&self) -> Option<&str> {
        non_blank(self.date.as_deref())
    }

    pub fn registration_fee(&self) -> Option<&RegistrationFee> {
        self.registration_fee.as_ref().filter(|fee| !fee.is_unset())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// Display fields tolerate odd shapes from the API: numbers are rendered as
// text, anything else (null, bools, objects) reads as absent.
fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_text(Value::deserialize(deserializer)?))
}

fn scalar_id<'de, D>(deserializer: D) -> Result<EventId, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(EventId(s)),
        Value::Number(n) => Ok(EventId(n.to_string())),
        other => Err(D::Error::custom(format!(
            "eventId must be a string or number, got {other}"
        ))),
    }
}

fn lenient_fee<'de, D>(deserializer: D) -> Result<Option<RegistrationFee>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(RegistrationFee::Amount(n)),
        Value::String(s) => Some(RegistrationFee::Text(s)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_event_with_optional_fields_missing() {
        let event: Event =
            serde_json::from_str(r#"{"eventId":"EVT1","name":"Roboclash"}"#).expect("event");
        assert_eq!(event.event_id, EventId::from("EVT1"));
        assert_eq!(event.name, "Roboclash");
        assert_eq!(event.description, "");
        assert!(event.poster_url().is_none());
        assert!(event.registration_fee().is_none());
        assert!(event.date().is_none());
    }

    #[test]
    fn registration_fee_accepts_numbers_and_strings() {
        let event: Event = serde_json::from_str(
            r#"{"eventId":"EVT2","name":"CodeWar","registrationFee":150,"description":null}"#,
        )
        .expect("event");
        assert_eq!(
            event.registration_fee().map(ToString::to_string).as_deref(),
            Some("150")
        );

        let event: Event = serde_json::from_str(
            r#"{"eventId":"EVT3","name":"Quiz","registrationFee":"100 per team"}"#,
        )
        .expect("event");
        assert_eq!(
            event.registration_fee().map(ToString::to_string).as_deref(),
            Some("100 per team")
        );
    }

    #[test]
    fn odd_field_shapes_degrade_to_fallbacks() {
        let event: Event = serde_json::from_str(
            r#"{"eventId":17,"name":null,"date":20260227,"posterUrl":false,"registrationFee":true}"#,
        )
        .expect("event");
        assert_eq!(event.event_id, EventId::from("17"));
        assert_eq!(event.name, "");
        assert_eq!(event.date(), Some("20260227"));
        assert!(event.poster_url().is_none());
        assert!(event.registration_fee().is_none());

        let event: Event = serde_json::from_str(r#"{"eventId":"EVT5"}"#).expect("event");
        assert_eq!(event.name, "");
    }

    #[test]
    fn event_without_usable_id_is_rejected() {
        assert!(serde_json::from_str::<Event>(r#"{"name":"Ghost"}"#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"eventId":null,"name":"Ghost"}"#).is_err());
    }

    #[test]
    fn whole_float_fee_renders_as_integer() {
        let fee: RegistrationFee = serde_json::from_str("150.0").expect("fee");
        assert_eq!(fee.to_string(), "150");
        let fee: RegistrationFee = serde_json::from_str("99.5").expect("fee");
        assert_eq!(fee.to_string(), "99.5");
        let fee: RegistrationFee = serde_json::from_str("200").expect("fee");
        assert_eq!(fee.to_string(), "200");
    }

    #[test]
    fn event_id_honors_width_and_alignment() {
        assert_eq!(format!("[{:<10}]", EventId::from("EVT1")), "[EVT1      ]");
    }

    #[test]
    fn zero_fee_and_blank_fields_read_as_absent() {
        let event: Event = serde_json::from_str(
            r#"{"eventId":"EVT4","name":"Open Mic","registrationFee":0,"date":" ","posterUrl":""}"#,
        )
        .expect("event");
        assert!(event.registration_fee().is_none());
        assert!(event.date().is_none());
        assert!(event.poster_url().is_none());
    }
}
