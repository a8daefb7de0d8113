/// JSON response envelope.
///
/// Every result leaves the service wrapped as
/// `{"status": "success", "generated_at": ..., "data": ...}` or
/// `{"status": "error", "generated_at": ..., "message": ...}`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(serialize_with = "rfc3339")]
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn rfc3339<S: serde::Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl<T: Serialize> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            status: Status::Success,
            generated_at: Utc::now(),
            data: Some(data),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            status: Status::Error,
            generated_at: Utc::now(),
            data: None,
            message: Some(message.into()),
        }
    }
}
