//! Transient log record handed to the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::severity::Severity;
use super::value::KeyValue;

/// One log record, created per call and handed to the backend for emission.
///
/// A record is either a message (free-text `body`) or an event (semantic
/// `event_name`); both kinds always carry a severity. Attribute order is
/// semantically meaningful: pre-bound attributes come first, then
/// call-specific ones, duplicates retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Wall-clock time of the call
    pub timestamp: DateTime<Utc>,

    /// Record severity
    pub severity: Severity,

    /// Free-text body (message records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Semantic event name (event records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// Ordered attributes
    pub attributes: Vec<KeyValue>,
}

impl Record {
    /// Create a message-kind record with the current timestamp
    pub fn message(severity: Severity, body: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            body: Some(body.into()),
            event_name: None,
            attributes: Vec::new(),
        }
    }

    /// Create an event-kind record with the current timestamp
    pub fn event(severity: Severity, name: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            body: None,
            event_name: Some(name.into()),
            attributes: Vec::new(),
        }
    }

    /// Append attributes, preserving order
    pub fn add_attributes<I>(&mut self, attrs: I)
    where
        I: IntoIterator<Item = KeyValue>,
    {
        self.attributes.extend(attrs);
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
