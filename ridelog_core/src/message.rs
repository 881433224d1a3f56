//! Input and output records of the extraction pipeline.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Place;

/// One chat message as handed over by the capture side.
///
/// Only `text` and `conversation_date` are read by the extractor. The other
/// fields pass through to the output untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default, alias = "message", deserialize_with = "lenient_text")]
    pub text: String,
    /// Reference date as `YYYY-MM-DD`. Anything else falls back to today.
    #[serde(default, alias = "wa_date", deserialize_with = "lenient_optional")]
    pub conversation_date: Option<String>,
    #[serde(default, alias = "wa_time", deserialize_with = "lenient_optional")]
    pub conversation_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional")]
    pub phone: Option<String>,
}

impl RawMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.conversation_date = Some(date.into());
        self
    }
}

fn lenient_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    lenient_optional(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ride,
    General,
}

impl Category {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ride => "ride",
            Self::General => "general",
        }
    }
}

/// Whether the sender offers a seat or looks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Offering,
    Seeking,
    Unknown,
}

impl RideType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Offering => "offering",
            Self::Seeking => "seeking",
            Self::Unknown => "unknown",
        }
    }
}

/// Structured facts derived from one message.
///
/// Every field except `category` is absent for `general` messages. Absent
/// values serialize as `null`, never as an empty or `"None"` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub category: Category,
    pub origin: Option<Place>,
    pub destination: Option<Place>,
    pub ride_date: Option<String>,
    pub ride_time: Option<String>,
    pub ride_type: Option<RideType>,
}

impl ExtractionResult {
    #[must_use]
    pub const fn general() -> Self {
        Self {
            category: Category::General,
            origin: None,
            destination: None,
            ride_date: None,
            ride_time: None,
            ride_type: None,
        }
    }

    #[must_use]
    pub const fn is_ride(&self) -> bool {
        matches!(self.category, Category::Ride)
    }
}

/// Output row: the untouched input fields followed by the extracted ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub message: RawMessage,
    #[serde(flatten)]
    pub result: ExtractionResult,
}
