use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns the current UTC time as an RFC 3339 string.
pub fn now_str() -> String {
    Utc::now().to_rfc3339()
}

/// Wire-level row of the "rsvps" table.
///
/// Every field is optional so that rows with missing or null columns still
/// deserialize; [`RsvpRecord`] applies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsvpRow {
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub attending: Option<String>,
    #[serde(default)]
    pub guests: Option<i64>,
    #[serde(default)]
    pub dietary: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Domain-level RSVP entry. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpRecord {
    #[serde(rename = "guestName")]
    pub guest_name: String,
    pub attending: String,
    pub guests: i64,
    pub dietary: String,
    pub message: String,
    pub timestamp: String,
}

impl From<RsvpRow> for RsvpRecord {
    fn from(row: RsvpRow) -> Self {
        RsvpRecord {
            guest_name: row.guest_name.unwrap_or_default(),
            attending: row.attending.unwrap_or_default(),
            guests: row.guests.unwrap_or(1),
            dietary: row.dietary.unwrap_or_default(),
            message: row.message.unwrap_or_default(),
            timestamp: row.created_at.unwrap_or_else(now_str),
        }
    }
}

/// Formats an RFC 3339 timestamp for display. Falls back to the raw string
/// when it does not parse.
pub fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

// Response DTOs
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
