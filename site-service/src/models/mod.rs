use serde::{Deserialize, Serialize};

use rsvp_shared::models::{display_timestamp, RsvpRecord};
use rsvp_shared::site::Countdown;

// Request DTOs
#[derive(Deserialize, Debug)]
pub struct UnlockRequest {
    pub passcode: String,
}

#[derive(Deserialize, Debug)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

// Response DTOs
#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub unlocked: bool,
}

/// One RSVP entry as shown in the admin table.
#[derive(Serialize, Debug)]
pub struct RsvpView {
    #[serde(rename = "guestName")]
    pub guest_name: String,
    pub attending: String,
    pub guests: i64,
    pub dietary: String,
    pub message: String,
    pub timestamp: String,
    /// Human-readable timestamp; falls back to the raw value when the
    /// stored one does not parse.
    #[serde(rename = "displayTimestamp")]
    pub display_timestamp: String,
}

impl From<RsvpRecord> for RsvpView {
    fn from(record: RsvpRecord) -> Self {
        let display = display_timestamp(&record.timestamp);
        RsvpView {
            guest_name: record.guest_name,
            attending: record.attending,
            guests: record.guests,
            dietary: record.dietary,
            message: record.message,
            timestamp: record.timestamp,
            display_timestamp: display,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct RsvpListResponse {
    pub rsvps: Vec<RsvpView>,
    pub count: usize,
    /// Reason the remote fetch failed, when it did. The list is empty then.
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SiteResponse {
    #[serde(rename = "weddingDate")]
    pub wedding_date: String,
    pub countdown: Countdown,
}
