use serde::Deserialize;
use serde_json::Value;

use crate::error::SubmissionError;
use crate::models::{now_str, RsvpRow};
use crate::store::RsvpStore;

/// Smallest party size a submission may carry.
pub const MIN_GUESTS: i64 = 1;
/// Largest party size a submission may carry.
pub const MAX_GUESTS: i64 = 10;

/// Raw RSVP form input. Every field is optional; [`RsvpSubmission::normalize`]
/// fills in the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpSubmission {
    #[serde(default, rename = "guestName")]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub attending: Option<String>,
    /// Accepts a JSON number or a numeric string, the way HTML forms send it.
    #[serde(default)]
    pub guests: Option<Value>,
    #[serde(default)]
    pub dietary: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RsvpSubmission {
    /// Produces the row that gets written to storage.
    ///
    /// The guest name is trimmed, the party size is coerced and clamped, and
    /// a missing timestamp becomes the current instant. Text fields default
    /// to the empty string.
    pub fn normalize(self) -> RsvpRow {
        RsvpRow {
            guest_name: Some(
                self.guest_name
                    .as_deref()
                    .unwrap_or("")
                    .trim()
                    .to_string(),
            ),
            attending: Some(self.attending.unwrap_or_default()),
            guests: Some(coerce_guests(self.guests.as_ref())),
            dietary: Some(self.dietary.unwrap_or_default()),
            message: Some(self.message.unwrap_or_default()),
            created_at: Some(
                self.timestamp
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(now_str),
            ),
        }
    }
}

/// Clamps a party size into the allowed range.
pub fn clamp_guests(count: i64) -> i64 {
    count.clamp(MIN_GUESTS, MAX_GUESTS)
}

fn coerce_guests(raw: Option<&Value>) -> i64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    clamp_guests(parsed.unwrap_or(1))
}

/// Normalizes the submission and writes it to the store.
pub async fn submit<S>(store: &S, submission: RsvpSubmission) -> Result<(), SubmissionError>
where
    S: RsvpStore,
{
    let row = submission.normalize();
    store.insert_rsvp(&row).await?;
    Ok(())
}
