use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::RsvpRow;

pub mod supabase;

/// Storage interface for RSVP rows.
///
/// Admin operations take the passcode so the remote side can re-validate it;
/// the gate on this side is a convenience, not the security boundary.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Inserts one RSVP row.
    async fn insert_rsvp(&self, row: &RsvpRow) -> Result<(), StoreError>;

    /// Returns all RSVP rows. Validated remotely against the passcode.
    async fn list_rsvps(&self, passcode: &str) -> Result<Vec<RsvpRow>, StoreError>;

    /// Deletes all RSVP rows. Validated remotely against the passcode.
    async fn clear_rsvps(&self, passcode: &str) -> Result<(), StoreError>;
}
