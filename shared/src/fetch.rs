use log::warn;

use crate::models::RsvpRecord;
use crate::store::RsvpStore;

/// Result of loading the admin RSVP list.
///
/// A failed remote call yields an empty list plus the failure reason, so a
/// caller can always render rows and still tell "no RSVPs yet" apart from
/// "the fetch failed".
#[derive(Debug, Clone, Default)]
pub struct RsvpListing {
    pub records: Vec<RsvpRecord>,
    pub error: Option<String>,
}

/// Fetches every RSVP row and maps it into domain records. Never fails.
pub async fn fetch_all<S>(store: &S, passcode: &str) -> RsvpListing
where
    S: RsvpStore,
{
    match store.list_rsvps(passcode).await {
        Ok(rows) => RsvpListing {
            records: rows.into_iter().map(RsvpRecord::from).collect(),
            error: None,
        },
        Err(err) => {
            warn!("Failed to list RSVPs: {}", err);
            RsvpListing {
                records: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}
