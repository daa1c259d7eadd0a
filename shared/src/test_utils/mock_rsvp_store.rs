use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::RsvpRow;
use crate::store::RsvpStore;

/// In-memory RSVP store for tests.
///
/// Mirrors the remote contract: admin calls re-validate the passcode and
/// fail with a rejection when it does not match.
pub struct MockRsvpStore {
    passcode: String,
    rows: Mutex<Vec<RsvpRow>>,
    insert_calls: AtomicUsize,
    insert_failure: Mutex<Option<StoreError>>,
    list_failure: Mutex<Option<StoreError>>,
}

impl MockRsvpStore {
    /// Passcode accepted by stores built with [`MockRsvpStore::new`].
    pub const DEFAULT_PASSCODE: &'static str = "1234";

    pub fn new() -> Self {
        Self::with_passcode(Self::DEFAULT_PASSCODE)
    }

    pub fn with_passcode(passcode: &str) -> Self {
        MockRsvpStore {
            passcode: passcode.to_string(),
            rows: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
            insert_failure: Mutex::new(None),
            list_failure: Mutex::new(None),
        }
    }

    /// Preloads rows without going through an insert.
    pub fn seed(&self, rows: Vec<RsvpRow>) {
        *self.rows.lock().unwrap() = rows;
    }

    pub fn rows(&self) -> Vec<RsvpRow> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of insert attempts, including failed ones.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent insert fail with the given error.
    pub fn fail_inserts_with(&self, error: StoreError) {
        *self.insert_failure.lock().unwrap() = Some(error);
    }

    /// Makes every subsequent list fail with the given error.
    pub fn fail_lists_with(&self, error: StoreError) {
        *self.list_failure.lock().unwrap() = Some(error);
    }

    fn check_passcode(&self, passcode: &str) -> Result<(), StoreError> {
        if passcode == self.passcode {
            Ok(())
        } else {
            Err(StoreError::Rejected {
                status: 401,
                message: "Invalid passcode".to_string(),
            })
        }
    }
}

impl Default for MockRsvpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RsvpStore for MockRsvpStore {
    async fn insert_rsvp(&self, row: &RsvpRow) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.insert_failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.rows.lock().unwrap().push(row.clone());
        Ok(())
    }

    async fn list_rsvps(&self, passcode: &str) -> Result<Vec<RsvpRow>, StoreError> {
        if let Some(err) = self.list_failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.check_passcode(passcode)?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn clear_rsvps(&self, passcode: &str) -> Result<(), StoreError> {
        self.check_passcode(passcode)?;
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}
