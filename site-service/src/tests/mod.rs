use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::routes::{create_router_with_state, AppState};
use rsvp_shared::gate::AdminGate;
use rsvp_shared::test_utils::mock_rsvp_store::MockRsvpStore;
use rsvp_shared::test_utils::mock_state_store::MemoryStateStore;
use rsvp_shared::test_utils::test_logging::init_test_logging;


/// Passcode shared by the test store and the test gate.
pub const TEST_PASSCODE: &str = "sesame";

/// Far-future target so countdown assertions do not depend on the clock.
pub fn test_wedding_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2123-01-22T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Builds an app from the given store and gate, no route prefix.
pub fn app_with(store: Arc<MockRsvpStore>, gate: Arc<AdminGate>) -> Router {
    init_test_logging();

    let state = AppState {
        store,
        gate,
        wedding_date: test_wedding_date(),
    };
    create_router_with_state(state, "")
}

/// Standard test app: mock store and in-memory gate, same passcode.
pub fn create_test_app() -> (Router, Arc<MockRsvpStore>, Arc<AdminGate>) {
    let store = Arc::new(MockRsvpStore::with_passcode(TEST_PASSCODE));
    let gate = Arc::new(AdminGate::new(
        TEST_PASSCODE,
        Box::new(MemoryStateStore::new()),
    ));
    let app = app_with(store.clone(), gate.clone());
    (app, store, gate)
}
