use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use log::{info, warn};

use rsvp_shared::export::to_csv;
use rsvp_shared::fetch::fetch_all;
use rsvp_shared::filter::filter_records;
use rsvp_shared::gate::AdminGate;
use rsvp_shared::models::MessageResponse;
use rsvp_shared::store::RsvpStore;

use crate::error::{AppError, Result};
use crate::models::{ListQuery, RsvpListResponse, RsvpView, SessionResponse, UnlockRequest};
use crate::routes::AppState;

/// Yields the stored passcode, or a 401 while the gate is locked.
fn require_passcode(gate: &AdminGate) -> Result<String> {
    gate.stored_passcode()
        .ok_or_else(|| AppError::unauthorized("Admin view is locked.".into()))
}

// POST /rsvp-details/unlock
pub async fn unlock<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<UnlockRequest>,
) -> Result<Json<SessionResponse>>
where
    S: RsvpStore,
{
    if !state.gate.unlock(&payload.passcode) {
        warn!("Rejected admin unlock attempt");
        return Err(AppError::unauthorized("Incorrect passcode.".into()));
    }

    Ok(Json(SessionResponse { unlocked: true }))
}

// GET /rsvp-details/session
pub async fn session<S>(State(state): State<AppState<S>>) -> Json<SessionResponse>
where
    S: RsvpStore,
{
    Json(SessionResponse {
        unlocked: state.gate.is_unlocked(),
    })
}

// GET /rsvp-details/rsvps?q=
pub async fn list_rsvps<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<RsvpListResponse>>
where
    S: RsvpStore,
{
    let passcode = require_passcode(&state.gate)?;

    let listing = fetch_all(&*state.store, &passcode).await;
    let filtered = filter_records(&listing.records, query.q.as_deref().unwrap_or(""));

    Ok(Json(RsvpListResponse {
        count: filtered.len(),
        rsvps: filtered.into_iter().map(RsvpView::from).collect(),
        error: listing.error,
    }))
}

// GET /rsvp-details/export
// Exports everything; the list filter does not apply here.
pub async fn export_rsvps<S>(State(state): State<AppState<S>>) -> Result<impl IntoResponse>
where
    S: RsvpStore,
{
    let passcode = require_passcode(&state.gate)?;

    let listing = fetch_all(&*state.store, &passcode).await;
    if let Some(reason) = listing.error {
        // Nothing was loaded, so there is nothing worth downloading
        return Err(AppError::bad_gateway(reason));
    }

    let csv = to_csv(&listing.records);
    info!("Exported {} RSVP records as CSV", listing.records.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"rsvp_export.csv\"",
            ),
        ],
        csv,
    ))
}

// DELETE /rsvp-details/rsvps
pub async fn clear_rsvps<S>(State(state): State<AppState<S>>) -> Result<Json<MessageResponse>>
where
    S: RsvpStore,
{
    let passcode = require_passcode(&state.gate)?;

    state.store.clear_rsvps(&passcode).await?;

    info!("Cleared all RSVP records");
    Ok(Json(MessageResponse {
        message: "All RSVPs cleared.".to_string(),
    }))
}
