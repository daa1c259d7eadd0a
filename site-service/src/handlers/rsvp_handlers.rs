use axum::{extract::State, Json};
use chrono::Utc;
use log::info;

use rsvp_shared::models::MessageResponse;
use rsvp_shared::site::Countdown;
use rsvp_shared::store::RsvpStore;
use rsvp_shared::submit::{submit, RsvpSubmission};

use crate::error::Result;
use crate::models::SiteResponse;
use crate::routes::AppState;

// POST /rsvps
pub async fn submit_rsvp<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<RsvpSubmission>,
) -> Result<Json<MessageResponse>>
where
    S: RsvpStore,
{
    submit(&*state.store, payload).await?;

    info!("Stored one RSVP submission");
    Ok(Json(MessageResponse {
        message: "RSVP saved. Thank you!".to_string(),
    }))
}

// GET /site
pub async fn site_info<S>(State(state): State<AppState<S>>) -> Json<SiteResponse>
where
    S: RsvpStore,
{
    let countdown = Countdown::until(state.wedding_date, Utc::now());

    Json(SiteResponse {
        wedding_date: state.wedding_date.to_rfc3339(),
        countdown,
    })
}
