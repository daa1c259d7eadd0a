use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    admin_handlers::{clear_rsvps, export_rsvps, list_rsvps, session, unlock},
    rsvp_handlers::{site_info, submit_rsvp},
};
use rsvp_shared::config::SiteConfig;
use rsvp_shared::gate::{AdminGate, FileStateStore};
use rsvp_shared::store::{supabase::SupabaseRsvpStore, RsvpStore};

/// Shared state handed to every handler.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub gate: Arc<AdminGate>,
    pub wedding_date: DateTime<Utc>,
}

// Manual impl so `S` does not itself need to be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        AppState {
            store: Arc::clone(&self.store),
            gate: Arc::clone(&self.gate),
            wedding_date: self.wedding_date,
        }
    }
}

/// Creates a router with the default Supabase-backed store.
pub fn create_router(config: &SiteConfig) -> Router {
    info!("Creating router with Supabase-backed RSVP store");

    let store = Arc::new(SupabaseRsvpStore::new(config.supabase.clone()));
    let gate = Arc::new(AdminGate::new(
        config.admin_pass.clone(),
        Box::new(FileStateStore::open(&config.state_path)),
    ));

    // Check if we should remove the base path prefix
    let remove_base_path = std::env::var("REMOVE_BASE_PATH")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    // If REMOVE_BASE_PATH is set to true, don't add the /api prefix
    let prefix = if remove_base_path { "" } else { "/api" };
    info!("Using API route prefix: {}", prefix);

    let state = AppState {
        store,
        gate,
        wedding_date: config.wedding_date,
    };

    create_router_with_state(state, prefix)
}

/// Creates a router with the given store and gate.
pub fn create_router_with_state<S>(state: AppState<S>, prefix: &str) -> Router
where
    S: RsvpStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/rsvps", post(submit_rsvp))
        .route("/site", get(site_info))
        .route("/rsvp-details/unlock", post(unlock))
        .route("/rsvp-details/session", get(session))
        .route("/rsvp-details/rsvps", get(list_rsvps).delete(clear_rsvps))
        .route("/rsvp-details/export", get(export_rsvps))
        .with_state(state);

    let router = if prefix.is_empty() {
        // For tests or when no prefix is needed, don't nest the routes
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        // For production, nest the routes under the prefix
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
