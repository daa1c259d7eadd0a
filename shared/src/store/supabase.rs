use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response};
use serde_json::json;

use super::RsvpStore;
use crate::config::SupabaseConfig;
use crate::error::StoreError;
use crate::models::RsvpRow;

/// Name of the RSVP table exposed through the REST endpoint.
pub const RSVP_TABLE: &str = "rsvps";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// RSVP store backed by the Supabase REST API.
///
/// Inserts go straight to the table; reads and deletes go through Postgres
/// functions that check the admin passcode server-side.
pub struct SupabaseRsvpStore {
    http: Client,
    config: Option<SupabaseConfig>,
}

impl SupabaseRsvpStore {
    /// Creates a store for the given project. Passing `None` yields a store
    /// whose every call fails with a configuration error.
    pub fn new(config: Option<SupabaseConfig>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        SupabaseRsvpStore { http, config }
    }

    fn config(&self) -> Result<&SupabaseConfig, StoreError> {
        self.config.as_ref().ok_or(StoreError::NotConfigured)
    }

    fn rest_url(config: &SupabaseConfig, path: &str) -> String {
        format!("{}/rest/v1/{}", config.url.trim_end_matches('/'), path)
    }

    /// Calls a Postgres function through the RPC endpoint. The passcode
    /// travels in the body and is validated by the function itself.
    async fn rpc(&self, function: &str, passcode: &str) -> Result<Response, StoreError> {
        let config = self.config()?;
        let url = Self::rest_url(config, &format!("rpc/{}", function));
        debug!("Calling RSVP storage function {}", function);

        let response = self
            .http
            .post(&url)
            .header("apikey", &config.anon_key)
            .bearer_auth(&config.anon_key)
            .json(&json!({ "passcode": passcode }))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        reject_error_status(response).await
    }
}

/// Turns a non-success response into `StoreError::Rejected`, carrying the
/// remote error message when the body has one.
async fn reject_error_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.clone()
            }
        });

    error!("RSVP storage returned error status {}: {}", status, message);
    Err(StoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RsvpStore for SupabaseRsvpStore {
    async fn insert_rsvp(&self, row: &RsvpRow) -> Result<(), StoreError> {
        let config = self.config()?;
        let url = Self::rest_url(config, RSVP_TABLE);

        let response = self
            .http
            .post(&url)
            .header("apikey", &config.anon_key)
            .bearer_auth(&config.anon_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        reject_error_status(response).await?;
        Ok(())
    }

    async fn list_rsvps(&self, passcode: &str) -> Result<Vec<RsvpRow>, StoreError> {
        let response = self.rpc("list_rsvps", passcode).await?;
        response
            .json::<Vec<RsvpRow>>()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    async fn clear_rsvps(&self, passcode: &str) -> Result<(), StoreError> {
        self.rpc("clear_rsvps", passcode).await?;
        Ok(())
    }
}
