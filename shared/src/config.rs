use std::env;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::warn;
use once_cell::sync::Lazy;

/// Admin passcode used when RSVP_ADMIN_PASS is not set.
pub const DEFAULT_ADMIN_PASS: &str = "1234";

/// Wedding date used when RSVP_WEDDING_DATE is not set.
pub const DEFAULT_WEDDING_DATE: &str = "2026-01-22T09:00:00Z";

/// Path of the persisted admin session state when RSVP_STATE_PATH is not set.
pub const DEFAULT_STATE_PATH: &str = "rsvp_admin_state.json";

static DEFAULT_WEDDING_INSTANT: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339(DEFAULT_WEDDING_DATE)
        .expect("default wedding date is valid RFC 3339")
        .with_timezone(&Utc)
});

/// Connection details for the remote Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Runtime configuration of the RSVP site service.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub admin_pass: String,
    pub supabase: Option<SupabaseConfig>,
    pub state_path: PathBuf,
    pub wedding_date: DateTime<Utc>,
}

impl SiteConfig {
    /// Reads the configuration from environment variables.
    ///
    /// A missing Supabase URL or key is not fatal. It is logged once here,
    /// and every remote storage call afterwards fails with a configuration
    /// error instead.
    pub fn from_env() -> Self {
        let admin_pass =
            non_empty_var("RSVP_ADMIN_PASS").unwrap_or_else(|| DEFAULT_ADMIN_PASS.to_string());

        let supabase = match (
            non_empty_var("SUPABASE_URL"),
            non_empty_var("SUPABASE_ANON_KEY"),
        ) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig { url, anon_key }),
            _ => {
                warn!("Supabase configuration missing. RSVP storage will not work.");
                None
            }
        };

        let state_path = non_empty_var("RSVP_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));

        let wedding_date = wedding_date_from(env::var("RSVP_WEDDING_DATE").ok());

        SiteConfig {
            admin_pass,
            supabase,
            state_path,
            wedding_date,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn wedding_date_from(raw: Option<String>) -> DateTime<Utc> {
    match raw {
        Some(value) => match DateTime::parse_from_rfc3339(&value) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(err) => {
                warn!("Ignoring invalid RSVP_WEDDING_DATE {:?}: {}", value, err);
                *DEFAULT_WEDDING_INSTANT
            }
        },
        None => *DEFAULT_WEDDING_INSTANT,
    }
}
