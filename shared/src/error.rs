use thiserror::Error;

/// Errors surfaced by the remote RSVP store.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("RSVP storage is not configured")]
    NotConfigured,

    #[error("Request to RSVP storage failed: {0}")]
    Request(String),

    #[error("RSVP storage rejected the call ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from RSVP storage: {0}")]
    InvalidResponse(String),
}

/// Error returned to guests when an RSVP submission cannot be saved.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SubmissionError {
    pub message: String,
}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        // Keep the remote rejection message on its own; the guest does not
        // need the status code.
        let message = match err {
            StoreError::Rejected { message, .. } => message,
            other => other.to_string(),
        };
        SubmissionError { message }
    }
}
