//! Error types for backend calls and view actions.

use std::fmt;

/// Failure of a single REST call against the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Curl reported an error (DNS, connect, timeout, etc.).
    #[error("transport: {0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("{}", http_message(.status, .reason, .body))]
    Http {
        status: u32,
        reason: String,
        body: String,
    },
    /// Response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Endpoint URL could not be built from the configured base URL.
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    /// An insert with `return=representation` returned no rows.
    #[error("server returned no representation for the created {0}")]
    EmptyRepresentation(&'static str),
    /// Lookup by id matched no row.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

fn http_message(status: &u32, reason: &str, body: &str) -> String {
    let mut msg = format!("server error: {}", status);
    if !reason.is_empty() {
        msg.push(' ');
        msg.push_str(reason);
    }
    let body = body.trim();
    if !body.is_empty() {
        msg.push_str(" - ");
        msg.push_str(body);
    }
    msg
}

/// Failed user action: a short user-facing message plus the underlying cause.
#[derive(Debug)]
pub struct ActionError {
    pub message: &'static str,
    pub source: ApiError,
}

impl ActionError {
    pub fn new(message: &'static str, source: ApiError) -> Self {
        Self { message, source }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
