//! API error types.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Generic message for transport failures.
pub const NETWORK_FAILED: &str = "Network request failed";
/// Generic message for bodies that are not the JSON we expected.
pub const INVALID_RESPONSE: &str = "Invalid response from server";

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// Displays as the server's detail text alone so it can be shown verbatim.
    #[error("{detail}")]
    Request { status: StatusCode, detail: String },

    /// The request never produced a usable response.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

/// Pull the human-readable `detail` out of an error body.
///
/// The backend sends either a plain string or, for validation failures, a
/// list of objects each carrying a `msg`.
pub fn detail_from_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
