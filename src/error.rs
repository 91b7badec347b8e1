//! Typed error hierarchy for the automox-api crate.
//!
//! `AutomoxError` is the strict-mode error surface. The named operations
//! never return it — they collapse every failure into a logged `None`
//! for parity with the original client — but callers who invoke
//! [`Automox::request`](crate::client::Automox::request) directly get
//! the full taxonomy:
//!
//! - `Transport` — the request never produced an HTTP status (DNS, TCP,
//!   TLS, timeout).
//! - `Status` — the API answered with a non-success status. The raw
//!   response body is preserved; Automox error payloads carry the
//!   diagnostic detail that `error_for_status()` would throw away.
//! - `Decode` — the response payload was not valid JSON.

use reqwest::StatusCode;

/// Unified error type for strict-mode requests.
///
/// Each variant corresponds to a distinct failure boundary. `#[source]`
/// / `#[from]` wiring gives callers the full cause chain via
/// `Error::source()`.
#[derive(Debug, thiserror::Error)]
pub enum AutomoxError {
    /// A network-level failure occurred (DNS resolution, TCP connection,
    /// TLS handshake, request timeout, etc.). No HTTP status code is
    /// available because the request did not complete.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Automox API returned a non-success HTTP status code.
    ///
    /// The body is kept verbatim — a 429 carries the rate-limit notice,
    /// a 400 usually names the offending parameter.
    #[error("API error {status}: {body}")]
    Status {
        /// The HTTP status code returned by the API.
        status: StatusCode,
        /// The raw response body text. May be empty if the body could
        /// not be read.
        body: String,
    },

    /// JSON deserialization of the response payload failed.
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AutomoxError>;
