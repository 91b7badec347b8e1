//! HTTP client and request dispatcher for the Automox REST API.
//!
//! `Automox` wraps a `reqwest::Client` and the account API key. Every
//! named operation in the crate funnels through one dispatcher, which
//! exists in two flavors:
//!
//! - [`Automox::request`] — strict mode. Returns the decoded JSON value
//!   or a typed [`AutomoxError`].
//! - [`Automox::dispatch`] — parity mode, used by all named operations.
//!   Collapses every failure (transport, non-2xx status, malformed
//!   JSON) into `None` after emitting one `tracing` warning that
//!   carries the attempted URL and body. Nothing is retried and nothing
//!   is raised; callers see a value or the absence of one.
//!
//! Authentication is a shared secret only: the dispatcher injects the
//! held key into the query string under `api_key` on every request,
//! replacing any caller-supplied value under that name.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::warn;

use crate::error::{AutomoxError, Result};

/// Production API root. All request paths are relative to this.
const BASE_URL: &str = "https://console.automox.com/api/";

/// Query-parameter name the API key travels under.
const API_KEY_PARAM: &str = "api_key";

/// Connect timeout for the API HTTP client.
/// Covers TCP + TLS handshake only.
const API_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout, including response body download. Automox
/// responses are JSON documents, not bulk downloads, so one minute is
/// ample headroom. This is a fixed constant: the client deliberately
/// exposes no timeout configuration.
const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Explicit "no query parameters" marker for [`Automox::request`] and
/// [`Automox::dispatch`]. Pins the generic query type when there is
/// nothing to send.
pub const NO_QUERY: Option<&()> = None;

/// Builds a `reqwest::Client` with explicit timeouts for API calls.
fn build_api_client() -> Client {
    Client::builder()
        .connect_timeout(API_CONNECT_TIMEOUT)
        .timeout(API_REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client for Automox API")
}

// ── Path segments ──────────────────────────────────────────────────────

/// One URL path component. The API addresses resources by alternating
/// fixed names and numeric ids (`servers/123/queues`), so a segment is
/// either a path word or an id.
///
/// `From` impls let call sites write `&["servers".into(), id.into()]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed path word such as `servers` or `queues`.
    Name(&'static str),
    /// Numeric resource id interpolated into the path.
    Id(u64),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&'static str> for Segment {
    fn from(name: &'static str) -> Self {
        Segment::Name(name)
    }
}

impl From<u64> for Segment {
    fn from(id: u64) -> Self {
        Segment::Id(id)
    }
}

/// Joins path segments with `/` separators, in order.
fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

// ── Client ─────────────────────────────────────────────────────────────

/// Client for the Automox REST API.
///
/// Holds the account API key (immutable for the client's lifetime) and
/// a shared `reqwest::Client`. `base_url` is stored as a `String` rather
/// than a `&'static str` so tests can point it at a wiremock server.
pub struct Automox {
    http: Client,
    base_url: String,
    api_key: String,
}

impl Automox {
    /// Creates a client for the production API host. The API key is the
    /// only required configuration.
    pub fn new(api_key: &str) -> Self {
        Automox {
            http: build_api_client(),
            base_url: BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Constructor that accepts a custom base URL, used by tests to
    /// point at a local mock server instead of the real API.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Automox {
            http: build_api_client(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Builds the outgoing `reqwest::Request` for one dispatch.
    ///
    /// The URL is the base joined with the `/`-separated segments plus
    /// the URL-encoded query. The held API key is appended last, after
    /// any caller-supplied `api_key` pair has been stripped — the held
    /// key always wins.
    ///
    /// The body, when present, is transmitted verbatim as the raw
    /// request payload. No JSON encoding happens here; callers that
    /// have structured payloads choose their own textual form.
    fn build_request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        query: Option<&Q>,
        body: Option<&str>,
        segments: &[Segment],
    ) -> Result<reqwest::Request> {
        let url = format!("{}{}", self.base_url, join_segments(segments));

        let mut builder = self.http.request(method, url);
        if let Some(params) = query {
            builder = builder.query(params);
        }
        if let Some(text) = body {
            builder = builder.body(text.to_owned());
        }

        let mut req = builder.build()?;

        // Inject the API key, overwriting any caller-supplied value
        // under the same name.
        let kept: Vec<(String, String)> = req
            .url()
            .query_pairs()
            .filter(|(name, _)| name.as_ref() != API_KEY_PARAM)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        req.url_mut()
            .query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(API_KEY_PARAM, &self.api_key);

        Ok(req)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// The body is read as text before the status check so that non-2xx
    /// responses keep the provider's diagnostic payload in the error.
    async fn execute(&self, req: reqwest::Request) -> Result<Value> {
        let resp = self.http.execute(req).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(AutomoxError::Status { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Strict-mode dispatcher: one HTTP round trip, decoded JSON on
    /// success, typed error on failure.
    ///
    /// This is the opt-in surface for consumers that need to tell a 404
    /// from an unreachable network from a garbled payload. The named
    /// operations do not use it — they go through [`Automox::dispatch`]
    /// for parity with the original client.
    ///
    /// # Errors
    ///
    /// - [`AutomoxError::Transport`] — the request never completed.
    /// - [`AutomoxError::Status`] — non-2xx response; body preserved.
    /// - [`AutomoxError::Decode`] — response payload was not JSON.
    pub async fn request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        query: Option<&Q>,
        body: Option<&str>,
        segments: &[Segment],
    ) -> Result<Value> {
        let req = self.build_request(method, query, body, segments)?;
        self.execute(req).await
    }

    /// Parity-mode dispatcher: every failure is logged and swallowed.
    ///
    /// On success returns the decoded JSON value. On any failure —
    /// transport error, non-2xx status, malformed JSON — emits a single
    /// warning with the attempted URL and body and returns `None`. The
    /// failure classes are deliberately indistinguishable here; that
    /// undifferentiated behavior is the compatibility floor of the
    /// original client.
    pub async fn dispatch<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        query: Option<&Q>,
        body: Option<&str>,
        segments: &[Segment],
    ) -> Option<Value> {
        let req = match self.build_request(method, query, body, segments) {
            Ok(req) => req,
            Err(err) => {
                warn!(error = %err, "failed to build request");
                return None;
            }
        };

        let url = req.url().to_string();
        match self.execute(req).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    url = %url,
                    body = body.unwrap_or_default(),
                    error = %err,
                    "request produced no result"
                );
                None
            }
        }
    }
}
