//! Async Rust client library for the Automox endpoint-management REST API.
//!
//! Provides a thin binding over the Automox console API: device
//! inventory, patch policies, manual approvals, command queues, and
//! reports. Every operation builds a URL from path segments and query
//! parameters, attaches the account API key, issues one HTTP call, and
//! hands back the decoded JSON value unmodified.
//!
//! The API is rate limited to 5000 requests per hour per key; the
//! provider answers 429 when the budget is exhausted. This crate does
//! not retry, paginate, or cache on its own — it passes the provider's
//! offset/limit parameters through and nothing more.
//!
//! # Modules
//!
//! - [`client`] — The `Automox` client and the request dispatcher.
//! - [`error`] — Typed error hierarchy (`AutomoxError`) for strict mode.
//! - [`approvals`] — Manual patch approval updates.
//! - [`servers`] — Endpoint inventory, packages, queues, and commands.
//! - [`server_groups`] — Server group management.
//! - [`orgs`] — Organization listing and organization-wide packages.
//! - [`events`] — Account event feed.
//! - [`users`] — User listing and per-user command history.
//! - [`policies`] — Patch policies, stats, sets, and remediation.
//! - [`reports`] — Prepatch and non-compliance reports.
//! - [`software`] — Software and software-version listings with filters.
//!
//! # Failure model
//!
//! Named operations return `Option<serde_json::Value>`: the decoded
//! response on success, `None` on any failure. The failed request's URL
//! and body are emitted through the `tracing` facade. Consumers that
//! need to distinguish failure classes call
//! [`Automox::request`](client::Automox::request) directly and receive
//! an [`AutomoxError`](error::AutomoxError).
//!
//! # Quick Start
//!
//! ```ignore
//! use automox_api::Automox;
//! use automox_api::{servers, software};
//!
//! let client = Automox::new("API-KEY");
//! let devices = servers::get_servers(&client, 4242).await;
//! let patches = software::get_software_versions(
//!     &client,
//!     4242,
//!     &software::SoftwareVersionFilters {
//!         needs_approval: Some(true),
//!         ..Default::default()
//!     },
//! )
//! .await;
//! ```

#![warn(missing_docs)]

pub mod approvals;
pub mod client;
pub mod error;
pub mod events;
pub mod orgs;
pub mod policies;
pub mod reports;
pub mod server_groups;
pub mod servers;
pub mod software;
pub mod users;

pub use client::{Automox, Segment, NO_QUERY};
pub use error::AutomoxError;
