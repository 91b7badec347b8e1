//! Software inventory operations for the Automox API.
//!
//! This module covers the "Software" endpoint family: the packages and
//! patches known to an organization, and per-version patch state.
//!
//! | Function | Method & path |
//! |----------|---------------|
//! | [`get_software`] | GET `software` |
//! | [`get_software_versions`] | GET `software_version` |
//!
//! ## Optional filters
//!
//! Both listings accept optional server-side filters. A filter is
//! included in the outgoing query only when supplied; unsupplied
//! filters are omitted entirely, never sent as empty or null. The
//! filter sets are plain structs of `Option` fields with a `Default`
//! impl, so call sites name only what they set:
//!
//! ```ignore
//! let needing_approval = get_software_versions(
//!     &client,
//!     org_id,
//!     &SoftwareVersionFilters {
//!         needs_approval: Some(true),
//!         ..Default::default()
//!     },
//! )
//! .await;
//! ```

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::Automox;

// ── Filter types ───────────────────────────────────────────────────────

/// Optional server-side filters for [`get_software_versions`].
///
/// Every field maps to one query parameter under the provider's name
/// (`policyId`, `needsApproval`, `needsAttention`, `exceptions`,
/// `pendingUpdate`, `l`, `p`) and is sent only when `Some`.
#[derive(Debug, Clone, Default)]
pub struct SoftwareVersionFilters {
    /// Restrict to packages governed by this policy.
    pub policy_id: Option<u64>,
    /// Only packages awaiting (or not awaiting) manual approval.
    pub needs_approval: Option<bool>,
    /// Only packages flagged (or not flagged) as needing attention.
    pub needs_attention: Option<bool>,
    /// Only packages with (or without) approval exceptions.
    pub exceptions: Option<bool>,
    /// Only packages with (or without) a pending update.
    pub pending_update: Option<bool>,
    /// Page size, passed through as the provider's `l` parameter.
    pub limit: Option<u32>,
    /// Page number, passed through as the provider's `p` parameter.
    pub page: Option<u32>,
}

/// Wire form of the `software_version` query: the mandatory
/// organization id plus the optional filters under their provider
/// names. Serialized straight into the query string; `None` fields are
/// skipped so absent filters never appear on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SoftwareVersionQuery {
    o: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    needs_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    needs_attention: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exceptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_update: Option<bool>,
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(rename = "p", skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

/// Wire form of the `software` query.
#[derive(Serialize)]
struct SoftwareQuery<'a> {
    o: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(rename = "groupID", skip_serializing_if = "Option::is_none")]
    group_id: Option<u64>,
}

// ── Endpoint functions ─────────────────────────────────────────────────

/// Retrieves software packages and patches for an organization.
///
/// `name` narrows the list to packages matching the given name, `limit`
/// caps the page size, and `group_id` scopes to one server group. Each
/// is sent only when supplied.
pub async fn get_software(
    client: &Automox,
    organization_id: u64,
    name: Option<&str>,
    limit: Option<u32>,
    group_id: Option<u64>,
) -> Option<Value> {
    let query = SoftwareQuery {
        o: organization_id,
        name,
        limit,
        group_id,
    };
    client
        .dispatch(Method::GET, Some(&query), None, &["software".into()])
        .await
}

/// Retrieves software packages and patches for an organization, a
/// specific policy, or just those needing approval, attention,
/// exceptions, or a pending update.
pub async fn get_software_versions(
    client: &Automox,
    organization_id: u64,
    filters: &SoftwareVersionFilters,
) -> Option<Value> {
    let query = SoftwareVersionQuery {
        o: organization_id,
        policy_id: filters.policy_id,
        needs_approval: filters.needs_approval,
        needs_attention: filters.needs_attention,
        exceptions: filters.exceptions,
        pending_update: filters.pending_update,
        limit: filters.limit,
        page: filters.page,
    };
    client
        .dispatch(Method::GET, Some(&query), None, &["software_version".into()])
        .await
}
