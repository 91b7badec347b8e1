//! Patch policy operations for the Automox API.
//!
//! Policies drive patching behavior per organization; policy stats and
//! policy sets are read-only aggregates over them.
//!
//! | Function | Method & path |
//! |----------|---------------|
//! | [`get_policies`] | GET `policies` |
//! | [`get_policy`] | GET `policies/{id}` |
//! | [`update_policy`] | PUT `policies/{id}` |
//! | [`get_policy_stats`] | GET `policystats` |
//! | [`get_policy_sets`] | GET `policysets` |
//! | [`schedule_policy_remediation`] | POST `policies/{id}/action` |

use reqwest::Method;
use serde_json::Value;

use crate::client::Automox;

/// Gets all policy objects for the organization.
pub async fn get_policies(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["policies".into()],
        )
        .await
}

/// Gets a specific policy object.
pub async fn get_policy(client: &Automox, policy_id: u64, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["policies".into(), policy_id.into()],
        )
        .await
}

/// Updates a policy object. `policy` is the textual payload transmitted
/// verbatim as the request body.
pub async fn update_policy(
    client: &Automox,
    policy_id: u64,
    organization_id: u64,
    policy: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::PUT,
            Some(&[("o", organization_id.to_string())]),
            Some(policy),
            &["policies".into(), policy_id.into()],
        )
        .await
}

/// Gets policy stats for all policies of the organization.
pub async fn get_policy_stats(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["policystats".into()],
        )
        .await
}

/// Gets all policy set objects for the organization.
pub async fn get_policy_sets(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["policysets".into()],
        )
        .await
}

/// Schedules a policy for immediate remediation. `action` is the
/// textual payload transmitted verbatim as the request body.
pub async fn schedule_policy_remediation(
    client: &Automox,
    policy_id: u64,
    organization_id: u64,
    action: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::POST,
            Some(&[("o", organization_id.to_string())]),
            Some(action),
            &["policies".into(), policy_id.into(), "action".into()],
        )
        .await
}
