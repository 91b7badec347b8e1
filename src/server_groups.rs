//! Server group operations for the Automox API.
//!
//! Groups collect servers under a shared policy assignment. The family
//! is CRUD-shaped, with one oddity: group creation POSTs to the
//! singular `servergroup` path and carries the group payload in the
//! `servergroup` query parameter rather than the request body. That is
//! the wire shape the provider accepts; see [`create_server_group`].

use reqwest::Method;
use serde_json::Value;

use crate::client::Automox;

/// Gets all server group objects for the organization.
pub async fn get_server_groups(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servergroups".into()],
        )
        .await
}

/// Gets a specific server group object.
pub async fn get_server_group(
    client: &Automox,
    servergroup_id: u64,
    organization_id: u64,
) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servergroups".into(), servergroup_id.into()],
        )
        .await
}

/// Updates a server group object. `servergroup` is the textual payload
/// transmitted verbatim as the request body.
pub async fn update_server_group(
    client: &Automox,
    servergroup_id: u64,
    organization_id: u64,
    servergroup: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::PUT,
            Some(&[("o", organization_id.to_string())]),
            Some(servergroup),
            &["servergroups".into(), servergroup_id.into()],
        )
        .await
}

/// Creates a server group. The group payload travels in the
/// `servergroup` query parameter of a POST against the singular
/// `servergroup` path — no request body is sent.
pub async fn create_server_group(client: &Automox, servergroup: &str) -> Option<Value> {
    client
        .dispatch(
            Method::POST,
            Some(&[("servergroup", servergroup.to_string())]),
            None,
            &["servergroup".into()],
        )
        .await
}

/// Removes a server group from the organization.
pub async fn delete_server_group(
    client: &Automox,
    servergroup_id: u64,
    organization_id: u64,
) -> Option<Value> {
    client
        .dispatch(
            Method::DELETE,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servergroups".into(), servergroup_id.into()],
        )
        .await
}
