//! Server (endpoint) operations for the Automox API.
//!
//! This module covers the "Servers" endpoint family — the managed
//! devices of an organization, the packages discovered on them, and
//! their command queues. Every operation scopes to an organization via
//! the `o` query parameter.
//!
//! | Function | Method & path |
//! |----------|---------------|
//! | [`get_servers`] | GET `servers` |
//! | [`get_server`] | GET `servers/{id}` |
//! | [`get_server_packages`] | GET `servers/{id}/packages` |
//! | [`get_server_queues`] | GET `servers/{id}/queues` |
//! | [`issue_command`] | GET `servers/{id}/queues` (command in body) |
//! | [`update_server`] | PUT `servers/{id}` |
//! | [`delete_server`] | DELETE `servers/{id}` |
//!
//! ## Command issuance
//!
//! [`issue_command`] queues a command (install a set of patches, reboot
//! the endpoint) by sending the command payload as the request body of
//! a **GET** to the queue path. A state-changing GET is contrary to
//! REST convention, but it is what the provider's queue endpoint
//! expects; the method must not be "corrected" without breaking the
//! call.

use reqwest::Method;
use serde_json::{json, Value};

use crate::client::Automox;

/// Gets all server objects the key is authorized to see in the
/// organization.
pub async fn get_servers(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servers".into()],
        )
        .await
}

/// Gets a specific server object.
pub async fn get_server(client: &Automox, server_id: u64, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servers".into(), server_id.into()],
        )
        .await
}

/// Returns the software packages discovered on the specified server.
pub async fn get_server_packages(
    client: &Automox,
    server_id: u64,
    organization_id: u64,
) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servers".into(), server_id.into(), "packages".into()],
        )
        .await
}

/// Returns the command queue for the specified server.
pub async fn get_server_queues(
    client: &Automox,
    server_id: u64,
    organization_id: u64,
) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servers".into(), server_id.into(), "queues".into()],
        )
        .await
}

/// Issues a command to an endpoint — install a specific set of patches,
/// reboot, and so on.
///
/// The command rides in the request body of a GET to the queue path
/// (see the module docs); the payload is the textual form of a one-key
/// `command` mapping.
pub async fn issue_command(
    client: &Automox,
    server_id: u64,
    organization_id: u64,
    command: &str,
) -> Option<Value> {
    let body = json!({ "command": command }).to_string();
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            Some(&body),
            &["servers".into(), server_id.into(), "queues".into()],
        )
        .await
}

/// Updates a server object. `server` is the textual payload transmitted
/// verbatim as the request body.
pub async fn update_server(
    client: &Automox,
    server_id: u64,
    organization_id: u64,
    server: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::PUT,
            Some(&[("o", organization_id.to_string())]),
            Some(server),
            &["servers".into(), server_id.into()],
        )
        .await
}

/// Removes a server from the organization.
pub async fn delete_server(
    client: &Automox,
    server_id: u64,
    organization_id: u64,
) -> Option<Value> {
    client
        .dispatch(
            Method::DELETE,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["servers".into(), server_id.into()],
        )
        .await
}
