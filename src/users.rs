//! User operations for the Automox API.

use reqwest::Method;
use serde_json::Value;

use crate::client::{Automox, NO_QUERY};

/// Gets all user objects for the organization.
pub async fn get_users(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("o", organization_id.to_string())]),
            None,
            &["users".into()],
        )
        .await
}

/// Gets all commands executed for the specified user.
pub async fn get_user_queues(client: &Automox, user_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            NO_QUERY,
            None,
            &["users".into(), user_id.into(), "queues".into()],
        )
        .await
}
