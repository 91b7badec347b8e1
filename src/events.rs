//! Event feed operations for the Automox API.

use reqwest::Method;
use serde_json::Value;

use crate::client::{Automox, NO_QUERY};

/// Gets all event objects for the authenticated account.
pub async fn get_events(client: &Automox) -> Option<Value> {
    client
        .dispatch(Method::GET, NO_QUERY, None, &["events".into()])
        .await
}

/// Gets a specific event object.
pub async fn get_event(client: &Automox, event_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            NO_QUERY,
            None,
            &["events".into(), event_id.into()],
        )
        .await
}
