//! Organization operations for the Automox API.

use reqwest::Method;
use serde_json::Value;

use crate::client::{Automox, NO_QUERY};

/// Gets all organizations visible to the API key.
pub async fn get_organizations(client: &Automox) -> Option<Value> {
    client
        .dispatch(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await
}

/// Returns all software packages discovered on all servers of an
/// organization.
pub async fn get_organization_packages(client: &Automox, organization_id: u64) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            NO_QUERY,
            None,
            &["orgs".into(), organization_id.into(), "packages".into()],
        )
        .await
}
