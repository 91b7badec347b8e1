//! Manual approval operations for the Automox API.

use reqwest::Method;
use serde_json::Value;

use crate::client::{Automox, NO_QUERY};

/// Updates a manual approval record. Set the `manual_approval`
/// attribute of the approval payload to `true` to approve a patch, or
/// `false` to reject it. `approval` is the textual payload transmitted
/// verbatim as the request body.
pub async fn update_approval(
    client: &Automox,
    approval_id: u64,
    approval: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::PUT,
            NO_QUERY,
            Some(approval),
            &["approvals".into(), approval_id.into()],
        )
        .await
}
