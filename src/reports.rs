//! Report operations for the Automox API.
//!
//! Both reports take a `startDate` anchor (ISO date string) and return
//! provider-shaped JSON documents.

use reqwest::Method;
use serde_json::Value;

use crate::client::Automox;

/// Retrieves the prepatch report.
pub async fn get_prepatch_report(client: &Automox, start_date: &str) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("startDate", start_date.to_string())]),
            None,
            &["reports".into(), "prepatch".into()],
        )
        .await
}

/// Retrieves the non-compliant devices report.
pub async fn get_noncompliant_devices_report(
    client: &Automox,
    start_date: &str,
) -> Option<Value> {
    client
        .dispatch(
            Method::GET,
            Some(&[("startDate", start_date.to_string())]),
            None,
            &["reports".into(), "noncompliance".into()],
        )
        .await
}
