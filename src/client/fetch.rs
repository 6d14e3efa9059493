//! HTTP fetch for the table client

use reqwest::Client;
use serde_json::Value;

use super::ClientError;

/// Fetch the roster endpoint and return the raw JSON body.
///
/// The body is deliberately untyped: normalization downstream copes
/// with whatever envelope the server answered in.
pub async fn fetch_bowlers(client: &Client, base_url: &str) -> Result<Value, ClientError> {
    let url = format!("{}/api/bowlers", base_url.trim_end_matches('/'));

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(body)
}
