use gloo_net::http::Request;

use contracts::domain::distributor::{Distributor, DistributorsResponse};

use crate::shared::api_utils::api_url;

/// Fetch all distributors
pub async fn fetch_distributors() -> Result<Vec<Distributor>, String> {
    let response = Request::get(&api_url("/api/distributors"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch distributors: {}", response.status()));
    }

    response
        .json::<DistributorsResponse>()
        .await
        .map(|body| body.distributors)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one distributor as raw JSON, used to capture the undo payload
/// before a delete.
pub async fn fetch_distributor_raw(id: i64) -> Result<serde_json::Value, String> {
    let response = Request::get(&api_url(&format!("/api/distributors/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch distributor: {}", response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a distributor. The backend only exposes the legacy form route
/// for this, not a REST DELETE.
pub async fn delete_distributor(id: i64) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/distributors/{}/delete", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete distributor: {}", response.status()));
    }

    Ok(())
}
