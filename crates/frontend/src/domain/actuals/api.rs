use gloo_net::http::Request;

use contracts::domain::actual::{ActualRecord, ActualsResponse, SaveActualsRequest};
use contracts::shared::api::{ActualsQuery, MutationResponse};

use crate::shared::api_utils::api_url;

/// Fetch actuals for one reporting period
pub async fn fetch_actuals(query: &ActualsQuery) -> Result<Vec<ActualRecord>, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;

    let response = Request::get(&api_url(&format!("/api/actuals?{}", query_string)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch actuals: {}", response.status()));
    }

    response
        .json::<ActualsResponse>()
        .await
        .map(|body| body.actuals)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Save a batch of actuals for the selected period
pub async fn save_actuals(request: &SaveActualsRequest) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url("/api/actuals"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save actuals: {}", response.status()));
    }

    response
        .json::<MutationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete one actual
pub async fn delete_actual(id: i64) -> Result<MutationResponse, String> {
    let response = Request::delete(&api_url(&format!("/api/actuals/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete actual: {}", response.status()));
    }

    response
        .json::<MutationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
