use gloo_net::http::Request;

use contracts::domain::target::{TargetPayload, TargetRecord};
use contracts::shared::api::TargetsQuery;

use crate::shared::api_utils::api_url;

/// Fetch targets for one reporting period
pub async fn fetch_targets(query: &TargetsQuery) -> Result<Vec<TargetRecord>, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;

    let response = Request::get(&api_url(&format!("/api/targets?{}", query_string)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load targets: {}", response.status()));
    }

    response
        .json::<Vec<TargetRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new target, returning the stored record
pub async fn create_target(payload: &TargetPayload) -> Result<TargetRecord, String> {
    let response = Request::post(&api_url("/api/targets"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create target: {}", response.status()));
    }

    response
        .json::<TargetRecord>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update an existing target, returning the stored record
pub async fn update_target(id: i64, payload: &TargetPayload) -> Result<TargetRecord, String> {
    let response = Request::put(&api_url(&format!("/api/targets/{}", id)))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update target: {}", response.status()));
    }

    response
        .json::<TargetRecord>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a target
pub async fn delete_target(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/targets/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete target: {}", response.status()));
    }

    Ok(())
}

/// Canned data for development builds when the backend is unreachable.
pub fn sample_targets() -> Vec<TargetRecord> {
    vec![
        TargetRecord {
            id: 1,
            distributor: "ABC Distributors".to_string(),
            region: "North".to_string(),
            state: "Punjab".to_string(),
            territory: "Ludhiana".to_string(),
            target_amount: 500_000.0,
            notes: "Focus on retail accounts".to_string(),
        },
        TargetRecord {
            id: 2,
            distributor: "XYZ Trading".to_string(),
            region: "South".to_string(),
            state: "Tamil Nadu".to_string(),
            territory: "Chennai".to_string(),
            target_amount: 750_000.0,
            notes: "New distributor, provide extra support".to_string(),
        },
        TargetRecord {
            id: 3,
            distributor: "Global Enterprises".to_string(),
            region: "West".to_string(),
            state: "Maharashtra".to_string(),
            territory: "Mumbai".to_string(),
            target_amount: 1_200_000.0,
            notes: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_targets_pass_draft_validation() {
        use contracts::domain::target::TargetDraft;
        for record in sample_targets() {
            assert!(TargetDraft::from_record(&record).validate().is_ok());
        }
    }
}
