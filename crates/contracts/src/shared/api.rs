use serde::{Deserialize, Serialize};

use crate::periods::DateContext;

/// Envelope returned by mutating endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Query string for `GET /api/actuals` (snake_case keys).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActualsQuery {
    pub financial_year: String,
    pub period_type: String,
    pub period_identifier: String,
}

impl ActualsQuery {
    pub fn from_context(context: &DateContext) -> Self {
        Self {
            financial_year: context.financial_year.clone(),
            period_type: context.period_type.clone(),
            period_identifier: context.period_identifier.clone(),
        }
    }
}

/// Query string for `GET /api/targets` (camelCase keys, matching the
/// targets resource).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsQuery {
    pub financial_year: String,
    pub period_type: String,
    pub period_identifier: String,
}

impl TargetsQuery {
    pub fn from_context(context: &DateContext) -> Self {
        Self {
            financial_year: context.financial_year.clone(),
            period_type: context.period_type.clone(),
            period_identifier: context.period_identifier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_use_the_casing_their_endpoints_expect() {
        let context = DateContext {
            financial_year: "2024-2025".into(),
            period_type: "Weekly".into(),
            period_identifier: "2024-04-01 to 2024-04-07".into(),
        };
        let actuals = serde_json::to_value(ActualsQuery::from_context(&context)).unwrap();
        assert!(actuals.get("financial_year").is_some());
        let targets = serde_json::to_value(TargetsQuery::from_context(&context)).unwrap();
        assert!(targets.get("financialYear").is_some());
    }

    #[test]
    fn mutation_response_defaults_are_safe() {
        let parsed: MutationResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert!(parsed.message.is_none());
    }
}
