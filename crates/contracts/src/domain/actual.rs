use serde::{Deserialize, Serialize};

use crate::periods::DateContext;

/// One recorded actual as served by `GET /api/actuals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualRecord {
    pub id: i64,
    pub distributor_id: i64,
    pub value: f64,
    /// Target assigned for the same period, when one exists.
    #[serde(default)]
    pub target: Option<f64>,
    pub period_identifier: String,
}

impl ActualRecord {
    /// Attainment against target in percent; `None` without a positive
    /// target.
    pub fn attainment_percent(&self) -> Option<f64> {
        match self.target {
            Some(target) if target > 0.0 => Some(self.value / target * 100.0),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActualsResponse {
    #[serde(default)]
    pub actuals: Vec<ActualRecord>,
}

/// One entry of a bulk save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualEntry {
    pub distributor_id: i64,
    pub value: f64,
}

/// Body of `POST /api/actuals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveActualsRequest {
    pub financial_year: String,
    pub period_type: String,
    pub period_identifier: String,
    pub actuals: Vec<ActualEntry>,
}

impl SaveActualsRequest {
    pub fn new(context: &DateContext, actuals: Vec<ActualEntry>) -> Self {
        Self {
            financial_year: context.financial_year.clone(),
            period_type: context.period_type.clone(),
            period_identifier: context.period_identifier.clone(),
            actuals,
        }
    }

    /// Local validation, run before any network call.
    pub fn validate(&self) -> Result<(), String> {
        if self.financial_year.is_empty()
            || self.period_type.is_empty()
            || self.period_identifier.is_empty()
        {
            return Err(
                "Please select a financial year, period type, and period identifier.".into(),
            );
        }
        if self.actuals.is_empty() {
            return Err("Please enter at least one actual value.".into());
        }
        if self.actuals.iter().any(|a| !a.value.is_finite() || a.value < 0.0) {
            return Err("Actual values must be zero or positive numbers.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DateContext {
        DateContext {
            financial_year: "2024-2025".into(),
            period_type: "Monthly".into(),
            period_identifier: "April 2024".into(),
        }
    }

    #[test]
    fn attainment_needs_a_positive_target() {
        let mut actual = ActualRecord {
            id: 1,
            distributor_id: 2,
            value: 50.0,
            target: Some(200.0),
            period_identifier: "April 2024".into(),
        };
        assert_eq!(actual.attainment_percent(), Some(25.0));
        actual.target = Some(0.0);
        assert_eq!(actual.attainment_percent(), None);
        actual.target = None;
        assert_eq!(actual.attainment_percent(), None);
    }

    #[test]
    fn save_request_requires_a_full_context_and_entries() {
        let empty = SaveActualsRequest::new(&DateContext::default(), vec![]);
        assert!(empty.validate().is_err());

        let no_entries = SaveActualsRequest::new(&context(), vec![]);
        assert!(no_entries.validate().is_err());

        let negative = SaveActualsRequest::new(
            &context(),
            vec![ActualEntry {
                distributor_id: 1,
                value: -3.0,
            }],
        );
        assert!(negative.validate().is_err());

        let ok = SaveActualsRequest::new(
            &context(),
            vec![ActualEntry {
                distributor_id: 1,
                value: 120.5,
            }],
        );
        assert!(ok.validate().is_ok());
    }
}
