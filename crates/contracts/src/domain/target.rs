use serde::{Deserialize, Serialize};

use crate::periods::DateContext;

/// A sales target as served by `GET /api/targets`. The backend speaks
/// camelCase for this resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub id: i64,
    pub distributor: String,
    pub region: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub territory: String,
    #[serde(rename = "targetAmount")]
    pub target_amount: f64,
    #[serde(default)]
    pub notes: String,
}

/// Form state for the target editor. Everything is kept as entered; the
/// amount is only parsed once validation passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetDraft {
    pub distributor: String,
    pub region: String,
    pub state: String,
    pub territory: String,
    pub target_amount: String,
    pub notes: String,
}

impl TargetDraft {
    pub fn from_record(record: &TargetRecord) -> Self {
        Self {
            distributor: record.distributor.clone(),
            region: record.region.clone(),
            state: record.state.clone(),
            territory: record.territory.clone(),
            target_amount: format_amount(record.target_amount),
            notes: record.notes.clone(),
        }
    }

    /// Field names that fail validation, in form order. Empty means the
    /// draft can be submitted.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut invalid = Vec::new();
        if self.distributor.trim().is_empty() {
            invalid.push("distributor");
        }
        if self.region.trim().is_empty() {
            invalid.push("region");
        }
        if self.target_amount.trim().is_empty() || !is_valid_amount(self.target_amount.trim()) {
            invalid.push("target_amount");
        }
        invalid
    }

    pub fn validate(&self) -> Result<(), String> {
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(format!("Invalid or missing fields: {}", invalid.join(", ")))
        }
    }

    /// Build the create/update body; fails if validation does.
    pub fn to_payload(&self, context: &DateContext) -> Result<TargetPayload, String> {
        self.validate()?;
        let amount: f64 = self
            .target_amount
            .trim()
            .parse()
            .map_err(|_| "Target amount is not a number".to_string())?;
        Ok(TargetPayload {
            distributor: self.distributor.clone(),
            region: self.region.clone(),
            state: self.state.clone(),
            territory: self.territory.clone(),
            target_amount: amount,
            notes: self.notes.clone(),
            financial_year: context.financial_year.clone(),
            period_type: context.period_type.clone(),
            period_identifier: context.period_identifier.clone(),
        })
    }
}

/// Body of `POST /api/targets` and `PUT /api/targets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPayload {
    pub distributor: String,
    pub region: String,
    pub state: String,
    pub territory: String,
    pub target_amount: f64,
    pub notes: String,
    pub financial_year: String,
    pub period_type: String,
    pub period_identifier: String,
}

/// Digits with at most two decimal places, nothing else.
fn is_valid_amount(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TargetDraft {
        TargetDraft {
            distributor: "ABC Distributors".into(),
            region: "North".into(),
            state: "Punjab".into(),
            territory: "Ludhiana".into(),
            target_amount: "500000".into(),
            notes: "Focus on retail accounts".into(),
        }
    }

    #[test]
    fn amount_allows_at_most_two_decimals() {
        assert!(is_valid_amount("500000"));
        assert!(is_valid_amount("1000.5"));
        assert!(is_valid_amount("1000.50"));
        assert!(!is_valid_amount("1000.505"));
        assert!(!is_valid_amount(".50"));
        assert!(!is_valid_amount("1,000"));
        assert!(!is_valid_amount("-10"));
        assert!(!is_valid_amount("10."));
    }

    #[test]
    fn required_fields_are_reported() {
        let mut d = draft();
        assert!(d.validate().is_ok());
        d.distributor.clear();
        d.target_amount = "abc".into();
        assert_eq!(d.invalid_fields(), vec!["distributor", "target_amount"]);
        assert!(d.validate().is_err());
    }

    #[test]
    fn payload_carries_the_date_context_in_camel_case() {
        let context = DateContext {
            financial_year: "2024-2025".into(),
            period_type: "Quarterly".into(),
            period_identifier: "2".into(),
        };
        let payload = draft().to_payload(&context).unwrap();
        assert_eq!(payload.target_amount, 500000.0);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["targetAmount"], 500000.0);
        assert_eq!(json["financialYear"], "2024-2025");
        assert_eq!(json["periodIdentifier"], "2");
    }

    #[test]
    fn record_round_trips_into_a_draft() {
        let record = TargetRecord {
            id: 7,
            distributor: "XYZ Trading".into(),
            region: "South".into(),
            state: "Tamil Nadu".into(),
            territory: "Chennai".into(),
            target_amount: 750000.0,
            notes: String::new(),
        };
        let d = TargetDraft::from_record(&record);
        assert_eq!(d.target_amount, "750000");
        assert!(d.validate().is_ok());
    }
}
