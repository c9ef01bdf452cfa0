use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{generate_periods, resolve_current_period, FinancialYear, PeriodType};

/// The reporting-period selection: financial year, period type and period
/// identifier, all as their wire strings. Empty string means "not
/// selected".
///
/// A context is *valid* only when all three parts are set; consumers must
/// not load data for a partial context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateContext {
    pub financial_year: String,
    pub period_type: String,
    pub period_identifier: String,
}

impl DateContext {
    pub fn is_valid(&self) -> bool {
        !self.financial_year.is_empty()
            && !self.period_type.is_empty()
            && !self.period_identifier.is_empty()
    }

    /// The default selection for a fresh screen: the financial year
    /// containing `today`, monthly granularity, current month.
    pub fn default_for(today: NaiveDate) -> Self {
        let year = FinancialYear::containing(today);
        let period_type = PeriodType::Monthly;
        let period_identifier =
            resolve_current_period(year, period_type, today).unwrap_or_default();
        Self {
            financial_year: year.to_string(),
            period_type: period_type.as_str().to_string(),
            period_identifier,
        }
    }

    /// Human-readable summary, e.g. `"2024-2025 - Q2 (Jul-Sep)"`.
    /// `None` while the context is incomplete or holds unknown values.
    pub fn formatted_label(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let year: FinancialYear = self.financial_year.parse().ok()?;
        let period_type: PeriodType = self.period_type.parse().ok()?;
        let label = generate_periods(year, period_type)
            .into_iter()
            .find(|p| p.value == self.period_identifier)?
            .label;
        Some(format!("{} - {}", self.financial_year, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn partial_contexts_are_invalid() {
        let mut ctx = DateContext::default();
        assert!(!ctx.is_valid());
        ctx.financial_year = "2024-2025".into();
        ctx.period_type = "Monthly".into();
        assert!(!ctx.is_valid());
        ctx.period_identifier = "April 2024".into();
        assert!(ctx.is_valid());
    }

    #[test]
    fn default_selection_is_current_year_and_month() {
        let ctx = DateContext::default_for(date(2024, 1, 15));
        assert_eq!(ctx.financial_year, "2023-2024");
        assert_eq!(ctx.period_type, "Monthly");
        assert_eq!(ctx.period_identifier, "January 2024");
        assert!(ctx.is_valid());
    }

    #[test]
    fn formatted_label_uses_the_period_label() {
        let ctx = DateContext {
            financial_year: "2024-2025".into(),
            period_type: "Quarterly".into(),
            period_identifier: "2".into(),
        };
        assert_eq!(
            ctx.formatted_label().as_deref(),
            Some("2024-2025 - Q2 (Jul-Sep)")
        );
    }

    #[test]
    fn formatted_label_is_none_for_unknown_identifier() {
        let ctx = DateContext {
            financial_year: "2024-2025".into(),
            period_type: "Quarterly".into(),
            period_identifier: "7".into(),
        };
        assert_eq!(ctx.formatted_label(), None);
        assert_eq!(DateContext::default().formatted_label(), None);
    }
}
