//! Financial-period calculator.
//!
//! A financial year runs April 1 .. March 31 and is named by its two
//! calendar years ("2024-2025"). Period identifiers slice a financial
//! year at one of five granularities; their string forms are part of the
//! backend wire contract and must not change.

mod context;
mod financial_year;
mod period;
mod period_type;

pub use context::DateContext;
pub use financial_year::{generate_financial_years, FinancialYear, ParseFinancialYearError};
pub use period::{
    financial_month_index, generate_periods, resolve_current_period, weekly_windows, Period,
    WeekWindow,
};
pub use period_type::{ParsePeriodTypeError, PeriodType};
