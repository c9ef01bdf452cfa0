use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// A financial year: April 1 of `start_year` to March 31 of `start_year + 1`.
///
/// The canonical identifier is `"<startYear>-<startYear+1>"`, e.g.
/// `"2024-2025"`. That string is what the backend stores and filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FinancialYear {
    start_year: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFinancialYearError {
    #[error("financial year must look like \"2024-2025\", got {0:?}")]
    Malformed(String),
    #[error("financial year {0:?} does not end the year after it starts")]
    NonContiguous(String),
}

impl FinancialYear {
    pub fn from_start_year(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year containing `date`: April or later belongs to the
    /// year starting that April, January-March to the year started the
    /// previous April.
    pub fn containing(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    /// April 1 of the start year.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 4, 1).expect("April 1 exists in every year")
    }

    /// March 31 of the end year.
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year(), 3, 31).expect("March 31 exists in every year")
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.end_year())
    }
}

impl FromStr for FinancialYear {
    type Err = ParseFinancialYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ParseFinancialYearError::Malformed(s.to_string()))?;
        let start: i32 = start
            .trim()
            .parse()
            .map_err(|_| ParseFinancialYearError::Malformed(s.to_string()))?;
        let end: i32 = end
            .trim()
            .parse()
            .map_err(|_| ParseFinancialYearError::Malformed(s.to_string()))?;
        if end != start + 1 {
            return Err(ParseFinancialYearError::NonContiguous(s.to_string()));
        }
        Ok(Self { start_year: start })
    }
}

/// Generate the selectable financial years around a reference date.
///
/// One year per offset in `[-years_before, +years_after]` relative to the
/// financial year containing `reference`, ascending. Always succeeds.
pub fn generate_financial_years(
    reference: NaiveDate,
    years_before: u32,
    years_after: u32,
) -> Vec<FinancialYear> {
    let current = FinancialYear::containing(reference);
    let before = years_before as i32;
    let after = years_after as i32;
    (-before..=after)
        .map(|offset| FinancialYear::from_start_year(current.start_year + offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn april_starts_a_new_financial_year() {
        assert_eq!(FinancialYear::containing(date(2024, 4, 1)).to_string(), "2024-2025");
        assert_eq!(FinancialYear::containing(date(2024, 12, 31)).to_string(), "2024-2025");
        assert_eq!(FinancialYear::containing(date(2025, 3, 31)).to_string(), "2024-2025");
        assert_eq!(FinancialYear::containing(date(2024, 3, 31)).to_string(), "2023-2024");
        assert_eq!(FinancialYear::containing(date(2024, 1, 15)).to_string(), "2023-2024");
    }

    #[test]
    fn generated_range_is_contiguous_and_contains_reference_year() {
        let reference = date(2024, 7, 10);
        let years = generate_financial_years(reference, 2, 1);
        assert_eq!(years.len(), 4);
        for pair in years.windows(2) {
            assert_eq!(pair[1].start_year(), pair[0].start_year() + 1);
        }
        assert!(years.contains(&FinancialYear::containing(reference)));
        assert_eq!(years.first().unwrap().to_string(), "2022-2023");
        assert_eq!(years.last().unwrap().to_string(), "2025-2026");
    }

    #[test]
    fn display_parse_round_trip() {
        let fy = FinancialYear::from_start_year(2023);
        let parsed: FinancialYear = fy.to_string().parse().unwrap();
        assert_eq!(parsed, fy);
        assert_eq!(parsed.start_year(), 2023);
        assert_eq!(parsed.end_year(), 2024);
    }

    #[test]
    fn rejects_malformed_and_non_contiguous_strings() {
        assert!("2024".parse::<FinancialYear>().is_err());
        assert!("twenty-24".parse::<FinancialYear>().is_err());
        assert_eq!(
            "2024-2026".parse::<FinancialYear>(),
            Err(ParseFinancialYearError::NonContiguous("2024-2026".into()))
        );
    }

    #[test]
    fn year_boundaries() {
        let fy = FinancialYear::from_start_year(2024);
        assert_eq!(fy.first_day(), date(2024, 4, 1));
        assert_eq!(fy.last_day(), date(2025, 3, 31));
    }
}
