use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{FinancialYear, PeriodType};

/// Month names in financial-year order (April first).
const FINANCIAL_MONTHS: [&str; 12] = [
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "January",
    "February",
    "March",
];

const QUARTER_LABELS: [&str; 4] = [
    "Q1 (Apr-Jun)",
    "Q2 (Jul-Sep)",
    "Q3 (Oct-Dec)",
    "Q4 (Jan-Mar)",
];

const HALF_LABELS: [&str; 2] = ["H1 (Apr-Sep)", "H2 (Oct-Mar)"];

/// One selectable period within a financial year.
///
/// `value` is the machine identifier sent to the backend and must be kept
/// byte-for-byte stable; `label` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub value: String,
    pub label: String,
}

/// A Monday-Sunday window of a weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// 1-based week number within the financial year.
    pub number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn value(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    pub fn label(&self) -> String {
        format!("Week {}: {}", self.number, self.value())
    }
}

/// The Monday-Sunday windows covering a financial year.
///
/// Anchored to the Monday of the week containing April 1, except that an
/// April 1 falling on a Sunday anchors to the NEXT Monday (April 2).
/// Windows are emitted while their start is on or before March 31 of the
/// end year; the last window may run past March 31. Weeks are never split
/// across financial-year boundaries.
pub fn weekly_windows(fy: FinancialYear) -> Vec<WeekWindow> {
    let anchor = fy.first_day();
    let first_monday = match anchor.weekday() {
        Weekday::Sun => anchor + Days::new(1),
        other => anchor - Days::new(other.num_days_from_monday() as u64),
    };

    let last_start = fy.last_day();
    let mut windows = Vec::new();
    let mut start = first_monday;
    let mut number = 1u32;
    while start <= last_start {
        windows.push(WeekWindow {
            number,
            start,
            end: start + Days::new(6),
        });
        start = start + Days::new(7);
        number += 1;
    }
    windows
}

/// All period identifiers for a financial year at the given granularity,
/// in order.
pub fn generate_periods(fy: FinancialYear, period_type: PeriodType) -> Vec<Period> {
    match period_type {
        PeriodType::Weekly => weekly_windows(fy)
            .into_iter()
            .map(|w| Period {
                value: w.value(),
                label: w.label(),
            })
            .collect(),
        PeriodType::Monthly => FINANCIAL_MONTHS
            .iter()
            .enumerate()
            .map(|(i, month)| {
                // April..December belong to the start year, January..March
                // to the end year.
                let year = if i < 9 { fy.start_year() } else { fy.end_year() };
                let value = format!("{} {}", month, year);
                Period {
                    label: value.clone(),
                    value,
                }
            })
            .collect(),
        PeriodType::Quarterly => QUARTER_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| Period {
                value: (i + 1).to_string(),
                label: (*label).to_string(),
            })
            .collect(),
        PeriodType::HalfYearly => HALF_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| Period {
                value: (i + 1).to_string(),
                label: (*label).to_string(),
            })
            .collect(),
        PeriodType::Yearly => vec![Period {
            value: "1".to_string(),
            label: "Full Year".to_string(),
        }],
    }
}

/// 1-based month index in financial order: April = 1 .. March = 12.
pub fn financial_month_index(date: NaiveDate) -> u32 {
    let month = date.month();
    if month >= 4 {
        month - 3
    } else {
        month + 9
    }
}

/// The period identifier that `reference` falls into, if any.
///
/// Always one of the values produced by [`generate_periods`] for the same
/// `(fy, period_type)`. `None` means no generated option matches (for
/// weekly selections with a reference outside the year); the caller leaves
/// the selection unset instead of treating this as an error.
pub fn resolve_current_period(
    fy: FinancialYear,
    period_type: PeriodType,
    reference: NaiveDate,
) -> Option<String> {
    let index = financial_month_index(reference);
    match period_type {
        PeriodType::Weekly => weekly_windows(fy)
            .into_iter()
            .find(|w| w.contains(reference))
            .map(|w| w.value()),
        PeriodType::Monthly => generate_periods(fy, PeriodType::Monthly)
            .into_iter()
            .nth(index as usize - 1)
            .map(|p| p.value),
        PeriodType::Quarterly => Some(index.div_ceil(3).to_string()),
        PeriodType::HalfYearly => Some(index.div_ceil(6).to_string()),
        PeriodType::Yearly => Some("1".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fy(start: i32) -> FinancialYear {
        FinancialYear::from_start_year(start)
    }

    #[test]
    fn monthly_runs_april_to_march_with_year_split() {
        let periods = generate_periods(fy(2023), PeriodType::Monthly);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].value, "April 2023");
        assert_eq!(periods[8].value, "December 2023");
        assert_eq!(periods[9].value, "January 2024");
        assert_eq!(periods[11].value, "March 2024");
    }

    #[test]
    fn quarterly_half_yearly_and_yearly_counts_and_labels() {
        let quarters = generate_periods(fy(2024), PeriodType::Quarterly);
        assert_eq!(quarters.len(), 4);
        assert_eq!(quarters[0].value, "1");
        assert_eq!(quarters[3].label, "Q4 (Jan-Mar)");

        let halves = generate_periods(fy(2024), PeriodType::HalfYearly);
        assert_eq!(halves.len(), 2);
        assert_eq!(halves[1].label, "H2 (Oct-Mar)");

        let years = generate_periods(fy(2024), PeriodType::Yearly);
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].value, "1");
        assert_eq!(years[0].label, "Full Year");
    }

    #[test]
    fn week_one_starts_on_april_first_when_it_is_a_monday() {
        // April 1 2024 is a Monday.
        let windows = weekly_windows(fy(2024));
        assert_eq!(windows[0].start, date(2024, 4, 1));
        assert_eq!(windows[0].end, date(2024, 4, 7));
        assert_eq!(windows[0].value(), "2024-04-01 to 2024-04-07");
        assert_eq!(windows[0].label(), "Week 1: 2024-04-01 to 2024-04-07");
    }

    #[test]
    fn sunday_april_first_rolls_forward_to_monday() {
        // April 1 2018 was a Sunday; the week must start April 2, not
        // March 26.
        let windows = weekly_windows(fy(2018));
        assert_eq!(windows[0].start, date(2018, 4, 2));
        assert_eq!(windows.len(), 52);
        assert_eq!(windows.last().unwrap().end, date(2019, 3, 31));
    }

    #[test]
    fn midweek_april_first_rolls_back_to_monday() {
        // April 1 2025 is a Tuesday; the week starts March 31 2025.
        let windows = weekly_windows(fy(2025));
        assert_eq!(windows[0].start, date(2025, 3, 31));
    }

    #[test]
    fn windows_are_seven_days_and_contiguous() {
        let windows = weekly_windows(fy(2024));
        for w in &windows {
            assert_eq!((w.end - w.start).num_days(), 6);
        }
        for pair in windows.windows(2) {
            assert_eq!(pair[1].start, pair[0].end + Days::new(1));
        }
    }

    #[test]
    fn last_week_may_spill_past_march_31() {
        // FY 2024-2025: March 31 2025 is a Monday, so week 53 runs
        // 2025-03-31 .. 2025-04-06, past the financial year end.
        let windows = weekly_windows(fy(2024));
        assert_eq!(windows.len(), 53);
        let last = windows.last().unwrap();
        assert_eq!(last.start, date(2025, 3, 31));
        assert_eq!(last.end, date(2025, 4, 6));
        assert_eq!(last.value(), "2025-03-31 to 2025-04-06");
    }

    #[test]
    fn financial_month_index_wraps_at_april() {
        assert_eq!(financial_month_index(date(2024, 4, 15)), 1);
        assert_eq!(financial_month_index(date(2024, 12, 1)), 9);
        assert_eq!(financial_month_index(date(2024, 1, 15)), 10);
        assert_eq!(financial_month_index(date(2024, 3, 31)), 12);
    }

    #[test]
    fn january_reference_resolves_to_january_slot() {
        // 2024-01-15 sits in FY 2023-2024; financial month index 10 is the
        // January slot of that year.
        let reference = date(2024, 1, 15);
        let year = FinancialYear::containing(reference);
        assert_eq!(year.to_string(), "2023-2024");
        assert_eq!(
            resolve_current_period(year, PeriodType::Monthly, reference),
            Some("January 2024".to_string())
        );
    }

    #[test]
    fn resolver_output_is_always_a_generated_option() {
        let reference = date(2024, 10, 9);
        let year = FinancialYear::containing(reference);
        for pt in PeriodType::ALL {
            if let Some(value) = resolve_current_period(year, pt, reference) {
                let options = generate_periods(year, pt);
                assert!(
                    options.iter().any(|p| p.value == value),
                    "{pt}: {value} not offered"
                );
            }
        }
    }

    #[test]
    fn quarter_and_half_resolution() {
        let year = fy(2023);
        // January -> index 10 -> Q4, H2.
        let jan = date(2024, 1, 15);
        assert_eq!(
            resolve_current_period(year, PeriodType::Quarterly, jan),
            Some("4".to_string())
        );
        assert_eq!(
            resolve_current_period(year, PeriodType::HalfYearly, jan),
            Some("2".to_string())
        );
        // October -> index 7 -> Q3, H2.
        let oct = date(2023, 10, 2);
        assert_eq!(
            resolve_current_period(year, PeriodType::Quarterly, oct),
            Some("3".to_string())
        );
        assert_eq!(
            resolve_current_period(year, PeriodType::Yearly, oct),
            Some("1".to_string())
        );
    }

    #[test]
    fn weekly_resolution_is_inclusive_and_unset_outside_the_year() {
        let year = fy(2024);
        // Week 1 is 2024-04-01..2024-04-07; both ends count.
        assert_eq!(
            resolve_current_period(year, PeriodType::Weekly, date(2024, 4, 1)),
            Some("2024-04-01 to 2024-04-07".to_string())
        );
        assert_eq!(
            resolve_current_period(year, PeriodType::Weekly, date(2024, 4, 7)),
            Some("2024-04-01 to 2024-04-07".to_string())
        );
        // A reference in some other financial year selects nothing.
        assert_eq!(
            resolve_current_period(year, PeriodType::Weekly, date(2023, 6, 1)),
            None
        );
    }
}
