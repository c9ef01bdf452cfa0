use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Granularity of reporting periods within a financial year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    Weekly,
    Monthly,
    Quarterly,
    #[serde(rename = "Half-Yearly")]
    HalfYearly,
    Yearly,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period type {0:?}")]
pub struct ParsePeriodTypeError(pub String);

impl PeriodType {
    /// All period types, in the order the UI offers them.
    pub const ALL: [PeriodType; 5] = [
        PeriodType::Weekly,
        PeriodType::Monthly,
        PeriodType::Quarterly,
        PeriodType::HalfYearly,
        PeriodType::Yearly,
    ];

    /// Canonical wire string, shared with the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
            PeriodType::Quarterly => "Quarterly",
            PeriodType::HalfYearly => "Half-Yearly",
            PeriodType::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = ParsePeriodTypeError;

    // Lenient on case and hyphens: older screens sent "half-yearly" etc.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "weekly" => Ok(PeriodType::Weekly),
            "monthly" => Ok(PeriodType::Monthly),
            "quarterly" => Ok(PeriodType::Quarterly),
            "halfyearly" => Ok(PeriodType::HalfYearly),
            "yearly" => Ok(PeriodType::Yearly),
            _ => Err(ParsePeriodTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip() {
        for pt in PeriodType::ALL {
            assert_eq!(pt.as_str().parse::<PeriodType>().unwrap(), pt);
        }
    }

    #[test]
    fn legacy_lowercase_options_still_parse() {
        assert_eq!("monthly".parse::<PeriodType>().unwrap(), PeriodType::Monthly);
        assert_eq!("half-yearly".parse::<PeriodType>().unwrap(), PeriodType::HalfYearly);
        assert_eq!("HalfYearly".parse::<PeriodType>().unwrap(), PeriodType::HalfYearly);
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!("fortnightly".parse::<PeriodType>().is_err());
        assert!("".parse::<PeriodType>().is_err());
    }
}
