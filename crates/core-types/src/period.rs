use crate::error::CoreError;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of reporting periods a caller may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodToken {
    CurrentMonth,
    LastMonth,
    CurrentQuarter,
    LastYear,
}

impl PeriodToken {
    /// The wire form of the token, as it appears in query strings and
    /// generated filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodToken::CurrentMonth => "current_month",
            PeriodToken::LastMonth => "last_month",
            PeriodToken::CurrentQuarter => "current_quarter",
            PeriodToken::LastYear => "last_year",
        }
    }
}

impl FromStr for PeriodToken {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current_month" => Ok(PeriodToken::CurrentMonth),
            "last_month" => Ok(PeriodToken::LastMonth),
            "current_quarter" => Ok(PeriodToken::CurrentQuarter),
            "last_year" => Ok(PeriodToken::LastYear),
            other => Err(CoreError::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete, half-open reporting interval: `[start, end)`.
///
/// The half-open representation guarantees that adjacent periods never
/// overlap and never gap, so a transaction is counted by exactly one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    /// Human-readable label, e.g. "August 2026" or "Q3 2026".
    pub label: String,
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

impl PeriodRange {
    /// True if `instant` falls inside the interval.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }

    /// The first calendar day of the period.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// The last *inclusive* calendar day of the period.
    ///
    /// The interval is stored half-open, but humans expect a closed range on
    /// a statement, so the exclusive bound is pulled back by one millisecond
    /// before truncating to a date.
    pub fn last_inclusive_date(&self) -> NaiveDate {
        (self.end - Duration::milliseconds(1)).date_naive()
    }
}
