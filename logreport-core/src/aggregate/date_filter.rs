use chrono::{DateTime, FixedOffset, NaiveDate};
use std::fmt;

/// Operator-facing date format: year, then DAY, then month.
pub const CLI_DATE_FORMAT: &str = "%Y-%d-%m";

/// Exact calendar-date match, evaluated in each record's own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    date: NaiveDate,
}

impl DateFilter {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parses `YYYY-DD-MM`, e.g. `2025-22-06` for 22 June 2025.
    pub fn parse_cli(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, CLI_DATE_FORMAT).map(Self::new)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn matches(&self, ts: &DateTime<FixedOffset>) -> bool {
        ts.date_naive() == self.date
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}
