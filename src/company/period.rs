use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::StatementError;

/// Inclusive date range a statement is computed over.
///
/// The fields are private: the only way to obtain a period is through
/// [`ReportingPeriod::new`], which rejects `start > end`, so every period the
/// engine sees is valid by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "PeriodBounds", into = "PeriodBounds")]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PeriodBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<PeriodBounds> for ReportingPeriod {
    type Error = StatementError;

    fn try_from(bounds: PeriodBounds) -> Result<Self, Self::Error> {
        ReportingPeriod::new(bounds.start, bounds.end)
    }
}

impl From<ReportingPeriod> for PeriodBounds {
    fn from(period: ReportingPeriod) -> Self {
        PeriodBounds {
            start: period.start,
            end: period.end,
        }
    }
}

impl ReportingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, StatementError> {
        if start > end {
            return Err(StatementError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whole calendar month, `None` for an out-of-range month number.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Stable key used in export file names, e.g. `2025-01-01_2025-01-31`.
    pub fn key(&self) -> String {
        format!(
            "{}_{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatementError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = ReportingPeriod::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, StatementError::InvalidPeriod { .. }));
    }

    #[test]
    fn bounds_are_inclusive() {
        let period = ReportingPeriod::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert!(period.contains(date(2025, 1, 1)));
        assert!(period.contains(date(2025, 1, 31)));
        assert!(!period.contains(date(2024, 12, 31)));
        assert!(!period.contains(date(2025, 2, 1)));
    }

    #[test]
    fn month_covers_the_whole_month() {
        let period = ReportingPeriod::month(2024, 2).unwrap();
        assert_eq!(period.start(), date(2024, 2, 1));
        assert_eq!(period.end(), date(2024, 2, 29));
        assert_eq!(period.key(), "2024-02-01_2024-02-29");
    }

    #[test]
    fn deserialization_validates_bounds() {
        let ok: Result<ReportingPeriod, _> =
            serde_json::from_str(r#"{"start":"2025-01-01","end":"2025-01-31"}"#);
        assert!(ok.is_ok());
        let bad: Result<ReportingPeriod, _> =
            serde_json::from_str(r#"{"start":"2025-02-01","end":"2025-01-01"}"#);
        assert!(bad.is_err());
    }
}
