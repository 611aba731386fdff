use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// A date field as captured at the edge, kept verbatim until a statement run
/// interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RawDate(pub String);

impl RawDate {
    /// Interprets the captured text as a calendar date, accepting ISO and US
    /// forms. `None` means the record should be excluded and reported.
    pub fn parse(&self) -> Option<NaiveDate> {
        let text = self.0.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        RawDate(value.to_string())
    }
}

impl From<String> for RawDate {
    fn from(value: String) -> Self {
        RawDate(value)
    }
}

impl From<NaiveDate> for RawDate {
    fn from(value: NaiveDate) -> Self {
        RawDate(value.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(RawDate::from("2025-01-15").parse(), Some(expected));
        assert_eq!(RawDate::from("2025/01/15").parse(), Some(expected));
        assert_eq!(RawDate::from("01/15/2025").parse(), Some(expected));
    }

    #[test]
    fn rejects_unreadable_dates() {
        assert_eq!(RawDate::from("yesterday").parse(), None);
        assert_eq!(RawDate::from("").parse(), None);
        assert_eq!(RawDate::from("2025-13-01").parse(), None);
    }
}
