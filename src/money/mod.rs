//! Tolerant handling of monetary values as they arrive from forms, imports,
//! and display layers.

use serde::{Deserialize, Serialize};

/// A monetary field as captured at the edge. Values arrive either as plain
/// numbers or as display strings ("$1,250.00", "2 000 kr") and are only
/// interpreted when a statement run needs them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Interprets the captured value as a finite decimal.
    ///
    /// Display strings go through [`extract_numeric`]; anything that does not
    /// survive extraction (or is NaN/infinite) yields `None` so the caller can
    /// exclude the record and report it.
    pub fn parse(&self) -> Option<f64> {
        match self {
            RawAmount::Number(value) if value.is_finite() => Some(*value),
            RawAmount::Number(_) => None,
            RawAmount::Text(text) => extract_numeric(text),
        }
    }

    /// Raw form for warning messages.
    pub fn raw_display(&self) -> String {
        match self {
            RawAmount::Number(value) => value.to_string(),
            RawAmount::Text(text) => text.clone(),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Number(0.0)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

/// Strips a display string down to a decimal number.
///
/// Keeps ASCII digits and `.`; a `-` counts as the sign only when it appears
/// before the first kept character. Currency symbols, grouping separators,
/// and stray text all fall away. Returns `None` when nothing parseable
/// remains (empty input, `"$-"`, doubled decimal points).
pub fn extract_numeric(text: &str) -> Option<f64> {
    let mut cleaned = String::with_capacity(text.len());
    let mut negative = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            cleaned.push(ch);
        } else if ch == '-' && cleaned.is_empty() {
            negative = true;
        }
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(RawAmount::from(1250.5).parse(), Some(1250.5));
        assert_eq!(RawAmount::from("1250.50").parse(), Some(1250.5));
    }

    #[test]
    fn strips_symbols_and_grouping() {
        assert_eq!(RawAmount::from("$1,250.00").parse(), Some(1250.0));
        assert_eq!(RawAmount::from("USD 3,000").parse(), Some(3000.0));
        assert_eq!(RawAmount::from("  42 ").parse(), Some(42.0));
    }

    #[test]
    fn keeps_only_a_leading_sign() {
        assert_eq!(RawAmount::from("-$500").parse(), Some(-500.0));
        assert_eq!(RawAmount::from("$-500").parse(), Some(-500.0));
        assert_eq!(RawAmount::from("10-20").parse(), Some(1020.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(RawAmount::from("abc").parse(), None);
        assert_eq!(RawAmount::from("").parse(), None);
        assert_eq!(RawAmount::from("$-").parse(), None);
        assert_eq!(RawAmount::from("1.2.3").parse(), None);
        assert_eq!(RawAmount::Number(f64::NAN).parse(), None);
        assert_eq!(RawAmount::Number(f64::INFINITY).parse(), None);
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let number: RawAmount = serde_json::from_str("199.99").unwrap();
        let text: RawAmount = serde_json::from_str("\"$199.99\"").unwrap();
        assert_eq!(number.parse(), Some(199.99));
        assert_eq!(text.parse(), Some(199.99));
    }
}
