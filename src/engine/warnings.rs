use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::company::RawDate;
use crate::money::RawAmount;

/// Which record family a degraded record belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RecordSource {
    Invoice,
    Expense,
    BankAccount,
    BankTransaction,
    FixedAsset,
    BudgetCategory,
    ChartAccount,
    Statement,
}

/// Why a record or figure was degraded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum WarningKind {
    /// The field did not survive tolerant numeric extraction.
    UnparsableAmount { raw: String },
    /// The field is not a readable calendar date.
    UnparsableDate { raw: String },
    /// The field parsed but violates the non-negativity invariant.
    NegativeAmount { value: f64 },
    /// A ratio's denominator was zero; the figure was reported as zero.
    ZeroDenominator,
}

/// A single degraded record or figure. Statements carry these instead of
/// failing; the record behind a warning was excluded from every sum.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordWarning {
    pub source: RecordSource,
    pub record_id: Option<Uuid>,
    pub field: &'static str,
    pub kind: WarningKind,
}

impl RecordWarning {
    pub fn amount(source: RecordSource, record_id: Uuid, field: &'static str, raw: &RawAmount) -> Self {
        Self {
            source,
            record_id: Some(record_id),
            field,
            kind: WarningKind::UnparsableAmount {
                raw: raw.raw_display(),
            },
        }
    }

    pub fn date(source: RecordSource, record_id: Uuid, field: &'static str, raw: &RawDate) -> Self {
        Self {
            source,
            record_id: Some(record_id),
            field,
            kind: WarningKind::UnparsableDate {
                raw: raw.as_str().to_string(),
            },
        }
    }

    pub fn negative(source: RecordSource, record_id: Uuid, field: &'static str, value: f64) -> Self {
        Self {
            source,
            record_id: Some(record_id),
            field,
            kind: WarningKind::NegativeAmount { value },
        }
    }

    pub fn zero_denominator(field: &'static str) -> Self {
        Self {
            source: RecordSource::Statement,
            record_id: None,
            field,
            kind: WarningKind::ZeroDenominator,
        }
    }
}

impl fmt::Display for RecordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnparsableAmount { raw } => {
                write!(f, "{:?} {}: unparsable amount {:?}", self.source, self.field, raw)
            }
            WarningKind::UnparsableDate { raw } => {
                write!(f, "{:?} {}: unparsable date {:?}", self.source, self.field, raw)
            }
            WarningKind::NegativeAmount { value } => {
                write!(f, "{:?} {}: negative amount {}", self.source, self.field, value)
            }
            WarningKind::ZeroDenominator => {
                write!(f, "{:?} {}: denominator was zero", self.source, self.field)
            }
        }?;
        if let Some(id) = self.record_id {
            write!(f, " (record {id})")?;
        }
        Ok(())
    }
}
