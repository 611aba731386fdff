//! Record normalization: the first stage of every statement run.
//!
//! Edge-typed fields are parsed here; a record that fails parsing is excluded
//! from aggregation and reported through a [`RecordWarning`], never coerced.

use chrono::NaiveDate;
use uuid::Uuid;

use super::warnings::{RecordSource, RecordWarning};
use crate::company::{
    ActivityClass, BankTransaction, Expense, ExpenseStatus, Invoice, InvoiceStatus, RawDate,
    TransactionKind,
};
use crate::money::RawAmount;

/// An invoice whose date and total both parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInvoice {
    pub id: Uuid,
    pub date: NaiveDate,
    pub total: f64,
    pub status: InvoiceStatus,
    pub category: Option<String>,
}

/// An expense whose date and amount both parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedExpense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: ExpenseStatus,
    pub category: Option<String>,
}

/// A bank movement whose date and magnitude both parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTransaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    pub activity: Option<ActivityClass>,
}

pub fn invoices(records: &[Invoice], warnings: &mut Vec<RecordWarning>) -> Vec<NormalizedInvoice> {
    records
        .iter()
        .filter_map(|invoice| {
            let date = date_field(
                RecordSource::Invoice,
                invoice.id,
                "date",
                &invoice.date,
                warnings,
            )?;
            let total = magnitude_field(
                RecordSource::Invoice,
                invoice.id,
                "total",
                &invoice.total,
                warnings,
            )?;
            Some(NormalizedInvoice {
                id: invoice.id,
                date,
                total,
                status: invoice.status,
                category: invoice.category.clone(),
            })
        })
        .collect()
}

pub fn expenses(records: &[Expense], warnings: &mut Vec<RecordWarning>) -> Vec<NormalizedExpense> {
    records
        .iter()
        .filter_map(|expense| {
            let date = date_field(
                RecordSource::Expense,
                expense.id,
                "date",
                &expense.date,
                warnings,
            )?;
            let amount = magnitude_field(
                RecordSource::Expense,
                expense.id,
                "amount",
                &expense.amount,
                warnings,
            )?;
            Some(NormalizedExpense {
                id: expense.id,
                date,
                amount,
                status: expense.status,
                category: expense.category.clone(),
            })
        })
        .collect()
}

pub fn transactions(
    records: &[BankTransaction],
    warnings: &mut Vec<RecordWarning>,
) -> Vec<NormalizedTransaction> {
    records
        .iter()
        .filter_map(|txn| {
            let date = date_field(
                RecordSource::BankTransaction,
                txn.id,
                "date",
                &txn.date,
                warnings,
            )?;
            let amount = magnitude_field(
                RecordSource::BankTransaction,
                txn.id,
                "amount",
                &txn.amount,
                warnings,
            )?;
            Some(NormalizedTransaction {
                id: txn.id,
                date,
                amount,
                kind: txn.kind,
                activity: txn.activity,
            })
        })
        .collect()
}

/// Parses a ledger-record amount, enforcing the non-negativity invariant.
pub fn magnitude_field(
    source: RecordSource,
    record_id: Uuid,
    field: &'static str,
    raw: &RawAmount,
    warnings: &mut Vec<RecordWarning>,
) -> Option<f64> {
    match raw.parse() {
        Some(value) if value >= 0.0 => Some(value),
        Some(value) => {
            warnings.push(RecordWarning::negative(source, record_id, field, value));
            None
        }
        None => {
            warnings.push(RecordWarning::amount(source, record_id, field, raw));
            None
        }
    }
}

/// Parses a balance-style amount. Sign is preserved: overdrafts and contra
/// balances are legitimate.
pub fn signed_field(
    source: RecordSource,
    record_id: Uuid,
    field: &'static str,
    raw: &RawAmount,
    warnings: &mut Vec<RecordWarning>,
) -> Option<f64> {
    match raw.parse() {
        Some(value) => Some(value),
        None => {
            warnings.push(RecordWarning::amount(source, record_id, field, raw));
            None
        }
    }
}

pub fn date_field(
    source: RecordSource,
    record_id: Uuid,
    field: &'static str,
    raw: &RawDate,
    warnings: &mut Vec<RecordWarning>,
) -> Option<NaiveDate> {
    match raw.parse() {
        Some(date) => Some(date),
        None => {
            warnings.push(RecordWarning::date(source, record_id, field, raw));
            None
        }
    }
}
