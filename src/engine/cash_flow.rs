use serde::Serialize;

use super::normalize;
use super::warnings::RecordWarning;
use crate::company::{ActivityClass, BankTransaction, ReportingPeriod};

/// Cash flow statement over a reporting period.
///
/// Deposits and credits contribute positively, withdrawals and debits
/// negatively. Movements without an activity tag count as operating
/// activity; investing and financing only accumulate from explicitly tagged
/// records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CashFlow {
    pub period: ReportingPeriod,
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    pub net_cash_flow: f64,
    pub warnings: Vec<RecordWarning>,
}

/// Derives the cash flow statement for `period` (bounds inclusive).
pub fn cash_flow(transactions: &[BankTransaction], period: ReportingPeriod) -> CashFlow {
    let mut warnings = Vec::new();

    let mut operating = 0.0;
    let mut investing = 0.0;
    let mut financing = 0.0;
    for txn in normalize::transactions(transactions, &mut warnings) {
        if !period.contains(txn.date) {
            continue;
        }
        let signed = txn.amount * txn.kind.signum();
        match txn.activity.unwrap_or(ActivityClass::Operating) {
            ActivityClass::Operating => operating += signed,
            ActivityClass::Investing => investing += signed,
            ActivityClass::Financing => financing += signed,
        }
    }

    let net_cash_flow = operating + investing + financing;

    tracing::debug!(
        operating,
        investing,
        financing,
        warnings = warnings.len(),
        "derived cash flow"
    );

    CashFlow {
        period,
        operating,
        investing,
        financing,
        net_cash_flow,
        warnings,
    }
}
