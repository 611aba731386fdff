use std::collections::BTreeMap;

use serde::Serialize;

use super::normalize;
use super::warnings::RecordWarning;
use crate::company::{Expense, Invoice, ReportingPeriod};

/// Bucket label for records that carry no explicit category. Buckets are
/// never fabricated from proportional splits.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Per-category slice of a statement total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Profit and loss over a reporting period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfitAndLoss {
    pub period: ReportingPeriod,
    /// Recognized revenue: paid invoices only.
    pub revenue: f64,
    /// Invoiced but not yet collected; never merged into `revenue`.
    pub pending_revenue: f64,
    /// Accrued expenses: every status except rejected.
    pub expenses: f64,
    pub net_income: f64,
    /// `net_income / revenue`, zero (with a warning) when there is no revenue.
    pub gross_margin: f64,
    /// Recognized revenue split by invoice category.
    pub revenue_by_category: Vec<CategoryTotal>,
    /// Accrued expenses split by expense category.
    pub expenses_by_category: Vec<CategoryTotal>,
    pub warnings: Vec<RecordWarning>,
}

/// Derives the profit and loss statement for `period`.
///
/// Both collections are filtered to the period (bounds inclusive); records
/// that fail normalization are excluded and reported in `warnings`.
pub fn profit_and_loss(
    invoices: &[Invoice],
    expenses: &[Expense],
    period: ReportingPeriod,
) -> ProfitAndLoss {
    let mut warnings = Vec::new();

    let mut revenue = 0.0;
    let mut pending_revenue = 0.0;
    let mut revenue_buckets: BTreeMap<String, f64> = BTreeMap::new();
    for invoice in normalize::invoices(invoices, &mut warnings) {
        if !period.contains(invoice.date) || invoice.status.is_void() {
            continue;
        }
        if invoice.status.is_paid() {
            revenue += invoice.total;
            *revenue_buckets.entry(bucket(invoice.category)).or_insert(0.0) += invoice.total;
        } else {
            pending_revenue += invoice.total;
        }
    }

    let mut expense_total = 0.0;
    let mut expense_buckets: BTreeMap<String, f64> = BTreeMap::new();
    for expense in normalize::expenses(expenses, &mut warnings) {
        if !period.contains(expense.date) || !expense.status.accrues() {
            continue;
        }
        expense_total += expense.amount;
        *expense_buckets.entry(bucket(expense.category)).or_insert(0.0) += expense.amount;
    }

    let net_income = revenue - expense_total;
    let gross_margin = if revenue > 0.0 {
        net_income / revenue
    } else {
        warnings.push(RecordWarning::zero_denominator("gross_margin"));
        0.0
    };

    tracing::debug!(
        revenue,
        pending_revenue,
        expenses = expense_total,
        warnings = warnings.len(),
        "derived profit and loss"
    );

    ProfitAndLoss {
        period,
        revenue,
        pending_revenue,
        expenses: expense_total,
        net_income,
        gross_margin,
        revenue_by_category: into_totals(revenue_buckets),
        expenses_by_category: into_totals(expense_buckets),
        warnings,
    }
}

fn bucket(category: Option<String>) -> String {
    category.unwrap_or_else(|| UNCATEGORIZED.to_string())
}

fn into_totals(buckets: BTreeMap<String, f64>) -> Vec<CategoryTotal> {
    buckets
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}
