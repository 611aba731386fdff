use serde::Serialize;
use uuid::Uuid;

use super::normalize;
use super::warnings::{RecordSource, RecordWarning};
use crate::company::{BudgetCategory, BudgetKind, ReportingPeriod};

/// Variance line for a single budget category. `variance` and
/// `variance_percent` are recomputed on every derivation, never cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryVariance {
    pub id: Uuid,
    pub name: String,
    pub kind: BudgetKind,
    pub budgeted: f64,
    pub actual: f64,
    /// `budgeted - actual`.
    pub variance: f64,
    /// `variance / budgeted`, zero (with a warning) for a zero budget.
    pub variance_percent: f64,
}

/// Totals across the lines of one budget kind.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct VarianceTotals {
    pub budgeted: f64,
    pub actual: f64,
    pub variance: f64,
}

impl VarianceTotals {
    fn absorb(&mut self, line: &CategoryVariance) {
        self.budgeted += line.budgeted;
        self.actual += line.actual;
        self.variance += line.variance;
    }
}

/// Budget-versus-actual report over a reporting period.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetVarianceReport {
    pub period: ReportingPeriod,
    pub lines: Vec<CategoryVariance>,
    pub income: VarianceTotals,
    pub expense: VarianceTotals,
    pub warnings: Vec<RecordWarning>,
}

/// Derives the budget variance report for `period`.
pub fn budget_variance(
    categories: &[BudgetCategory],
    period: ReportingPeriod,
) -> BudgetVarianceReport {
    let mut warnings = Vec::new();
    let mut lines = Vec::with_capacity(categories.len());
    let mut income = VarianceTotals::default();
    let mut expense = VarianceTotals::default();

    for category in categories {
        let budgeted = normalize::signed_field(
            RecordSource::BudgetCategory,
            category.id,
            "budgeted",
            &category.budgeted,
            &mut warnings,
        );
        let actual = normalize::signed_field(
            RecordSource::BudgetCategory,
            category.id,
            "actual",
            &category.actual,
            &mut warnings,
        );
        let (Some(budgeted), Some(actual)) = (budgeted, actual) else {
            continue;
        };

        let variance = budgeted - actual;
        let variance_percent = if budgeted != 0.0 {
            variance / budgeted
        } else {
            warnings.push(RecordWarning::zero_denominator("budgeted"));
            0.0
        };

        let line = CategoryVariance {
            id: category.id,
            name: category.name.clone(),
            kind: category.kind,
            budgeted,
            actual,
            variance,
            variance_percent,
        };
        match category.kind {
            BudgetKind::Income => income.absorb(&line),
            BudgetKind::Expense => expense.absorb(&line),
        }
        lines.push(line);
    }

    tracing::debug!(
        lines = lines.len(),
        warnings = warnings.len(),
        "derived budget variance"
    );

    BudgetVarianceReport {
        period,
        lines,
        income,
        expense,
        warnings,
    }
}
