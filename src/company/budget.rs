use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::RawAmount;

/// A budget line with its planned and realized totals. Variance is always
/// recomputed from these two figures, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    pub kind: BudgetKind,
    pub budgeted: RawAmount,
    pub actual: RawAmount,
}

impl BudgetCategory {
    pub fn new(
        name: impl Into<String>,
        kind: BudgetKind,
        budgeted: impl Into<RawAmount>,
        actual: impl Into<RawAmount>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            budgeted: budgeted.into(),
            actual: actual.into(),
        }
    }
}

/// Whether a budget line plans income or spending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetKind {
    Income,
    Expense,
}
