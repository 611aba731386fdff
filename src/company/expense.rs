use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::RawDate;
use crate::money::RawAmount;

/// A vendor expense as entered in the purchasing screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub date: RawDate,
    pub amount: RawAmount,
    pub status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    pub fn new(
        date: impl Into<RawDate>,
        amount: impl Into<RawAmount>,
        status: ExpenseStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vendor: None,
            date: date.into(),
            amount: amount.into(),
            status,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Approval state of an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseStatus {
    Pending,
    Approved,
    Paid,
    Rejected,
}

impl ExpenseStatus {
    /// Every status except `Rejected` accrues into the books; a rejected
    /// submission never does.
    pub fn accrues(&self) -> bool {
        !matches!(self, ExpenseStatus::Rejected)
    }
}
