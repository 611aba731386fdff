use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::RawDate;
use crate::money::RawAmount;

/// A bank account snapshot. Balances may be negative (overdraft).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankAccount {
    pub id: Uuid,
    pub name: String,
    pub balance: RawAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl BankAccount {
    pub fn new(name: impl Into<String>, balance: impl Into<RawAmount>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance: balance.into(),
            currency: None,
        }
    }
}

/// A single bank movement. Amounts are magnitudes; direction comes from
/// [`TransactionKind`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankTransaction {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    pub date: RawDate,
    pub amount: RawAmount,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityClass>,
}

impl BankTransaction {
    pub fn new(
        date: impl Into<RawDate>,
        amount: impl Into<RawAmount>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: None,
            date: date.into(),
            amount: amount.into(),
            kind,
            description: None,
            activity: None,
        }
    }

    pub fn with_activity(mut self, activity: ActivityClass) -> Self {
        self.activity = Some(activity);
        self
    }
}

/// Direction of a bank movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Credit,
    Withdrawal,
    Debit,
}

impl TransactionKind {
    /// Sign contributed to cash flow sums.
    pub fn signum(&self) -> f64 {
        match self {
            TransactionKind::Deposit | TransactionKind::Credit => 1.0,
            TransactionKind::Withdrawal | TransactionKind::Debit => -1.0,
        }
    }
}

/// Cash-flow activity classification. Records without a tag are treated as
/// operating activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityClass {
    Operating,
    Investing,
    Financing,
}
