use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::RawAmount;

/// An entry in the chart of accounts. Balances are signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub balance: RawAmount,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind, balance: impl Into<RawAmount>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            balance: balance.into(),
        }
    }
}

/// The closed set of account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}
