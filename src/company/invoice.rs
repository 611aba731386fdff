use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::RawDate;
use crate::money::RawAmount;

/// A customer invoice as entered in the billing screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    pub date: RawDate,
    pub total: RawAmount,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Invoice {
    pub fn new(date: impl Into<RawDate>, total: impl Into<RawAmount>, status: InvoiceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: None,
            customer: None,
            date: date.into(),
            total: total.into(),
            status,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Collection state of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Void,
}

impl InvoiceStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }

    /// Voided invoices are dead paper: they count neither as revenue nor as
    /// a receivable.
    pub fn is_void(&self) -> bool {
        matches!(self, InvoiceStatus::Void)
    }
}
