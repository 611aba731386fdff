//! Company snapshot records: the read-only inputs every statement is derived
//! from.

pub mod account;
pub mod asset;
pub mod bank;
pub mod budget;
pub mod common;
#[allow(clippy::module_inception)]
pub mod company;
pub mod expense;
pub mod invoice;
pub mod period;

pub use account::{Account, AccountKind};
pub use asset::{AssetStatus, DepreciationMethod, FixedAsset};
pub use bank::{ActivityClass, BankAccount, BankTransaction, TransactionKind};
pub use budget::{BudgetCategory, BudgetKind};
pub use common::RawDate;
pub use company::{Company, CURRENT_SCHEMA_VERSION};
pub use expense::{Expense, ExpenseStatus};
pub use invoice::{Invoice, InvoiceStatus};
pub use period::ReportingPeriod;
