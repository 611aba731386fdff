//! The statement engine: pure, synchronous derivations over company records.
//!
//! Every operation follows the same shape: normalize the raw records (edge
//! parsing, exclusion warnings), aggregate over the reporting window, and
//! assemble a statement value object. Identical inputs always produce
//! identical outputs; nothing here touches a clock, a random source, or I/O.

pub mod balance_sheet;
pub mod budget_variance;
pub mod cash_flow;
pub mod depreciation;
pub mod normalize;
pub mod profit_and_loss;
pub mod warnings;

pub use balance_sheet::{
    balance_sheet, BalanceSheet, CurrentAssets, CurrentLiabilities, EquitySource,
};
pub use budget_variance::{
    budget_variance, BudgetVarianceReport, CategoryVariance, VarianceTotals,
};
pub use cash_flow::{cash_flow, CashFlow};
pub use depreciation::{depreciation, DepreciationResult, DECLINING_BALANCE_RATE};
pub use profit_and_loss::{profit_and_loss, CategoryTotal, ProfitAndLoss, UNCATEGORIZED};
pub use warnings::{RecordSource, RecordWarning, WarningKind};
