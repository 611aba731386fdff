use chrono::NaiveDate;
use serde::Serialize;

use super::normalize;
use super::warnings::{RecordSource, RecordWarning};
use crate::company::{
    Account, AccountKind, AssetStatus, BankAccount, Expense, ExpenseStatus, FixedAsset, Invoice,
};

/// Current asset section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentAssets {
    pub cash: f64,
    pub accounts_receivable: f64,
    pub total: f64,
}

/// Current liability section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurrentLiabilities {
    pub accounts_payable: f64,
    pub total: f64,
}

/// How the equity figure was obtained.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EquitySource {
    /// Balancing figure `assets - liabilities`; the identity holds by
    /// construction. Used whenever the chart carries no equity accounts.
    Plug,
    /// Sum of explicit equity account balances from the chart.
    ChartOfAccounts,
}

/// Balance sheet as of a single date. Not double-entry bookkeeping: with a
/// plugged equity the statement balances by definition, nothing more.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceSheet {
    pub as_of: NaiveDate,
    pub current_assets: CurrentAssets,
    /// Active fixed assets at book value (cost less stored accumulated
    /// depreciation, clamped so value stays within `[0, cost]`).
    pub fixed_assets: f64,
    pub total_assets: f64,
    pub current_liabilities: CurrentLiabilities,
    pub total_liabilities: f64,
    pub equity: f64,
    pub equity_source: EquitySource,
    pub warnings: Vec<RecordWarning>,
}

/// Derives the balance sheet as of `as_of`.
///
/// Receivables, payables, and fixed assets dated after `as_of` are ignored;
/// a balance cannot predate the paper behind it.
pub fn balance_sheet(
    chart: &[Account],
    bank_accounts: &[BankAccount],
    invoices: &[Invoice],
    expenses: &[Expense],
    fixed_assets: &[FixedAsset],
    as_of: NaiveDate,
) -> BalanceSheet {
    let mut warnings = Vec::new();

    let mut cash = 0.0;
    for account in bank_accounts {
        if let Some(balance) = normalize::signed_field(
            RecordSource::BankAccount,
            account.id,
            "balance",
            &account.balance,
            &mut warnings,
        ) {
            cash += balance;
        }
    }

    let mut accounts_receivable = 0.0;
    for invoice in normalize::invoices(invoices, &mut warnings) {
        if invoice.date <= as_of && !invoice.status.is_paid() && !invoice.status.is_void() {
            accounts_receivable += invoice.total;
        }
    }

    let mut accounts_payable = 0.0;
    for expense in normalize::expenses(expenses, &mut warnings) {
        if expense.date <= as_of && expense.status == ExpenseStatus::Pending {
            accounts_payable += expense.amount;
        }
    }

    let mut fixed_total = 0.0;
    for asset in fixed_assets {
        if asset.status != AssetStatus::Active {
            continue;
        }
        let Some(purchased) = normalize::date_field(
            RecordSource::FixedAsset,
            asset.id,
            "purchase_date",
            &asset.purchase_date,
            &mut warnings,
        ) else {
            continue;
        };
        if purchased > as_of {
            continue;
        }
        let Some(price) = normalize::magnitude_field(
            RecordSource::FixedAsset,
            asset.id,
            "purchase_price",
            &asset.purchase_price,
            &mut warnings,
        ) else {
            continue;
        };
        let Some(accumulated) = normalize::magnitude_field(
            RecordSource::FixedAsset,
            asset.id,
            "accumulated_depreciation",
            &asset.accumulated_depreciation,
            &mut warnings,
        ) else {
            continue;
        };
        fixed_total += (price - accumulated).clamp(0.0, price);
    }

    let current_assets = CurrentAssets {
        cash,
        accounts_receivable,
        total: cash + accounts_receivable,
    };
    let total_assets = current_assets.total + fixed_total;
    let current_liabilities = CurrentLiabilities {
        accounts_payable,
        total: accounts_payable,
    };
    let total_liabilities = current_liabilities.total;

    let mut explicit_equity = 0.0;
    let mut explicit_found = false;
    for account in chart.iter().filter(|a| a.kind == AccountKind::Equity) {
        if let Some(balance) = normalize::signed_field(
            RecordSource::ChartAccount,
            account.id,
            "balance",
            &account.balance,
            &mut warnings,
        ) {
            explicit_equity += balance;
            explicit_found = true;
        }
    }
    let (equity, equity_source) = if explicit_found {
        (explicit_equity, EquitySource::ChartOfAccounts)
    } else {
        (total_assets - total_liabilities, EquitySource::Plug)
    };

    tracing::debug!(
        total_assets,
        total_liabilities,
        equity,
        warnings = warnings.len(),
        "derived balance sheet"
    );

    BalanceSheet {
        as_of,
        current_assets,
        fixed_assets: fixed_total,
        total_assets,
        current_liabilities,
        total_liabilities,
        equity,
        equity_source,
        warnings,
    }
}
