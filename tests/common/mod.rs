use chrono::NaiveDate;
use once_cell::sync::Lazy;
use statement_core::company::{
    Account, AccountKind, ActivityClass, BankAccount, BankTransaction, BudgetCategory, BudgetKind,
    Company, DepreciationMethod, Expense, ExpenseStatus, FixedAsset, Invoice, InvoiceStatus,
    ReportingPeriod, TransactionKind,
};

/// January 2025, the window most suite scenarios report over.
pub static JANUARY: Lazy<ReportingPeriod> =
    Lazy::new(|| ReportingPeriod::month(2025, 1).expect("valid month"));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A small but realistic company snapshot: mixed invoice statuses, a dirty
/// amount string, tagged and untagged bank movements, and one asset per
/// depreciation method.
pub fn sample_company() -> Company {
    let mut company = Company::new("Harbor Light Coffee");

    company.add_account(Account::new("Owner Capital", AccountKind::Equity, 20_000.0));
    company.add_bank_account(BankAccount::new("Operating", "$12,500.00"));
    company.add_bank_account(BankAccount::new("Savings", 4_000.0));

    company.add_invoice(
        Invoice::new("2025-01-10", "$1,000.00", InvoiceStatus::Paid).with_category("sales"),
    );
    company.add_invoice(
        Invoice::new("2025-01-15", 500.0, InvoiceStatus::Draft).with_category("services"),
    );
    company.add_invoice(Invoice::new("2025-01-20", 250.0, InvoiceStatus::Sent));

    company.add_expense(
        Expense::new("2025-01-05", 300.0, ExpenseStatus::Pending).with_category("rent"),
    );
    company.add_expense(
        Expense::new("2025-01-12", "$120.00", ExpenseStatus::Paid).with_category("utilities"),
    );
    company.add_expense(Expense::new("2025-01-18", 80.0, ExpenseStatus::Rejected));

    company.add_transaction(BankTransaction::new(
        "2025-01-08",
        900.0,
        TransactionKind::Deposit,
    ));
    company.add_transaction(BankTransaction::new(
        "2025-01-16",
        400.0,
        TransactionKind::Withdrawal,
    ));
    company.add_transaction(
        BankTransaction::new("2025-01-22", 2_000.0, TransactionKind::Debit)
            .with_activity(ActivityClass::Investing),
    );

    company.add_fixed_asset(FixedAsset::new(
        "Espresso machine",
        "2020-01-01",
        10_000.0,
        10,
        DepreciationMethod::StraightLine,
    ));
    company.add_fixed_asset(FixedAsset::new(
        "Delivery van",
        "2023-06-01",
        30_000.0,
        8,
        DepreciationMethod::DecliningBalance,
    ));
    company.add_fixed_asset(FixedAsset::new(
        "Roaster",
        "2024-01-01",
        9_000.0,
        3,
        DepreciationMethod::SumOfYears,
    ));

    company.add_budget_category(BudgetCategory::new(
        "Retail sales",
        BudgetKind::Income,
        5_000.0,
        4_200.0,
    ));
    company.add_budget_category(BudgetCategory::new(
        "Rent",
        BudgetKind::Expense,
        1_500.0,
        1_500.0,
    ));
    company.add_budget_category(BudgetCategory::new(
        "Marketing",
        BudgetKind::Expense,
        600.0,
        740.0,
    ));

    company
}
