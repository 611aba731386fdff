use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    account::Account,
    asset::FixedAsset,
    bank::{BankAccount, BankTransaction},
    budget::BudgetCategory,
    expense::Expense,
    invoice::Invoice,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// A complete company snapshot: everything a statement run needs, passed by
/// value instead of living in ambient shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub transactions: Vec<BankTransaction>,
    #[serde(default)]
    pub fixed_assets: Vec<FixedAsset>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Company::schema_version_default")]
    pub schema_version: u8,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            bank_accounts: Vec::new(),
            invoices: Vec::new(),
            expenses: Vec::new(),
            transactions: Vec::new(),
            fixed_assets: Vec::new(),
            budget_categories: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn add_bank_account(&mut self, account: BankAccount) -> Uuid {
        let id = account.id;
        self.bank_accounts.push(account);
        self.touch();
        id
    }

    pub fn add_invoice(&mut self, invoice: Invoice) -> Uuid {
        let id = invoice.id;
        self.invoices.push(invoice);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: BankTransaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn add_fixed_asset(&mut self, asset: FixedAsset) -> Uuid {
        let id = asset.id;
        self.fixed_assets.push(asset);
        self.touch();
        id
    }

    pub fn add_budget_category(&mut self, category: BudgetCategory) -> Uuid {
        let id = category.id;
        self.budget_categories.push(category);
        self.touch();
        id
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
