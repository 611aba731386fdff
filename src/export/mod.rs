//! Flat CSV rendering of derived statements.
//!
//! Every statement flattens into titled sections of `Category, Account,
//! Amount` rows with one subtotal row per section and a blank row between
//! sections. Amounts are plain decimal strings; formatting for humans is the
//! caller's concern.

use std::io::Write;

use crate::engine::{BalanceSheet, BudgetVarianceReport, CashFlow, EquitySource, ProfitAndLoss};
use crate::errors::StatementError;

/// One labeled amount inside a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: String,
    pub amount: f64,
}

impl Line {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A titled group of report lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(title: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

/// A statement flattened for CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    pub name: String,
    pub period_key: String,
    pub sections: Vec<Section>,
}

impl CsvReport {
    /// `<report-name>_<period-key>.csv`, report name slugged.
    pub fn file_name(&self) -> String {
        format!("{}_{}.csv", slug(&self.name), self.period_key)
    }

    /// Writes the report as CSV rows into `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), StatementError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Account", "Amount"])?;
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                csv_writer.write_record(["", "", ""])?;
            }
            for line in &section.lines {
                csv_writer.write_record([
                    section.title.as_str(),
                    line.label.as_str(),
                    format_amount(line.amount).as_str(),
                ])?;
            }
            csv_writer.write_record([
                section.title.as_str(),
                "Subtotal",
                format_amount(section.subtotal()).as_str(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, StatementError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|err| StatementError::Persistence(err.to_string()))
    }
}

impl From<&ProfitAndLoss> for CsvReport {
    fn from(statement: &ProfitAndLoss) -> Self {
        let revenue = statement
            .revenue_by_category
            .iter()
            .map(|bucket| Line::new(bucket.category.clone(), bucket.total))
            .collect();
        let expenses = statement
            .expenses_by_category
            .iter()
            .map(|bucket| Line::new(bucket.category.clone(), bucket.total))
            .collect();
        CsvReport {
            name: "Profit and Loss".to_string(),
            period_key: statement.period.key(),
            sections: vec![
                Section::new("Revenue", revenue),
                Section::new(
                    "Pending Revenue",
                    vec![Line::new("Not yet collected", statement.pending_revenue)],
                ),
                Section::new("Expenses", expenses),
                Section::new(
                    "Net",
                    vec![Line::new("Net Income", statement.net_income)],
                ),
            ],
        }
    }
}

impl From<&BalanceSheet> for CsvReport {
    fn from(statement: &BalanceSheet) -> Self {
        let equity_label = match statement.equity_source {
            EquitySource::Plug => "Equity (derived)",
            EquitySource::ChartOfAccounts => "Equity",
        };
        CsvReport {
            name: "Balance Sheet".to_string(),
            period_key: statement.as_of.format("%Y-%m-%d").to_string(),
            sections: vec![
                Section::new(
                    "Assets",
                    vec![
                        Line::new("Cash", statement.current_assets.cash),
                        Line::new(
                            "Accounts Receivable",
                            statement.current_assets.accounts_receivable,
                        ),
                        Line::new("Fixed Assets", statement.fixed_assets),
                    ],
                ),
                Section::new(
                    "Liabilities",
                    vec![Line::new(
                        "Accounts Payable",
                        statement.current_liabilities.accounts_payable,
                    )],
                ),
                Section::new("Equity", vec![Line::new(equity_label, statement.equity)]),
            ],
        }
    }
}

impl From<&CashFlow> for CsvReport {
    fn from(statement: &CashFlow) -> Self {
        CsvReport {
            name: "Cash Flow".to_string(),
            period_key: statement.period.key(),
            sections: vec![Section::new(
                "Activities",
                vec![
                    Line::new("Operating", statement.operating),
                    Line::new("Investing", statement.investing),
                    Line::new("Financing", statement.financing),
                ],
            )],
        }
    }
}

impl From<&BudgetVarianceReport> for CsvReport {
    fn from(report: &BudgetVarianceReport) -> Self {
        let variance_lines = |kind| {
            report
                .lines
                .iter()
                .filter(|line| line.kind == kind)
                .map(|line| Line::new(line.name.clone(), line.variance))
                .collect::<Vec<_>>()
        };
        CsvReport {
            name: "Budget Variance".to_string(),
            period_key: report.period.key(),
            sections: vec![
                Section::new(
                    "Income",
                    variance_lines(crate::company::BudgetKind::Income),
                ),
                Section::new(
                    "Expenses",
                    variance_lines(crate::company::BudgetKind::Expense),
                ),
            ],
        }
    }
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn slug(name: &str) -> String {
    let mut slugged = String::with_capacity(name.len());
    let mut previous_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slugged.push(ch.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slugged.push('-');
            previous_dash = true;
        }
    }
    while slugged.ends_with('-') {
        slugged.pop();
    }
    slugged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_report_names() {
        assert_eq!(slug("Profit and Loss"), "profit-and-loss");
        assert_eq!(slug("  Cash Flow! "), "cash-flow");
    }

    #[test]
    fn amounts_are_plain_decimals() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(-20.0), "-20.00");
    }

    #[test]
    fn subtotal_sums_section_lines() {
        let section = Section::new(
            "Assets",
            vec![Line::new("Cash", 100.0), Line::new("Receivables", 50.0)],
        );
        assert_eq!(section.subtotal(), 150.0);
    }

    #[test]
    fn file_name_follows_the_pattern() {
        let report = CsvReport {
            name: "Profit and Loss".to_string(),
            period_key: "2025-01-01_2025-01-31".to_string(),
            sections: Vec::new(),
        };
        assert_eq!(
            report.file_name(),
            "profit-and-loss_2025-01-01_2025-01-31.csv"
        );
    }
}
