use comfy_table::{Cell, CellAlignment, Color, Table, TableComponent};
use crate::report::{category_shares, CategoryTotal, MonthlyComparison, MonthlyTotal, Totals};
use crate::transaction::{Transaction, TransactionKind};

/// Width in characters of the longest bar in a chart column
const BAR_WIDTH: usize = 30;

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

pub(crate) fn totals_table(totals: &Totals, currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Balance", "Income", "Expenses"]);
    let balance_color = if totals.balance >= 0.0 { Color::Green } else { Color::Red };
    table.add_row(vec![
        amount_cell(totals.balance, currency).fg(balance_color),
        amount_cell(totals.income_total, currency).fg(Color::Green),
        amount_cell(totals.expense_total, currency).fg(Color::Red),
    ]);
    table
}

/// Amounts are shown as magnitudes, the type column tells income from expense.
pub(crate) fn listing_table(transactions: &[&Transaction], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Description", "Category", "Amount", "Type"]);
    for t in transactions {
        let color = match t.kind {
            TransactionKind::Income => Color::Green,
            TransactionKind::Expense => Color::Red,
        };
        table.add_row(vec![
            Cell::new(t.date.format("%Y-%m-%d").to_string()),
            Cell::new(t.description.as_str()),
            Cell::new(t.category.as_str()),
            amount_cell(t.magnitude(), currency),
            Cell::new(t.kind.title()).fg(color),
        ]);
    }
    table
}

pub(crate) fn category_table(breakdown: &[CategoryTotal], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Category", "Amount", "Share", ""]);
    let shares = category_shares(breakdown);
    for (c, share) in breakdown.iter().zip(shares) {
        table.add_row(vec![
            Cell::new(c.category.as_str()),
            amount_cell(c.amount, currency),
            Cell::new(format!("{share:.1}%")).set_alignment(CellAlignment::Right),
            Cell::new(bar(share, 100.0)),
        ]);
    }
    table
}

pub(crate) fn monthly_table(series: &[MonthlyTotal], kind: TransactionKind, currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", kind.title(), ""]);
    let color = match kind {
        TransactionKind::Income => Color::Green,
        TransactionKind::Expense => Color::Red,
    };
    let max = series.iter().map(|m| m.amount).fold(0.0, f64::max);
    for m in series {
        table.add_row(vec![
            Cell::new(m.month.to_string()),
            amount_cell(m.amount, currency),
            Cell::new(bar(m.amount, max)).fg(color),
        ]);
    }
    table
}

pub(crate) fn comparison_table(comparison: &[MonthlyComparison], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Income", "Expenses", ""]);
    let max = comparison.iter().map(|m| m.income.max(m.expenses)).fold(0.0, f64::max);
    for m in comparison {
        table.add_row(vec![
            Cell::new(m.month.to_string()),
            amount_cell(m.income, currency).fg(Color::Green),
            amount_cell(m.expenses, currency).fg(Color::Red),
            Cell::new(format!("{}\n{}", bar(m.income, max), bar(m.expenses, max))),
        ]);
    }
    table
}

fn amount_cell(amount: f64, currency: &str) -> Cell {
    Cell::new(format_amount(amount, currency)).set_alignment(CellAlignment::Right)
}

/// Format $ amount
fn format_amount(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, -amount)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(1))
}
