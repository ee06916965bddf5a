//! Read-only aggregate views over a snapshot of the ledger.
//!
//! Every function here is total: an empty slice gives zero totals or an empty series.
use std::collections::BTreeMap;
use std::fmt;
use chrono::{Datelike, NaiveDateTime};
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Totals {
    /// Signed sum of all amounts
    pub(crate) balance: f64,
    pub(crate) income_total: f64,
    /// Reported as a positive magnitude
    pub(crate) expense_total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) amount: f64,
}

/// Calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct YearMonth {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl YearMonth {
    pub(crate) fn of(date: NaiveDateTime) -> YearMonth {
        YearMonth { year: date.year(), month: date.month() }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyTotal {
    pub(crate) month: YearMonth,
    pub(crate) amount: f64,
}

/// Income and expenses of one month side by side. Both are positive.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyComparison {
    pub(crate) month: YearMonth,
    pub(crate) income: f64,
    pub(crate) expenses: f64,
}

pub(crate) fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        totals.balance += t.amount;
        match t.kind {
            TransactionKind::Income => totals.income_total += t.amount,
            TransactionKind::Expense => totals.expense_total += t.amount,
        }
    }
    totals.expense_total = totals.expense_total.abs();
    totals
}

/// Expenses summed per category, ordered by category name. `filter` keeps a single category.
pub(crate) fn by_category(transactions: &[Transaction], filter: Option<&str>) -> Vec<CategoryTotal> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        if filter.map_or(true, |c| c == t.category) {
            *groups.entry(t.category.as_str()).or_insert(0.0) += t.amount;
        }
    }

    groups.into_iter()
        .map(|(category, amount)| CategoryTotal { category: category.to_string(), amount: amount.abs() })
        .collect()
}

/// Percentage of the breakdown total taken by each entry, in the same order.
pub(crate) fn category_shares(breakdown: &[CategoryTotal]) -> Vec<f64> {
    let total: f64 = breakdown.iter().map(|c| c.amount).sum();
    breakdown.iter()
        .map(|c| if total > 0.0 { c.amount / total * 100.0 } else { 0.0 })
        .collect()
}

/// Transactions of `kind` summed per calendar month, oldest first. Months without any
/// matching transaction are left out.
pub(crate) fn monthly_series(transactions: &[Transaction], kind: TransactionKind) -> Vec<MonthlyTotal> {
    monthly_map(transactions, kind).into_iter()
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}

/// Income and expense series aligned on the union of their months, missing entries as 0.
pub(crate) fn income_vs_expenses(transactions: &[Transaction]) -> Vec<MonthlyComparison> {
    let income = monthly_map(transactions, TransactionKind::Income);
    let expenses = monthly_map(transactions, TransactionKind::Expense);

    let mut months: Vec<YearMonth> = income.keys().chain(expenses.keys()).cloned().collect();
    months.sort();
    months.dedup();

    months.into_iter().map(|month| MonthlyComparison {
        month,
        income: income.get(&month).cloned().unwrap_or(0.0),
        expenses: expenses.get(&month).cloned().unwrap_or(0.0),
    }).collect()
}

fn monthly_map(transactions: &[Transaction], kind: TransactionKind) -> BTreeMap<YearMonth, f64> {
    let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        *months.entry(YearMonth::of(t.date)).or_insert(0.0) += t.amount;
    }
    for amount in months.values_mut() {
        *amount = amount.abs();
    }
    months
}

/// Most recent first. Transactions on the same timestamp keep their insertion order.
pub(crate) fn sorted_listing<'a>(transactions: &'a [Transaction], filter_category: Option<&str>) -> Vec<&'a Transaction> {
    let mut listing: Vec<&Transaction> = transactions.iter()
        .filter(|t| filter_category.map_or(true, |c| c == t.category))
        .collect();
    // sort_by is stable
    listing.sort_by(|a, b| b.date.cmp(&a.date));
    listing
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    fn tx(date: &str, description: &str, category: &str, amount: f64) -> Transaction {
        let kind = if amount < 0.0 { TransactionKind::Expense } else { TransactionKind::Income };
        Transaction {
            date: NaiveDateTime::from_str(date).unwrap(),
            description: description.to_string(),
            category: category.to_string(),
            amount,
            kind,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("2024-01-15T09:00:00", "Paycheck", "Salary", 2000.0),
            tx("2024-01-20T18:00:00", "Groceries", "Food", -50.0),
            tx("2024-02-03T12:00:00", "Bus pass", "Transportation", -35.5),
            tx("2024-02-10T19:00:00", "Dinner", "Food", -24.5),
            tx("2023-12-24T10:00:00", "Gifts", "Shopping", -120.0),
            tx("2024-03-01T08:00:00", "Dividend", "Investment", 40.0),
        ]
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth { year, month }
    }

    #[test]
    fn test_totals() {
        let totals = totals(&sample());
        assert_eq!(totals.income_total, 2040.0);
        assert_eq!(totals.expense_total, 230.0);
        assert_eq!(totals.balance, totals.income_total - totals.expense_total);
    }

    #[test]
    fn test_by_category() {
        let transactions = sample();
        let breakdown = by_category(&transactions, None);
        let categories: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Shopping", "Transportation"]);
        assert_eq!(breakdown[0].amount, 74.5);

        let sum: f64 = breakdown.iter().map(|c| c.amount).sum();
        assert_eq!(sum, totals(&transactions).expense_total);

        let food = by_category(&transactions, Some("Food"));
        assert_eq!(food, vec![CategoryTotal { category: "Food".to_string(), amount: 74.5 }]);
        assert!(by_category(&transactions, Some("Salary")).is_empty());
    }

    #[test]
    fn test_category_shares() {
        let breakdown = vec![
            CategoryTotal { category: "Food".to_string(), amount: 75.0 },
            CategoryTotal { category: "Other".to_string(), amount: 25.0 },
        ];
        assert_eq!(category_shares(&breakdown), vec![75.0, 25.0]);
        assert!(category_shares(&[]).is_empty());
    }

    #[test]
    fn test_monthly_series() {
        let transactions = sample();
        let expenses = monthly_series(&transactions, TransactionKind::Expense);
        assert_eq!(expenses, vec![
            MonthlyTotal { month: ym(2023, 12), amount: 120.0 },
            MonthlyTotal { month: ym(2024, 1), amount: 50.0 },
            MonthlyTotal { month: ym(2024, 2), amount: 60.0 },
        ]);

        let income = monthly_series(&transactions, TransactionKind::Income);
        assert_eq!(income, vec![
            MonthlyTotal { month: ym(2024, 1), amount: 2000.0 },
            MonthlyTotal { month: ym(2024, 3), amount: 40.0 },
        ]);
    }

    #[test]
    fn test_income_vs_expenses() {
        let comparison = income_vs_expenses(&sample());
        let months: Vec<String> = comparison.iter().map(|c| c.month.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02", "2024-03"]);
        assert_eq!(comparison[0].income, 0.0);
        assert_eq!(comparison[1], MonthlyComparison { month: ym(2024, 1), income: 2000.0, expenses: 50.0 });
        assert_eq!(comparison[3].expenses, 0.0);
    }

    #[test]
    fn test_sorted_listing() {
        let mut transactions = sample();
        transactions.push(tx("2024-03-01T08:00:00", "Dividend", "Investment", 10.0));

        let listing = sorted_listing(&transactions, None);
        assert_eq!(listing.len(), 7);
        assert_eq!(listing[0].amount, 40.0);
        assert_eq!(listing[1].amount, 10.0);
        assert_eq!(listing[6].description, "Gifts");

        let food: Vec<&str> = sorted_listing(&transactions, Some("Food")).iter().map(|t| t.description.as_str()).collect();
        assert_eq!(food, vec!["Dinner", "Groceries"]);
    }

    #[test]
    fn test_empty_ledger() {
        let empty: Vec<Transaction> = vec![];
        assert_eq!(totals(&empty), Totals::default());
        assert!(by_category(&empty, None).is_empty());
        assert!(monthly_series(&empty, TransactionKind::Expense).is_empty());
        assert!(monthly_series(&empty, TransactionKind::Income).is_empty());
        assert!(income_vs_expenses(&empty).is_empty());
        assert!(sorted_listing(&empty, None).is_empty());
    }
}
