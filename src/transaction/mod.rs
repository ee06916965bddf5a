use std::fmt;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveDateTime};
use crate::common::LedgerError;

/// Category names offered as input suggestions. Any other string is accepted too.
pub(crate) const DEFAULT_CATEGORIES: [&str; 9] = [
    "Food", "Transportation", "Entertainment", "Utilities", "Healthcare", "Shopping", "Salary", "Investment", "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Apply the sign convention: expenses are stored negative, income positive.
    pub(crate) fn signed(&self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        }
    }

    pub(crate) fn agrees_with(&self, amount: f64) -> bool {
        match self {
            TransactionKind::Income => amount >= 0.0,
            TransactionKind::Expense => amount <= 0.0,
        }
    }

    /// Title case label used in listings, e.g. `Income`
    pub(crate) fn title(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::Parse(format!("unknown transaction type '{}'", s))),
        }
    }
}

/// One recorded income or expense event
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) date: NaiveDateTime,
    pub(crate) description: String,
    pub(crate) category: String,
    /// Signed, see [`TransactionKind::signed`]
    pub(crate) amount: f64,
    pub(crate) kind: TransactionKind,
}

impl Transaction {
    /// Build a transaction from raw user input, checking the fields before anything is recorded.
    pub(crate) fn from_input(date: NaiveDateTime, description: &str, category: &str, amount: &str, kind: TransactionKind) -> Result<Transaction, LedgerError> {
        let description = normalize_description(description);
        let category = normalize_category(category);
        let amount = amount.trim();

        if description.is_empty() || category.is_empty() || amount.is_empty() {
            return Err(LedgerError::Validation("please fill in all fields".to_string()));
        }

        let magnitude = match amount.parse::<f64>() {
            Ok(a) if a.is_finite() => a,
            _ => return Err(LedgerError::Validation(format!("'{}' is not a valid amount", amount))),
        };
        if magnitude <= 0.0 {
            return Err(LedgerError::Validation("amount must be positive".to_string()));
        }

        Ok(Transaction {
            date,
            description,
            category: category.to_string(),
            amount: kind.signed(magnitude),
            kind,
        })
    }

    pub(crate) fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    /// Value identity used for deletion: same day, description and category.
    pub(crate) fn matches(&self, date: NaiveDate, description: &str, category: &str) -> bool {
        self.date.date() == date && self.description == description && self.category == category
    }
}

pub(crate) fn normalize_description(description: &str) -> String {
    description.trim().replace('\n', " ")
}

pub(crate) fn normalize_category(category: &str) -> &str {
    category.trim()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDateTime::from_str("2024-03-05T10:15:00").unwrap()
    }

    #[test]
    fn test_expense_is_negative() {
        let t = Transaction::from_input(now(), " Groceries ", "Food", "50", TransactionKind::Expense).unwrap();
        assert_eq!(t.amount, -50.0);
        assert_eq!(t.description, "Groceries");
        assert_eq!(t.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_income_is_positive() {
        let t = Transaction::from_input(now(), "Paycheck", "Salary", "2000.50", TransactionKind::Income).unwrap();
        assert_eq!(t.amount, 2000.5);
        assert!(t.kind.agrees_with(t.amount));
    }

    #[test]
    fn test_rejects_bad_amounts() {
        for amount in ["-5", "0", "abc", "", "NaN", "inf"] {
            let result = Transaction::from_input(now(), "Lunch", "Food", amount, TransactionKind::Expense);
            assert!(matches!(result, Err(LedgerError::Validation(_))), "amount {:?} accepted", amount);
        }
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(Transaction::from_input(now(), "  ", "Food", "5", TransactionKind::Expense).is_err());
        assert!(Transaction::from_input(now(), "Lunch", "", "5", TransactionKind::Expense).is_err());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(TransactionKind::from_str("Income").unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::from_str("expense").unwrap(), TransactionKind::Expense);
        assert!(TransactionKind::from_str("transfer").is_err());
    }
}
