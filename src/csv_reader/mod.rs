#[cfg(test)]
pub(crate) mod tests;

use std::fs;
use std::path::Path;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::common::{LedgerError, LedgerResult};
use crate::transaction::{Transaction, TransactionKind};

/// Column names of the ledger file, in the order they are written
pub(crate) const HEADER: [&str; 5] = ["date", "description", "category", "amount", "type"];

/// Timestamp layout written to disk. Fractional seconds are omitted when zero.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

lazy_static! {
    static ref DATE_TIME_SPACE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(\.\d+)?$").unwrap();
    static ref DATE_TIME_T: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?$").unwrap();
    static ref DATE_ONLY: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// A transaction row as it appears in the csv file
#[derive(Deserialize, Debug)]
struct Record {
    date: String,
    description: String,
    category: String,
    amount: f64,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Serialize)]
struct RecordRef<'a> {
    date: String,
    description: &'a str,
    category: &'a str,
    amount: f64,
    #[serde(rename = "type")]
    kind: String,
}

impl Record {
    fn into_transaction(self) -> LedgerResult<Transaction> {
        let date = parse_date(self.date.trim())?;
        let kind = self.kind.parse::<TransactionKind>()?;
        if !kind.agrees_with(self.amount) {
            return Err(LedgerError::Parse(format!("amount {} does not agree with type '{}'", self.amount, kind)));
        }

        Ok(Transaction {
            date,
            description: self.description,
            category: self.category,
            amount: self.amount,
            kind,
        })
    }
}

/// Read all transactions from a ledger file. A zero-length file holds no transactions.
pub(crate) fn read_transactions(file_path: &Path) -> LedgerResult<Vec<Transaction>> {
    if fs::metadata(file_path)?.len() == 0 {
        info!("{} is empty", file_path.display());
        return Ok(vec![]);
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).trim(Trim::Headers).from_path(file_path)?;
    check_headers(rdr.headers()?)?;

    let mut transactions = vec![];
    for (i, result) in rdr.deserialize::<Record>().enumerate() {
        // Line 1 is the header
        let record = result.map_err(|e| LedgerError::Parse(format!("line {}: {}", i + 2, e)))?;
        let t = record.into_transaction().map_err(|e| match e {
            LedgerError::Parse(msg) => LedgerError::Parse(format!("line {}: {}", i + 2, msg)),
            other => other,
        })?;
        transactions.push(t);
    }

    Ok(transactions)
}

/// Write the header and every transaction, replacing whatever the file held before.
pub(crate) fn write_transactions(file_path: &Path, transactions: &[Transaction]) -> LedgerResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(file_path)?;
    wtr.write_record(HEADER)?;
    for t in transactions {
        wtr.serialize(RecordRef {
            date: format_date(t.date),
            description: &t.description,
            category: &t.category,
            amount: t.amount,
            kind: t.kind.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn check_headers(headers: &StringRecord) -> LedgerResult<()> {
    for expected in HEADER {
        if !headers.iter().any(|h| h == expected) {
            return Err(LedgerError::Parse(format!("Unable to locate '{}' column", expected)));
        }
    }
    Ok(())
}

pub(crate) fn format_date(date: NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(s: &str) -> LedgerResult<NaiveDateTime> {
    let parsed = if DATE_TIME_SPACE.is_match(s) {
        NaiveDateTime::parse_from_str(s, DATE_FORMAT).ok()
    } else if DATE_TIME_T.is_match(s) {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()
    } else if DATE_ONLY.is_match(s) {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
    } else {
        None
    };

    parsed.ok_or_else(|| LedgerError::Parse(format!("'{}' is not a valid date", s)))
}
