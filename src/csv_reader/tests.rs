use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use crate::common::LedgerError;
use crate::csv_reader::{format_date, parse_date, read_transactions, write_transactions};
use crate::transaction::TransactionKind;

#[test]
fn test_read_transactions() {
    let rows = read_transactions(&fixture_filename("finance_data.csv")).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].description, "Paycheck");
    assert_eq!(rows[0].kind, TransactionKind::Income);
    assert_eq!(rows[0].date.nanosecond(), 345_678_000);
    assert_eq!(rows[1].amount, -50.0);
    assert_eq!(rows[2].category, "Transportation");
}

#[test]
fn test_read_reordered_columns() {
    let rows = read_transactions(&fixture_filename("reordered.csv")).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Coffee, beans");
    assert_eq!(rows[0].date, NaiveDateTime::from_str("2024-03-01T08:15:00").unwrap());
    assert_eq!(rows[1].date.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    assert_eq!(rows[1].amount, 100.0);
}

#[test]
fn test_read_empty_file() {
    let rows = read_transactions(&fixture_filename("empty.csv")).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_read_invalid_files() {
    for file in ["bad_type.csv", "missing_column.csv", "sign_mismatch.csv"] {
        match read_transactions(&fixture_filename(file)) {
            Err(LedgerError::Parse(_)) => {},
            other => panic!("Unexpected results for {}: {:?}", file, other),
        }
    }
}

#[test]
fn test_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");

    let rows = read_transactions(&fixture_filename("finance_data.csv")).unwrap();
    write_transactions(&path, &rows).unwrap();
    assert_eq!(read_transactions(&path).unwrap(), rows);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("date,description,category,amount,type\n"));
    assert!(content.contains("2024-01-20 18:02:00,Groceries,Food,-50.0,expense"));
}

#[test]
fn test_write_empty_keeps_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");

    write_transactions(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "date,description,category,amount,type\n");
    assert!(read_transactions(&path).unwrap().is_empty());
}

#[test]
fn test_parse_date() {
    let expected = NaiveDateTime::from_str("2024-01-20T18:02:00").unwrap();
    assert_eq!(parse_date("2024-01-20 18:02:00").unwrap(), expected);
    assert_eq!(parse_date("2024-01-20T18:02:00").unwrap(), expected);
    assert_eq!(format_date(expected), "2024-01-20 18:02:00");
    assert!(parse_date("20/01/2024").is_err());
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
