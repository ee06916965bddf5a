use std::{fmt, io};

/// Errors raised by the ledger store and its CSV codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Storage could not be read or written
    Io(String),
    /// A stored record does not match the expected schema
    Parse(String),
    /// User supplied fields failed the non-empty / positive amount checks
    Validation(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::Io(s) => write!(f, "i/o error: {}", s),
            LedgerError::Parse(s) => write!(f, "parse error: {}", s),
            LedgerError::Validation(s) => write!(f, "invalid transaction: {}", s),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<io::Error> for LedgerError {
    fn from(e: io::Error) -> Self {
        LedgerError::Io(e.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => LedgerError::Io(e.to_string()),
            _ => LedgerError::Parse(e.to_string()),
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
