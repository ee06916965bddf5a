
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDate, NaiveDateTime};
use log::{debug, info};
use crate::common::{LedgerError, LedgerResult};
use crate::csv_reader;
use crate::transaction::{normalize_category, normalize_description, Transaction, TransactionKind};

/// The in-memory ledger of one session, bound to the csv file it is flushed to after every change.
#[derive(Debug)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    file_path: PathBuf,
}

impl Ledger {
    pub(crate) fn new<P: AsRef<Path>>(file_path: P) -> Ledger {
        Ledger {
            transactions: vec![],
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load ledger from disk. A missing file gives an empty ledger.
    pub(crate) fn load<P: AsRef<Path>>(file_path: P) -> LedgerResult<Ledger> {
        let path = file_path.as_ref();
        let mut ledger = Ledger::new(path);
        if path.exists() {
            ledger.transactions = csv_reader::read_transactions(path)?;
            info!("Loaded {} transactions from {}", ledger.transactions.len(), path.display());
        } else {
            info!("{} does not exist yet, starting with an empty ledger", path.display());
        }
        Ok(ledger)
    }

    /// Like [`Ledger::load`] but never fails: on error an empty ledger bound to the same file is
    /// returned alongside the error so the caller can report it.
    pub(crate) fn open<P: AsRef<Path>>(file_path: P) -> (Ledger, Option<LedgerError>) {
        match Ledger::load(file_path.as_ref()) {
            Ok(ledger) => (ledger, None),
            Err(e) => (Ledger::new(file_path), Some(e)),
        }
    }

    /// Save ledger content to disk, overwriting the previous file.
    pub(crate) fn save(&self) -> LedgerResult<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        csv_reader::write_transactions(&self.file_path, &self.transactions)
    }

    /// Record a new transaction dated now. Nothing changes when the input fails validation.
    /// A failed save is returned, but the transaction stays in memory.
    pub(crate) fn add(&mut self, description: &str, category: &str, amount: &str, kind: TransactionKind) -> LedgerResult<&Transaction> {
        self.add_at(Local::now().naive_local(), description, category, amount, kind)
    }

    pub(crate) fn add_at(&mut self, date: NaiveDateTime, description: &str, category: &str, amount: &str, kind: TransactionKind) -> LedgerResult<&Transaction> {
        let t = Transaction::from_input(date, description, category, amount, kind)?;
        debug!("Adding {} '{}' in {} of {:.2}", t.kind, t.description, t.category, t.amount);
        self.transactions.push(t);
        self.save()?;

        let index = self.transactions.len() - 1;
        Ok(&self.transactions[index])
    }

    /// Number of transactions [`Ledger::delete`] would remove for the same arguments.
    pub(crate) fn count_matching(&self, date: NaiveDate, description: &str, category: &str) -> usize {
        let description = normalize_description(description);
        let category = normalize_category(category);
        self.transactions.iter().filter(|t| t.matches(date, &description, category)).count()
    }

    /// Remove every transaction recorded on `date` with the given description and category.
    /// Arguments are trimmed the same way [`Ledger::add`] trims its input. Rows are matched by
    /// value, so identical triples are all removed. Returns the number removed; the file is only
    /// rewritten when that is non-zero.
    pub(crate) fn delete(&mut self, date: NaiveDate, description: &str, category: &str) -> LedgerResult<usize> {
        let description = normalize_description(description);
        let category = normalize_category(category);
        let before = self.transactions.len();
        self.transactions.retain(|t| !t.matches(date, &description, category));

        let removed = before - self.transactions.len();
        if removed > 0 {
            info!("Deleted {} transactions", removed);
            self.save()?;
        }
        Ok(removed)
    }

    pub(crate) fn clear(&mut self) -> LedgerResult<()> {
        info!("Clearing {} transactions", self.transactions.len());
        self.transactions.clear();
        self.save()
    }

    /// Write the ledger to an arbitrary file in the storage format.
    pub(crate) fn export<P: AsRef<Path>>(&self, file_path: P) -> LedgerResult<()> {
        let path = file_path.as_ref();
        csv_reader::write_transactions(path, &self.transactions)?;
        info!("Exported {} transactions to {}", self.transactions.len(), path.display());
        Ok(())
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn file_path(&self) -> &Path {
        &self.file_path
    }
}
