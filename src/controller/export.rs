use anyhow::anyhow;
use crate::ledger::Ledger;

/// Export transactions to a file
pub(crate) fn execute_export(ledger: &Ledger, file_path: &str) -> anyhow::Result<()> {
    if ledger.is_empty() {
        return Err(anyhow!("No data to export"));
    }
    ledger.export(file_path)?;
    println!("Data exported to {}", file_path);
    Ok(())
}
