use anyhow::anyhow;
use log::{info, warn};
use crate::config::Config;
use crate::ledger::Ledger;
use crate::parser;
use crate::parser::Statement::{Add, Categories, Clear, Delete, Export, Help, List, Monthly, Totals};
use crate::report;

mod export;
mod report_table;

const HELP: &str = "\
ADD INCOME|EXPENSE 'description' category amount;
DELETE yyyy-mm-dd 'description' category;
CLEAR;
EXPORT TO file_path;
LIST [category];
TOTALS;
CATEGORIES [category];
MONTHLY [EXPENSES|INCOME];";

/// Parse a command and run it against the ledger, printing its output.
/// `confirm` is asked before anything destructive; a `false` answer cancels the command.
pub(crate) fn run_command(ledger: &mut Ledger, config: &Config, command: &str, confirm: &mut dyn FnMut(&str) -> bool) -> anyhow::Result<()> {
    let statement = parser::parse(command)?;
    let currency = config.currency_symbol.as_str();

    match statement {
        Add(kind, description, category, amount) => {
            let t = ledger.add(&description, &category, &amount, kind)?;
            info!("Added {} '{}' of {}{:.2}", t.kind, t.description, currency, t.magnitude());
        }
        Delete(date, description, category) => {
            let matching = ledger.count_matching(date, &description, &category);
            if matching == 0 {
                warn!("No transaction on {} matches '{}' in {}", date, description, category);
            } else if confirm(&format!("Are you sure you want to delete {matching} transactions?")) {
                let removed = ledger.delete(date, &description, &category)?;
                info!("{removed} transactions deleted.");
            } else {
                info!("Delete cancelled.");
            }
        }
        Clear => {
            if confirm("Are you sure you want to clear all data? This cannot be undone!") {
                ledger.clear()?;
                info!("All data cleared.");
            } else {
                info!("Clear cancelled.");
            }
        }
        Export(file_path) => {
            export::execute_export(ledger, &file_path)?;
        }
        List(category) => {
            let listing = report::sorted_listing(ledger.transactions(), category.as_deref());
            println!("{}", report_table::listing_table(&listing, currency));
        }
        Totals => {
            let totals = report::totals(ledger.transactions());
            println!("{}", report_table::totals_table(&totals, currency));
        }
        Categories(category) => {
            let breakdown = report::by_category(ledger.transactions(), category.as_deref());
            if breakdown.is_empty() {
                info!("No expense data to display");
            } else {
                println!("{}", report_table::category_table(&breakdown, currency));
            }
        }
        Monthly(Some(kind)) => {
            let series = report::monthly_series(ledger.transactions(), kind);
            if series.is_empty() {
                info!("No {} data to display", kind);
            } else {
                println!("{}", report_table::monthly_table(&series, kind, currency));
            }
        }
        Monthly(None) => {
            let comparison = report::income_vs_expenses(ledger.transactions());
            if comparison.is_empty() {
                info!("No data to display");
            } else {
                println!("{}", report_table::comparison_table(&comparison, currency));
            }
        }
        Help => println!("{HELP}"),
    }

    Ok(())
}

/// Run a list of `;` terminated commands, stopping at the first failure.
/// A `;` inside a quoted string does not end a command.
pub(crate) fn run_script(ledger: &mut Ledger, config: &Config, script: &str, confirm: &mut dyn FnMut(&str) -> bool) -> anyhow::Result<()> {
    for command in parser::split_statements(script)? {
        run_command(ledger, config, command, confirm).map_err(|e| anyhow!("{}: {}", command, e))?;
    }
    Ok(())
}
