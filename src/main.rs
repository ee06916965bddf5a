use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::config::Config;
use crate::controller::{run_command, run_script};
use crate::editor::LedgerHelper;
use crate::ledger::Ledger;

mod common;
mod config;
mod controller;
mod csv_reader;
mod editor;
mod ledger;
mod parser;
mod report;
mod transaction;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Ledger csv file path, overrides `data_file` from the config
    file: Option<String>,

    /// Config file path
    #[clap(short, long)]
    config: Option<String>,

    /// Run the given `;` separated commands and exit
    #[clap(short, long)]
    execute: Option<String>,
}

const PROMPT: &str = "# ";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let data_file = cli.file.as_deref().unwrap_or(config.data_file.as_str());

    let (mut ledger, load_error) = Ledger::open(data_file);
    if let Some(e) = load_error {
        error!("Error loading data: {}", e);
    }
    info!("Using ledger {} with {} transactions", ledger.file_path().display(), ledger.transactions().len());

    if let Some(script) = &cli.execute {
        return run_script(&mut ledger, &config, script, &mut |_: &str| true);
    }

    let mut rl = Editor::<LedgerHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(LedgerHelper::new(&config.categories, PROMPT)));
    if rl.load_history(&config.history_file).is_err() {
        info!("No previous history.");
    }

    let mut buffer: Vec<String> = vec![];
    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                let line = line.trim();
                let is_last = line.ends_with(';');
                if !line.is_empty() {
                    buffer.push(line.to_string());
                }
                if is_last {
                    let command = buffer.join("\n");
                    rl.add_history_entry(command.trim())?;

                    let mut confirm = |question: &str| ask_yes_no(&mut rl, question);
                    if let Err(err) = run_command(&mut ledger, &config, &command, &mut confirm) {
                        println!("{}", err);
                    }

                    buffer.clear();
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }

    if let Err(e) = rl.save_history(&config.history_file) {
        warn!("Unable to save history to {}: {}", config.history_file, e);
    }
    Ok(())
}

/// Anything but an explicit yes counts as no.
fn ask_yes_no(rl: &mut Editor<LedgerHelper, DefaultHistory>, question: &str) -> bool {
    match rl.readline(&format!("{question} (yes/no) ")) {
        Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
