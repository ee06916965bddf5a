use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use log::info;
use serde::Deserialize;
use crate::transaction::DEFAULT_CATEGORIES;

const CONFIG_DIR_NAME: &str = "ledgerbook";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Ledger csv file used when none is given on the command line
    pub(crate) data_file: String,
    pub(crate) history_file: String,
    pub(crate) currency_symbol: String,
    /// Category suggestions offered while typing
    pub(crate) categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: "data/finance_data.csv".to_string(),
            history_file: ".ledgerbook_history".to_string(),
            currency_symbol: "$".to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    pub(crate) fn load_from_file(file_path: &Path) -> anyhow::Result<Config> {
        if file_path.exists() && file_path.is_file() {
            info!("Loading config from {}", file_path.display());
            let content = fs::read_to_string(file_path)?;
            Config::parse(&content).with_context(|| format!("Invalid config file {}", file_path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Load the given config file, or the one in the user's config directory when no path is given.
    pub(crate) fn load(file_path: Option<&str>) -> anyhow::Result<Config> {
        match file_path {
            Some(path) => Config::load_from_file(Path::new(path)),
            None => match default_config_path() {
                Some(path) => Config::load_from_file(&path),
                None => Ok(Config::default()),
            },
        }
    }

    fn parse(content: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str::<Config>(content)?)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
