pub mod demo;
pub mod entries;

use clap::Args;
use std::path::PathBuf;
use wrapdb_store::StoreConfig;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Where the store lives; shared by every subcommand
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Database file (overrides the config file's `path`)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    /// Build the effective store config: file (or defaults), then `--db`
    pub fn resolve(&self) -> Result<StoreConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        if let Some(db) = &self.db {
            config.path = db.clone();
        }
        Ok(config)
    }
}
