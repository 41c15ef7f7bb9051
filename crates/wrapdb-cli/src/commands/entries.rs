//! Entry commands
//!
//! Usage: wrapdb insert <VALUE>...
//!        wrapdb list [--json]

use clap::Args;
use wrapdb_store::entries::{insert_entry, list_entries};
use wrapdb_store::{CachedConnection, StoreConfig};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Values to insert, one transaction each
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute insert
pub fn execute_insert(args: InsertArgs, config: StoreConfig) -> CommandResult {
    let mut handle = CachedConnection::new(config);

    for value in &args.values {
        let id = handle.invoke_with(insert_entry, value.as_str())?;
        println!("{}", id);
    }

    handle.release()?;
    Ok(())
}

/// Execute list
pub fn execute_list(args: ListArgs, config: StoreConfig) -> CommandResult {
    let mut handle = CachedConnection::new(config);
    let entries = handle.invoke(|tx| list_entries(tx))?;
    handle.release()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.id, entry.value);
        }
    }

    Ok(())
}
