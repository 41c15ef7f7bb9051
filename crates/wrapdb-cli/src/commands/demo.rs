//! Handle lifecycle walkthrough
//!
//! Usage: wrapdb demo [VALUE]...
//!
//! Inserts every value but the last on one connection, releases it, then
//! inserts the last value on a freshly opened connection.

use clap::Args;
use wrapdb_core::errors::{ExError, ExErrorKind};
use wrapdb_store::entries::{count_entries, insert_entry};
use wrapdb_store::{CachedConnection, StoreConfig};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Values to insert
    #[arg(default_values = ["A", "B", "C"])]
    pub values: Vec<String>,
}

/// Execute demo
pub fn execute(args: DemoArgs, config: StoreConfig) -> CommandResult {
    let Some((last, before_release)) = args.values.split_last() else {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("demo")
            .with_message("demo needs at least one value")
            .into());
    };

    let mut handle = CachedConnection::new(config);

    for value in before_release {
        let id = handle.invoke_with(insert_entry, value.as_str())?;
        print_step(&handle, value, id);
    }

    if handle.release()? {
        println!("released");
    }

    let id = handle.invoke_with(insert_entry, last.as_str())?;
    print_step(&handle, last, id);

    let total = handle.invoke(|tx| count_entries(tx))?;
    println!("total {}", total);

    handle.release()?;
    Ok(())
}

fn print_step(handle: &CachedConnection, value: &str, id: i64) {
    let handle_id = handle
        .handle_id()
        .map(|h| h.to_string())
        .unwrap_or_default();
    println!("inserted {} as {} on {}", value, id, handle_id);
}
