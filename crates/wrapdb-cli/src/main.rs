//! wrapdb CLI
//!
//! Command-line interface over the cached connection handle

use clap::{Parser, Subcommand};
use wrapdb_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "wrapdb")]
#[command(about = "wrapdb - entries store behind a cached connection", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: commands::StoreArgs,

    /// Emit JSON logs instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Insert one entry per value
    Insert(commands::entries::InsertArgs),
    /// List stored entries
    List(commands::entries::ListArgs),
    /// Walk through handle reuse, release and reconnect
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = cli.store.resolve().and_then(|config| match cli.command {
        Commands::Insert(args) => commands::entries::execute_insert(args, config),
        Commands::List(args) => commands::entries::execute_list(args, config),
        Commands::Demo(args) => commands::demo::execute(args, config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
