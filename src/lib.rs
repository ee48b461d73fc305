//! folio - articles with tags and ranked full-text search

pub mod cli;
pub mod domain;
pub mod search;
pub mod seed;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_delete, handle_list, handle_migrate, handle_search, handle_seed,
        handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let location = config.database(cli.database.as_deref())?;
    let profile = config.language(cli.language);

    match &cli.command {
        Command::Migrate => handle_migrate(&location),
        Command::Seed => handle_seed(&location, profile),
        Command::Add(args) => handle_add(args, &location, profile),
        Command::Show(args) => handle_show(args, &location),
        Command::List(args) => handle_list(args, &location),
        Command::Search(args) => handle_search(args, &location, profile),
        Command::Delete(args) => handle_delete(args, &location),
    }
}

/// Logs go to stderr so command output stays parseable.
///
/// Without `-v` the filter comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
