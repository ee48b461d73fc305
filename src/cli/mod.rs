//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::ArticleId;
use crate::search::LanguageProfile;
use output::OutputFormat;

/// folio - articles with tags and ranked full-text search
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Database location: a file path or `:memory:` (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub database: Option<String>,

    /// Language profile for indexing and search: simple, english, russian
    #[arg(short = 'l', long, global = true)]
    pub language: Option<LanguageProfile>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending schema migrations
    Migrate,

    /// Insert the sample articles
    Seed,

    /// Add an article with tags
    Add(AddArgs),

    /// Show an article and its tags
    Show(ShowArgs),

    /// List all articles with their tags
    #[command(name = "ls")]
    List(ListArgs),

    /// Full-text search across articles, best match first
    Search(SearchArgs),

    /// Delete an article, its tags and its search document
    Delete(DeleteArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Article title
    pub title: String,

    /// Article body
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Tag for the article (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Article ID
    pub id: ArticleId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Article ID
    pub id: ArticleId,
}
