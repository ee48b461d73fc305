//! Command handlers for the CLI.

mod articles;
mod schema;
mod search;


use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::Output;
use crate::store::{SqliteStore, StoreLocation};

pub use articles::{handle_add, handle_delete, handle_list, handle_show};
pub use schema::{handle_migrate, handle_seed};
pub use search::handle_search;

#[cfg(test)]
pub(crate) use articles::{render_article, render_article_list};
#[cfg(test)]
pub(crate) use search::render_search;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the store, applying any pending migrations.
pub(crate) fn open_store(location: &StoreLocation) -> Result<SqliteStore> {
    SqliteStore::open(location).with_context(|| format!("failed to open store at {location}"))
}

/// Serializes command output as pretty JSON.
pub(crate) fn to_json<T: Serialize>(data: T) -> Result<String> {
    serde_json::to_string_pretty(&Output::new(data)).context("failed to serialize output")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_width.saturating_sub(3)).collect();
    format!("{kept}...")
}
