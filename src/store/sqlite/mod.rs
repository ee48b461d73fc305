//! SQLite-backed article store.

mod connection;
mod convert;
mod repo_impl;
mod transaction;


use super::StoreLocation;
use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed article store.
///
/// Owns one database connection. Construct it explicitly with
/// [`SqliteStore::open`] and release it with [`SqliteStore::close`] (or by
/// dropping it); there is no global connection.
pub struct SqliteStore {
    pub(crate) conn: Connection,
    location: StoreLocation,
}
