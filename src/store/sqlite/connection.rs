//! Connection lifecycle for SqliteStore.

use super::SqliteStore;
use super::transaction::Transaction;
use crate::store::schema::{apply_migrations, rebuild_search_index, schema_version};
use crate::store::{StoreError, StoreLocation, StoreResult};
use rusqlite::{Connection, InterruptHandle};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Virtual machine steps between deadline checks.
const DEADLINE_CHECK_INTERVAL: i32 = 1_000;

impl SqliteStore {
    // ===========================================
    // Opening
    // ===========================================

    /// Opens the store at `location` and applies pending migrations.
    pub fn open(location: &StoreLocation) -> StoreResult<Self> {
        match location {
            StoreLocation::Memory => Self::open_in_memory(),
            StoreLocation::File(path) => Self::open_path(path),
        }
    }

    /// Opens an in-memory store with the full schema.
    ///
    /// This is useful for testing and scratch stores that don't need persistence.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::from(e).unreachable_as_schema())?;
        Self::init(conn, StoreLocation::Memory)
    }

    /// Opens or creates a SQLite database at the given path.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open_path(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn =
            Connection::open(path).map_err(|e| StoreError::from(e).unreachable_as_schema())?;
        Self::init(conn, StoreLocation::File(path.to_path_buf()))
    }

    /// Migrating also turns on foreign-key enforcement for this connection.
    fn init(conn: Connection, location: StoreLocation) -> StoreResult<Self> {
        let version = apply_migrations(&conn)?;
        debug!(%location, version, "opened article store");
        Ok(Self { conn, location })
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    ///
    /// Dropping the store also closes it, but silently.
    pub fn close(self) -> StoreResult<()> {
        let location = self.location;
        self.conn.close().map_err(|(_, e)| StoreError::from(e))?;
        debug!(%location, "closed article store");
        Ok(())
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns where this store lives.
    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns the highest applied schema migration.
    pub fn schema_version(&self) -> StoreResult<u32> {
        Ok(schema_version(&self.conn)?)
    }

    /// Rebuilds the full-text index from stored search documents.
    pub fn rebuild_search_index(&mut self) -> StoreResult<()> {
        Ok(rebuild_search_index(&self.conn)?)
    }

    // ===========================================
    // Transactions
    // ===========================================

    /// Begins a new transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        Transaction::begin(&self.conn)
    }

    // ===========================================
    // Deadlines and Cancellation
    // ===========================================

    /// Aborts any statement still running at `deadline`.
    ///
    /// The aborted call fails with [`StoreError::Cancelled`]. Pass `None` to
    /// remove the deadline. The deadline applies to every later call until
    /// it is replaced.
    pub fn set_deadline(&self, deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => self.conn.progress_handler(
                DEADLINE_CHECK_INTERVAL,
                Some(move || Instant::now() >= deadline),
            ),
            None => self
                .conn
                .progress_handler(0, None::<fn() -> bool>),
        }
    }

    /// Returns a handle that can cancel the running statement from another thread.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.conn.get_interrupt_handle()
    }
}
