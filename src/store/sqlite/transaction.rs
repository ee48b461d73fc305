//! The atomic unit behind `save` and each schema migration.

use crate::store::StoreResult;
use rusqlite::{Connection, Params};
use std::cell::Cell;
use tracing::trace;

/// One `BEGIN`..`COMMIT` span on the store's connection.
///
/// A whole `ChangeSet` is written inside one of these, and so is every
/// migration step together with its `schema_version` row. Dropping it without
/// [`commit`](Self::commit) rolls back, so a `?` halfway through a change set
/// leaves no articles, tags or search documents behind.
pub struct Transaction<'a> {
    conn: &'a Connection,
    statements: Cell<usize>,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn begin(conn: &'a Connection) -> StoreResult<Self> {
        conn.execute_batch("BEGIN")?;
        Ok(Self {
            conn,
            statements: Cell::new(0),
            finished: false,
        })
    }

    /// Raw access for batch SQL such as migration scripts.
    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Runs one statement and returns the number of rows it changed.
    pub fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        let rows = self.conn.execute(sql, params)?;
        self.statements.set(self.statements.get() + 1);
        Ok(rows)
    }

    /// Makes every write in the span visible to later reads.
    pub fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        trace!(statements = self.statements.get(), "committed transaction");
        Ok(())
    }

    /// Discards every write in the span.
    pub fn rollback(mut self) -> StoreResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        self.finished = true;
        trace!(statements = self.statements.get(), "rolled back transaction");
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Drop cannot report a failed rollback
            let _ = self.conn.execute_batch("ROLLBACK");
            trace!(statements = self.statements.get(), "transaction dropped, rolled back");
        }
    }
}
