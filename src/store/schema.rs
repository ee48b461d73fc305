//! Versioned, forward-only schema migrations for the article store.

use super::sqlite::Transaction;
use super::{StoreError, StoreResult};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

/// One forward-only schema step.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

/// Every migration, in the order it must be applied.
///
/// Versions are dense and start at 1. Never edit an applied migration;
/// append a new one instead.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "articles_and_tags",
        sql: "CREATE TABLE IF NOT EXISTS articles (
                  id TEXT PRIMARY KEY,
                  title TEXT NOT NULL DEFAULT '',
                  body TEXT NOT NULL DEFAULT ''
              );

              CREATE TABLE IF NOT EXISTS tags (
                  id TEXT PRIMARY KEY,
                  article_id TEXT NOT NULL REFERENCES articles(id) ON DELETE CASCADE,
                  name TEXT NOT NULL DEFAULT ''
              );

              CREATE INDEX IF NOT EXISTS idx_tags_article_id ON tags(article_id);",
    },
    Migration {
        version: 2,
        name: "search_documents",
        sql: "CREATE TABLE IF NOT EXISTS search_documents (
                  id TEXT PRIMARY KEY,
                  article_id TEXT NOT NULL REFERENCES articles(id) ON DELETE CASCADE,
                  search_vector TEXT NOT NULL DEFAULT ''
              );

              CREATE UNIQUE INDEX IF NOT EXISTS idx_search_documents_article_id
                  ON search_documents(article_id);

              -- Inverted index over the stored lexeme stream
              CREATE VIRTUAL TABLE IF NOT EXISTS search_documents_fts USING fts5(
                  search_vector,
                  content='search_documents',
                  content_rowid='rowid',
                  tokenize='unicode61 remove_diacritics 0'
              );

              CREATE TRIGGER IF NOT EXISTS search_documents_fts_insert
              AFTER INSERT ON search_documents BEGIN
                  INSERT INTO search_documents_fts(rowid, search_vector)
                  VALUES (NEW.rowid, NEW.search_vector);
              END;

              CREATE TRIGGER IF NOT EXISTS search_documents_fts_delete
              AFTER DELETE ON search_documents BEGIN
                  INSERT INTO search_documents_fts(search_documents_fts, rowid, search_vector)
                  VALUES ('delete', OLD.rowid, OLD.search_vector);
              END;

              CREATE TRIGGER IF NOT EXISTS search_documents_fts_update
              AFTER UPDATE ON search_documents BEGIN
                  INSERT INTO search_documents_fts(search_documents_fts, rowid, search_vector)
                  VALUES ('delete', OLD.rowid, OLD.search_vector);
                  INSERT INTO search_documents_fts(rowid, search_vector)
                  VALUES (NEW.rowid, NEW.search_vector);
              END;",
    },
];

/// Columns each table must have after migration.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("articles", &["id", "title", "body"]),
    ("tags", &["id", "article_id", "name"]),
    ("search_documents", &["id", "article_id", "search_vector"]),
];

/// Returns the newest schema version this build knows about.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Applies every pending migration and returns the resulting version.
///
/// Each migration runs in its own transaction together with its
/// `schema_version` row, so a failed step leaves the previous version intact.
///
/// # Errors
///
/// Returns [`StoreError::Schema`] if the store is unreachable (not a
/// database, unreadable or locked), if the database was written by a newer
/// build, if a migration fails, or if an existing table lacks a column this
/// build relies on.
pub fn apply_migrations(conn: &Connection) -> StoreResult<u32> {
    migrate(conn).map_err(StoreError::unreachable_as_schema)
}

fn migrate(conn: &Connection) -> StoreResult<u32> {
    // Also the first statement to touch the file, so reachability shows up here
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             name TEXT NOT NULL,
             applied_at TEXT NOT NULL
         );",
    )?;

    let current = schema_version(conn)?;
    let latest = latest_version();
    if current > latest {
        return Err(StoreError::schema(format!(
            "database schema version {current} is newer than the latest supported version {latest}"
        )));
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        apply_one(conn, migration)?;
        info!(
            version = migration.version,
            name = migration.name,
            "applied schema migration"
        );
    }

    verify_columns(conn)?;
    Ok(latest)
}

fn apply_one(conn: &Connection, migration: &Migration) -> StoreResult<()> {
    let tx = Transaction::begin(conn)?;

    tx.conn().execute_batch(migration.sql).map_err(|e| {
        match StoreError::from(e) {
            err @ (StoreError::Connection(_) | StoreError::Cancelled(_)) => err,
            err => StoreError::schema(format!(
                "migration {} ({}) failed: {}",
                migration.version, migration.name, err
            )),
        }
    })?;

    tx.execute(
        "INSERT INTO schema_version (version, name, applied_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.version, migration.name, Utc::now().to_rfc3339()],
    )?;

    tx.commit()
}

fn verify_columns(conn: &Connection) -> StoreResult<()> {
    for (table, required) in REQUIRED_COLUMNS {
        let columns = table_columns(conn, table)?;
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|c| !columns.iter().any(|have| have == c))
            .collect();
        if !missing.is_empty() {
            return Err(StoreError::schema(format!(
                "table '{}' conflicts with the expected schema: missing column(s) {}",
                table,
                missing.join(", ")
            )));
        }
    }
    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Returns the highest applied migration version, or 0 for a fresh database.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(version.unwrap_or(0))
}

/// Rebuilds the full-text index from the `search_documents` table.
pub fn rebuild_search_index(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO search_documents_fts(search_documents_fts) VALUES('rebuild')",
        [],
    )?;
    Ok(())
}
