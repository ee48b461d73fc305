//! Where a store lives.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Error returned for a blank location string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("database location cannot be empty (use a file path or ':memory:')")]
pub struct ParseLocationError;

/// The location of a SQLite database: a file path or an in-memory database.
///
/// Parsed from a connection string: `:memory:` selects an in-memory
/// database, anything else is taken as a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl StoreLocation {
    pub const MEMORY: &'static str = ":memory:";

    /// Returns the file path, if this is a file location.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StoreLocation::Memory => None,
            StoreLocation::File(path) => Some(path),
        }
    }
}

impl FromStr for StoreLocation {
    type Err = ParseLocationError;

    /// An empty path would give an anonymous temporary database that
    /// vanishes on close, so blank input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ParseLocationError),
            Self::MEMORY => Ok(StoreLocation::Memory),
            path => Ok(StoreLocation::File(PathBuf::from(path))),
        }
    }
}

impl From<PathBuf> for StoreLocation {
    fn from(path: PathBuf) -> Self {
        StoreLocation::File(path)
    }
}

impl From<&Path> for StoreLocation {
    fn from(path: &Path) -> Self {
        StoreLocation::File(path.to_path_buf())
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::Memory => f.write_str(Self::MEMORY),
            StoreLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}
