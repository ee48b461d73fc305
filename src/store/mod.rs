//! Persistence gateway: schema, transactional writes and eager reads.

mod changes;
mod error;
mod location;
mod repository;
pub mod schema;
mod sqlite;

pub use changes::ChangeSet;
pub use error::{StoreError, StoreResult};
pub use location::{ParseLocationError, StoreLocation};
pub use repository::{ArticleStore, SearchHit};
pub use sqlite::{SqliteStore, Transaction};
