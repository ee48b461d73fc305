//! Language profiles, search vectors and text queries.

mod profile;
mod query;
mod vector;

pub use profile::{LanguageProfile, ParseProfileError};
pub use query::{QueryError, TextQuery};
pub use vector::SearchVector;
