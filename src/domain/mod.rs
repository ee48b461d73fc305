//! Core records: Article, Tag, SearchDocument and their ULID ids

mod article;
mod id;
mod search_document;
mod tag;

pub use article::{Article, ArticleWithTags};
pub use id::{ArticleId, ParseIdError, SearchDocumentId, TagId};
pub use search_document::SearchDocument;
pub use tag::Tag;
