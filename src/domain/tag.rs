//! Tags attached to a single article.

use super::{ArticleId, TagId};
use serde::{Deserialize, Serialize};

/// A tag row owned by exactly one article.
///
/// Names are free text and kept as given; two tags on the same article may
/// even share a name. The owning article must exist when the tag is saved,
/// and deleting that article deletes the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    article_id: ArticleId,
    name: String,
}

impl Tag {
    /// Creates a tag with a fresh id for the given article.
    pub fn new(article_id: ArticleId, name: impl Into<String>) -> Self {
        Self::from_parts(TagId::new(), article_id, name)
    }

    /// Creates a tag with a known id.
    pub fn from_parts(id: TagId, article_id: ArticleId, name: impl Into<String>) -> Self {
        Self {
            id,
            article_id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Returns the id of the owning article.
    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
