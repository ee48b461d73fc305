//! The per-article search document.

use super::{Article, ArticleId, SearchDocumentId};
use crate::search::{LanguageProfile, SearchVector};

/// The searchable projection of one article.
///
/// At most one search document may exist per article; the store enforces
/// this with a unique index on `article_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDocument {
    id: SearchDocumentId,
    article_id: ArticleId,
    vector: SearchVector,
}

impl SearchDocument {
    /// Creates a search document with a fresh id.
    pub fn new(article_id: ArticleId, vector: SearchVector) -> Self {
        Self::from_parts(SearchDocumentId::new(), article_id, vector)
    }

    pub fn from_parts(id: SearchDocumentId, article_id: ArticleId, vector: SearchVector) -> Self {
        Self {
            id,
            article_id,
            vector,
        }
    }

    /// Derives the document for an article from its title, body and tag names.
    pub fn for_article<S: AsRef<str>>(
        article: &Article,
        tag_names: &[S],
        profile: LanguageProfile,
    ) -> Self {
        let parts = [article.title(), article.body()]
            .into_iter()
            .chain(tag_names.iter().map(|name| name.as_ref()));
        Self::new(*article.id(), SearchVector::from_parts(profile, parts))
    }

    /// Keeps the content but takes over an existing document's id, so a save
    /// replaces the stored vector instead of adding a second document.
    pub fn with_id(mut self, id: SearchDocumentId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &SearchDocumentId {
        &self.id
    }

    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    pub fn vector(&self) -> &SearchVector {
        &self.vector
    }
}
