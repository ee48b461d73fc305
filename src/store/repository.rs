//! ArticleStore trait and result types.

use super::{ChangeSet, StoreError, StoreResult};
use crate::domain::{Article, ArticleId, ArticleWithTags, SearchDocument, Tag, TagId};
use crate::search::{LanguageProfile, TextQuery};
use serde::Serialize;

// ===========================================
// SearchHit Type
// ===========================================

/// An article matched by a full-text query, with its relevance rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    article: Article,
    rank: f64,
}

impl SearchHit {
    pub fn new(article: Article, rank: f64) -> Self {
        Self { article, rank }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Returns the relevance rank (higher is more relevant).
    pub fn rank(&self) -> f64 {
        self.rank
    }
}

// ===========================================
// ArticleStore Trait
// ===========================================

/// Persistence gateway for articles, tags and search documents.
///
/// Every call is a synchronous round trip to the backing store; nothing is
/// cached in process. Reads are explicit and eager.
pub trait ArticleStore {
    /// Ensures every schema migration is applied and returns the resulting
    /// schema version. Safe to call repeatedly.
    fn apply_schema(&mut self) -> StoreResult<u32>;

    /// Inserts or updates the whole change set in one transaction.
    ///
    /// Either every entity becomes visible or none does.
    fn save(&mut self, changes: &ChangeSet) -> StoreResult<()>;

    /// Fetches an article and all of its tags in one query.
    fn find_with_tags(&self, id: &ArticleId) -> StoreResult<Option<ArticleWithTags>>;

    /// Like [`find_with_tags`](Self::find_with_tags), but a miss is
    /// [`StoreError::NotFound`].
    fn load_with_tags(&self, id: &ArticleId) -> StoreResult<ArticleWithTags> {
        self.find_with_tags(id)?
            .ok_or(StoreError::NotFound { id: *id })
    }

    /// Fetches every article with its tags, in insertion order.
    fn list_with_tags(&self) -> StoreResult<Vec<ArticleWithTags>>;

    /// Retrieves a single tag by id.
    fn get_tag(&self, id: &TagId) -> StoreResult<Option<Tag>>;

    /// Retrieves the search document of an article, if it has one.
    fn search_document_for(&self, article_id: &ArticleId) -> StoreResult<Option<SearchDocument>>;

    /// Deletes an article, cascading to its tags and search document.
    ///
    /// Returns `true` if an article was removed.
    fn delete_article(&mut self, id: &ArticleId) -> StoreResult<bool>;

    /// Ranked full-text search, highest rank first; ties keep insertion order.
    fn search(&self, query: &TextQuery) -> StoreResult<Vec<SearchHit>>;

    /// Parses `query` under `profile` and runs [`search`](Self::search).
    ///
    /// A malformed query fails with [`StoreError::InvalidQuery`] before the
    /// database is touched.
    fn search_text(&self, query: &str, profile: LanguageProfile) -> StoreResult<Vec<SearchHit>> {
        let query = TextQuery::parse(query, profile)?;
        self.search(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_hit_exposes_article_and_rank() {
        let article = Article::new("title", "body");
        let hit = SearchHit::new(article.clone(), 1.5);
        assert_eq!(hit.article(), &article);
        assert_eq!(hit.rank(), 1.5);
    }

    #[test]
    fn search_hit_serializes_rank() {
        let hit = SearchHit::new(Article::new("t", ""), 0.25);
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["rank"], 0.25);
        assert_eq!(json["article"]["title"], "t");
    }
}
