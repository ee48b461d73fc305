//! Article records and their eager-loaded form.

use super::{ArticleId, Tag};
use serde::{Deserialize, Serialize};

/// An article: a title and a body under a unique id.
///
/// No field is mandatory at the type level; `Article::default()` is an
/// untitled, empty article with a fresh id. Integrity rules (unique ids,
/// tags pointing at existing articles) are enforced by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    body: String,
}

impl Article {
    /// Creates an article with a fresh id.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::from_parts(ArticleId::new(), title, body)
    }

    /// Creates an article with a known id, e.g. when reading it back.
    pub fn from_parts(id: ArticleId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns a copy with the title replaced, keeping the id.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns a copy with the body replaced, keeping the id.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// An article together with all of its tags, loaded in one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleWithTags {
    article: Article,
    tags: Vec<Tag>,
}

impl ArticleWithTags {
    pub fn new(article: Article, tags: Vec<Tag>) -> Self {
        Self { article, tags }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the tag names in load order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(Tag::name).collect()
    }

    /// Splits into the article and its tags.
    pub fn into_parts(self) -> (Article, Vec<Tag>) {
        (self.article, self.tags)
    }
}
