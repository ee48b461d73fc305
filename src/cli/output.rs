//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::ArticleWithTags;
use crate::store::SearchHit;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single article with its tag names.
#[derive(Debug, Serialize)]
pub struct ArticleListing {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl From<&ArticleWithTags> for ArticleListing {
    fn from(loaded: &ArticleWithTags) -> Self {
        let article = loaded.article();
        Self {
            id: article.id().to_string(),
            title: article.title().to_string(),
            body: article.body().to_string(),
            tags: loaded.tag_names().into_iter().map(str::to_string).collect(),
        }
    }
}

/// A ranked search result.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub id: String,
    pub title: String,
    pub rank: f64,
}

impl From<&SearchHit> for SearchListing {
    fn from(hit: &SearchHit) -> Self {
        Self {
            id: hit.article().id().to_string(),
            title: hit.article().title().to_string(),
            rank: hit.rank(),
        }
    }
}
