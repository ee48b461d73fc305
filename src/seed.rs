//! Sample articles for a fresh store.

use crate::domain::Article;
use crate::search::LanguageProfile;
use crate::store::ChangeSet;

/// Titles and tag names of the sample articles.
pub const SAMPLE_ARTICLES: &[(&str, &[&str])] = &[
    ("Первая статья", &["поиск", "программирование"]),
    ("Вторая статья", &["тест"]),
];

/// Builds the sample articles, their tags and search documents as one batch.
pub fn sample_articles(profile: LanguageProfile) -> ChangeSet {
    SAMPLE_ARTICLES
        .iter()
        .fold(ChangeSet::new(), |changes, (title, tags)| {
            changes.indexed(Article::new(*title, ""), *tags, profile)
        })
}
