//! Store integration tests through the public library API.
//!
//! Each test works against a file-backed database in a temp directory.

mod common;

use common::harness::TestEnv;
use folio::domain::Article;
use folio::search::{LanguageProfile, QueryError, TextQuery};
use folio::seed::sample_articles;
use folio::store::{ArticleStore, ChangeSet, SqliteStore, StoreError, StoreLocation};
use pretty_assertions::assert_eq;

#[test]
fn test_list_includes_tags_eagerly() {
    let env = TestEnv::new();
    let mut store = env.open_store();
    store.save(&sample_articles(LanguageProfile::Russian)).unwrap();

    let articles = store.list_with_tags().unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].tag_names(), vec!["поиск", "программирование"]);
    assert_eq!(articles[1].tag_names(), vec!["тест"]);
}

#[test]
fn test_saved_changes_visible_to_new_connection() {
    let env = TestEnv::new();
    let article = Article::new("", "");
    let id = *article.id();
    {
        let mut store = env.open_store();
        store.save(&ChangeSet::new().article(article)).unwrap();
        store.close().unwrap();
    }

    let reopened = env.open_store();
    let loaded = reopened.load_with_tags(&id).unwrap();
    assert_eq!(loaded.article().title(), "");
    assert!(loaded.tags().is_empty());
}

#[test]
fn test_unsaved_changes_are_not_visible() {
    let env = TestEnv::new();
    let store = env.open_store();
    let changes = ChangeSet::new().article(Article::new("Pending", ""));

    let id = *changes.articles()[0].id();
    assert!(store.find_with_tags(&id).unwrap().is_none());
}

#[test]
fn test_russian_full_text_search_ranks_tagged_article() {
    let env = TestEnv::new();
    env.add_article("Первая статья", "", &["поиск", "программирование"], LanguageProfile::Russian);
    env.add_article("Вторая статья", "", &["тест"], LanguageProfile::Russian);
    let store = env.open_store();

    let query = TextQuery::parse("программирование", LanguageProfile::Russian).unwrap();
    let hits = store.search(&query).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].article().title(), "Первая статья");
    assert!(hits.windows(2).all(|pair| pair[0].rank() >= pair[1].rank()));
}

#[test]
fn test_search_without_documents_is_empty() {
    let env = TestEnv::new();
    let mut store = env.open_store();
    store
        .save(&ChangeSet::new().article(Article::new("Unindexed программирование", "")))
        .unwrap();

    let hits = store
        .search_text("программирование", LanguageProfile::Russian)
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_invalid_query_is_reported() {
    let env = TestEnv::new();
    let store = env.open_store();

    let err = store.search_text("", LanguageProfile::Russian).unwrap_err();
    assert!(matches!(err, StoreError::InvalidQuery(QueryError::Empty)));
}

#[test]
fn test_schema_survives_reopen() {
    let env = TestEnv::new();
    let location = StoreLocation::File(env.db_path());

    let first = SqliteStore::open(&location).unwrap();
    let version = first.schema_version().unwrap();
    first.close().unwrap();

    let mut second = SqliteStore::open(&location).unwrap();
    assert_eq!(second.schema_version().unwrap(), version);
    assert_eq!(second.apply_schema().unwrap(), version);
}

#[test]
fn test_delete_cascades_to_tags_and_document() {
    let env = TestEnv::new();
    let id = env.add_article("Gone", "soon", &["temp"], LanguageProfile::English);
    let mut store = env.open_store();
    let tag_id = *store.load_with_tags(&id).unwrap().tags()[0].id();

    assert!(store.delete_article(&id).unwrap());

    assert!(store.get_tag(&tag_id).unwrap().is_none());
    assert!(store.search_document_for(&id).unwrap().is_none());
    assert!(
        store
            .search_text("soon", LanguageProfile::English)
            .unwrap()
            .is_empty()
    );
}
