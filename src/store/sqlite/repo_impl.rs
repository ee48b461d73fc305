//! ArticleStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Article, ArticleId, ArticleWithTags, SearchDocument, Tag, TagId};
use crate::search::TextQuery;
use crate::store::schema::apply_migrations;
use crate::store::{ArticleStore, ChangeSet, SearchHit, StoreResult};
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

/// Article columns joined with nullable tag columns, one row per tag.
const ARTICLE_WITH_TAGS_SELECT: &str = "SELECT a.id, a.title, a.body, t.id, t.name
     FROM articles a
     LEFT JOIN tags t ON t.article_id = a.id";

impl ArticleStore for SqliteStore {
    fn apply_schema(&mut self) -> StoreResult<u32> {
        apply_migrations(&self.conn)
    }

    fn save(&mut self, changes: &ChangeSet) -> StoreResult<()> {
        let tx = self.transaction()?;

        // 1. Articles first, so tags and documents can reference them
        for article in changes.articles() {
            tx.execute(
                "INSERT INTO articles (id, title, body) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     title = excluded.title,
                     body = excluded.body",
                params![article.id(), article.title(), article.body()],
            )?;
        }

        // 2. Tags
        for tag in changes.tags() {
            tx.execute(
                "INSERT INTO tags (id, article_id, name) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     article_id = excluded.article_id,
                     name = excluded.name",
                params![tag.id(), tag.article_id(), tag.name()],
            )?;
        }

        // 3. Search documents; the unique article_id index still applies
        for document in changes.search_documents() {
            tx.execute(
                "INSERT INTO search_documents (id, article_id, search_vector) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     article_id = excluded.article_id,
                     search_vector = excluded.search_vector",
                params![document.id(), document.article_id(), document.vector()],
            )?;
        }

        tx.commit()?;

        debug!(
            articles = changes.articles().len(),
            tags = changes.tags().len(),
            search_documents = changes.search_documents().len(),
            "saved change set"
        );
        Ok(())
    }

    fn find_with_tags(&self, id: &ArticleId) -> StoreResult<Option<ArticleWithTags>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_WITH_TAGS_SELECT} WHERE a.id = ?1 ORDER BY t.rowid"
        ))?;
        let rows = stmt
            .query_map([id], joined_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let loaded = group_joined_rows(rows).into_iter().next();
        debug!(article_id = %id, found = loaded.is_some(), "loaded article with tags");
        Ok(loaded)
    }

    fn list_with_tags(&self) -> StoreResult<Vec<ArticleWithTags>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ARTICLE_WITH_TAGS_SELECT} ORDER BY a.rowid, t.rowid"
        ))?;
        let rows = stmt
            .query_map([], joined_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(group_joined_rows(rows))
    }

    fn get_tag(&self, id: &TagId) -> StoreResult<Option<Tag>> {
        let tag = self
            .conn
            .query_row(
                "SELECT id, article_id, name FROM tags WHERE id = ?1",
                [id],
                |row| Ok(Tag::from_parts(row.get(0)?, row.get(1)?, row.get::<_, String>(2)?)),
            )
            .optional()?;
        Ok(tag)
    }

    fn search_document_for(&self, article_id: &ArticleId) -> StoreResult<Option<SearchDocument>> {
        let document = self
            .conn
            .query_row(
                "SELECT id, article_id, search_vector FROM search_documents WHERE article_id = ?1",
                [article_id],
                |row| Ok(SearchDocument::from_parts(row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        Ok(document)
    }

    fn delete_article(&mut self, id: &ArticleId) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1", [id])?;
        debug!(article_id = %id, deleted = rows > 0, "deleted article");
        Ok(rows > 0)
    }

    fn search(&self, query: &TextQuery) -> StoreResult<Vec<SearchHit>> {
        // bm25() is lower for better matches; negate so higher ranks first
        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.title, a.body, -bm25(search_documents_fts) AS score
             FROM search_documents_fts
             JOIN search_documents sd ON sd.rowid = search_documents_fts.rowid
             JOIN articles a ON a.id = sd.article_id
             WHERE search_documents_fts MATCH ?1
             ORDER BY score DESC, a.rowid ASC",
        )?;

        let hits = stmt
            .query_map([query.to_match_expression()], |row| {
                let article = Article::from_parts(
                    row.get(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                );
                Ok(SearchHit::new(article, row.get(3)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(
            query = query.raw(),
            profile = %query.profile(),
            hits = hits.len(),
            "full-text search"
        );
        Ok(hits)
    }
}

/// One row of the article/tag join; the tag is absent for untagged articles.
fn joined_row(row: &Row<'_>) -> rusqlite::Result<(Article, Option<Tag>)> {
    let article = Article::from_parts(
        row.get(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
    );
    let tag_id: Option<TagId> = row.get(3)?;
    let tag = match tag_id {
        Some(tag_id) => Some(Tag::from_parts(
            tag_id,
            *article.id(),
            row.get::<_, String>(4)?,
        )),
        None => None,
    };
    Ok((article, tag))
}

/// Folds consecutive join rows of the same article into one entry.
fn group_joined_rows(rows: Vec<(Article, Option<Tag>)>) -> Vec<ArticleWithTags> {
    let mut grouped: Vec<(Article, Vec<Tag>)> = Vec::new();
    for (article, tag) in rows {
        match grouped.last_mut() {
            Some((current, tags)) if current.id() == article.id() => tags.extend(tag),
            _ => grouped.push((article, tag.into_iter().collect())),
        }
    }
    grouped
        .into_iter()
        .map(|(article, tags)| ArticleWithTags::new(article, tags))
        .collect()
}
