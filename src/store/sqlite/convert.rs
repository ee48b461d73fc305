//! SQLite column conversions for domain types.

use crate::domain::{ArticleId, SearchDocumentId, TagId};
use crate::search::SearchVector;
use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};

// Ids are stored as their 26-character ULID text.
macro_rules! sql_text_id {
    ($($name:ident),+) => {
        $(
            impl ToSql for $name {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.to_string()))
                }
            }

            impl FromSql for $name {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|e| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

sql_text_id!(ArticleId, TagId, SearchDocumentId);

impl ToSql for SearchVector {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_index_text()))
    }
}

impl FromSql for SearchVector {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(SearchVector::from_index_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::LanguageProfile;
    use pretty_assertions::assert_eq;
    use rusqlite::Connection;

    #[test]
    fn ids_roundtrip_through_text_column() {
        let conn = Connection::open_in_memory().unwrap();
        let id = ArticleId::new();
        let back: ArticleId = conn
            .query_row("SELECT ?1", [&id], |row| row.get(0))
            .unwrap();
        assert_eq!(back, id);

        let text: String = conn
            .query_row("SELECT ?1", [&id], |row| row.get(0))
            .unwrap();
        assert_eq!(text, id.to_string());
    }

    #[test]
    fn malformed_id_fails_conversion() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<TagId> =
            conn.query_row("SELECT 'not-a-ulid'", [], |row| row.get(0));
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }

    #[test]
    fn search_vector_roundtrips() {
        let conn = Connection::open_in_memory().unwrap();
        let vector = SearchVector::from_text(LanguageProfile::Simple, "b a b");
        let back: SearchVector = conn
            .query_row("SELECT ?1", [&vector], |row| row.get(0))
            .unwrap();
        assert_eq!(back, vector);
    }
}
