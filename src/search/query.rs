//! Parsed full-text queries.

use super::LanguageProfile;
use thiserror::Error;

/// Reasons a query string cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query was empty or whitespace-only.
    #[error("search query is empty")]
    Empty,

    /// Nothing was left after tokenization and stop-word removal.
    #[error("query '{query}' has no searchable terms under the {profile} profile")]
    NoTerms {
        query: String,
        profile: LanguageProfile,
    },
}

/// A query string normalized into lexemes under a language profile.
///
/// Parsing happens entirely in memory, so a malformed query is rejected
/// before any database round trip. A document matches when it contains at
/// least one of the query's lexemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    profile: LanguageProfile,
    lexemes: Vec<String>,
}

impl TextQuery {
    /// Normalizes `raw` with `profile`.
    ///
    /// Duplicate lexemes are collapsed, keeping first-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for a blank query and
    /// [`QueryError::NoTerms`] when every word is a stop word or punctuation.
    pub fn parse(raw: &str, profile: LanguageProfile) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Empty);
        }

        let mut lexemes: Vec<String> = Vec::new();
        for lexeme in profile.normalize(raw) {
            if !lexemes.contains(&lexeme) {
                lexemes.push(lexeme);
            }
        }

        if lexemes.is_empty() {
            return Err(QueryError::NoTerms {
                query: raw.to_string(),
                profile,
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            profile,
            lexemes,
        })
    }

    /// Returns the query as the caller wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn profile(&self) -> LanguageProfile {
        self.profile
    }

    /// Returns the distinct lexemes the query searches for.
    pub fn lexemes(&self) -> &[String] {
        &self.lexemes
    }

    /// Renders an FTS5 `MATCH` expression: every lexeme as a quoted string,
    /// joined with `OR`.
    ///
    /// Quoting keeps FTS5 operators and column filters in user input inert.
    pub fn to_match_expression(&self) -> String {
        self.lexemes
            .iter()
            .map(|lexeme| format!("\"{}\"", lexeme.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}
