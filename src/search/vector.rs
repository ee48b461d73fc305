//! Positional lexeme vectors derived from article content.

use super::LanguageProfile;
use std::collections::BTreeMap;
use std::fmt;

/// The searchable form of a document: its lexemes in positional order.
///
/// A vector is stored as its lexemes separated by single spaces, which the
/// full-text index tokenizes back into exactly the same terms. Repeated
/// lexemes are kept, so term frequency survives storage and drives ranking.
///
/// `Display` renders the familiar `'lexeme':1,3 'other':2` form with
/// 1-based positions, sorted by lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchVector {
    lexemes: Vec<String>,
}

impl SearchVector {
    /// Builds a vector from a single piece of text.
    pub fn from_text(profile: LanguageProfile, text: &str) -> Self {
        Self {
            lexemes: profile.normalize(text),
        }
    }

    /// Builds a vector from several pieces of text, numbering positions
    /// continuously across them.
    pub fn from_parts<'a>(
        profile: LanguageProfile,
        parts: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let lexemes = parts
            .into_iter()
            .flat_map(|part| profile.normalize(part))
            .collect();
        Self { lexemes }
    }

    /// Rebuilds a vector from its stored form.
    pub fn from_index_text(text: &str) -> Self {
        Self {
            lexemes: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Returns the stored form: lexemes in order, separated by spaces.
    pub fn to_index_text(&self) -> String {
        self.lexemes.join(" ")
    }

    /// Iterates lexemes in positional order, including repeats.
    pub fn lexemes(&self) -> impl Iterator<Item = &str> {
        self.lexemes.iter().map(String::as_str)
    }

    /// Returns each distinct lexeme with its 1-based positions.
    pub fn positions(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut map: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, lexeme) in self.lexemes.iter().enumerate() {
            map.entry(lexeme.as_str()).or_default().push(i + 1);
        }
        map
    }

    /// Returns how many times a lexeme occurs.
    pub fn frequency(&self, lexeme: &str) -> usize {
        self.lexemes.iter().filter(|l| *l == lexeme).count()
    }

    /// Returns true if the lexeme occurs at least once.
    pub fn contains(&self, lexeme: &str) -> bool {
        self.lexemes.iter().any(|l| l == lexeme)
    }

    /// Number of positions (lexeme occurrences) in the vector.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl fmt::Display for SearchVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (lexeme, positions) in self.positions() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            let positions: Vec<String> = positions.iter().map(usize::to_string).collect();
            write!(f, "'{}':{}", lexeme, positions.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_text_keeps_repeats() {
        let vector = SearchVector::from_text(LanguageProfile::Simple, "rust is rust");
        assert_eq!(vector.len(), 3);
        assert_eq!(vector.frequency("rust"), 2);
        assert_eq!(vector.frequency("is"), 1);
        assert_eq!(vector.frequency("go"), 0);
    }

    #[test]
    fn from_parts_numbers_positions_across_parts() {
        let vector =
            SearchVector::from_parts(LanguageProfile::Simple, ["alpha beta", "", "alpha"]);
        let positions = vector.positions();
        assert_eq!(positions["alpha"], vec![1, 3]);
        assert_eq!(positions["beta"], vec![2]);
    }

    #[test]
    fn display_renders_sorted_lexemes_with_positions() {
        let vector = SearchVector::from_text(LanguageProfile::Simple, "beta alpha beta");
        assert_eq!(vector.to_string(), "'alpha':2 'beta':1,3");
    }

    #[test]
    fn display_of_empty_vector_is_empty() {
        assert_eq!(SearchVector::default().to_string(), "");
    }

    #[test]
    fn index_text_survives_storage() {
        let vector = SearchVector::from_parts(
            LanguageProfile::Russian,
            ["Первая статья", "поиск", "программирование"],
        );
        let stored = vector.to_index_text();
        assert_eq!(SearchVector::from_index_text(&stored), vector);
    }

    #[test]
    fn russian_vector_contains_stemmed_tag() {
        let vector = SearchVector::from_parts(
            LanguageProfile::Russian,
            ["Первая статья", "программирование"],
        );
        let query = LanguageProfile::Russian.normalize("программирование");
        assert!(vector.contains(&query[0]));
    }

    #[test]
    fn lexemes_iterate_in_positional_order() {
        let vector = SearchVector::from_text(LanguageProfile::Simple, "c b a");
        let lexemes: Vec<&str> = vector.lexemes().collect();
        assert_eq!(lexemes, vec!["c", "b", "a"]);
    }

    #[test]
    fn empty_index_text_is_empty_vector() {
        let vector = SearchVector::from_index_text("   ");
        assert!(vector.is_empty());
    }
}
