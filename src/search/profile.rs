//! Language profiles: tokenization, stop-word removal and stemming.

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rules used to turn free text into lexemes for a specific language.
///
/// Every profile splits text on non-alphanumeric characters and lowercases
/// the resulting words. `English` and `Russian` additionally drop stop words
/// and reduce each word to its Snowball stem, so `программирование` and
/// `программированию` index to the same lexeme.
///
/// # Examples
///
/// ```
/// use folio::search::LanguageProfile;
///
/// let profile: LanguageProfile = "russian".parse().unwrap();
/// assert_eq!(profile.normalize("Программирование и поиск"), vec!["программирован", "поиск"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProfile {
    /// Lowercased words, no stemming and no stop words.
    #[default]
    Simple,
    English,
    Russian,
}

/// Error returned when a profile name is not recognized.
#[derive(Debug, Clone, Error)]
#[error("unknown language profile '{0}' (expected one of: simple, english, russian)")]
pub struct ParseProfileError(String);

impl LanguageProfile {
    /// All supported profiles.
    pub const ALL: [LanguageProfile; 3] = [Self::Simple, Self::English, Self::Russian];

    /// Returns the profile name as used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::English => "english",
            Self::Russian => "russian",
        }
    }

    /// Normalizes free text into an ordered stream of lexemes.
    ///
    /// Stop words are removed before stemming. Word order is preserved, and a
    /// word that occurs twice yields its lexeme twice.
    pub fn normalize(self, text: &str) -> Vec<String> {
        let stemmer = self.stemmer();
        let stop_words = self.stop_words();

        words(text)
            .filter(|word| !stop_words.contains(&word.as_str()))
            .map(|word| match &stemmer {
                Some(stemmer) => stemmer.stem(&word).into_owned(),
                None => word,
            })
            .filter(|lexeme| !lexeme.is_empty())
            .collect()
    }

    fn stemmer(self) -> Option<Stemmer> {
        match self {
            Self::Simple => None,
            Self::English => Some(Stemmer::create(Algorithm::English)),
            Self::Russian => Some(Stemmer::create(Algorithm::Russian)),
        }
    }

    fn stop_words(self) -> &'static [&'static str] {
        match self {
            Self::Simple => &[],
            Self::English => ENGLISH_STOP_WORDS,
            Self::Russian => RUSSIAN_STOP_WORDS,
        }
    }
}

/// Splits text into lowercase words on any non-alphanumeric character.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

impl fmt::Display for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|profile| profile.name() == wanted)
            .ok_or_else(|| ParseProfileError(s.to_string()))
    }
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const RUSSIAN_STOP_WORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас",
    "нибудь", "уж", "вам", "ведь", "там", "потом", "себя", "ей", "может", "они", "тут", "где",
    "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем", "была", "сам", "чтоб", "без",
    "чего", "себе", "под", "будет", "ж", "тогда", "кто", "этот", "того", "потому", "этого",
    "какой", "ним", "здесь", "этом", "мой", "тем", "чтобы", "нее", "были", "куда", "зачем",
    "всех", "можно", "при", "об", "хоть", "после", "над", "тот", "через", "эти", "нас", "про",
    "всего", "них", "какая", "эту", "моя", "свою", "этой", "перед", "том", "такой", "им",
    "более", "всю", "между",
];
