//! ULID-based identifiers for articles, tags and search documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use ulid::Ulid;

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseIdError {
    value: String,
    reason: String,
}

impl ParseIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ULID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Declares a ULID newtype with parsing, display and serde support.
///
/// ULIDs are 26-character Crockford Base32 strings. They are globally unique
/// and sort lexicographically in creation order, which is what lets the store
/// keep them as plain `TEXT` primary keys.
macro_rules! ulid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a new identifier stamped with the current time.
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Creates an identifier from a specific datetime (useful for testing).
            pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
                let system_time: SystemTime = datetime.into();
                Self(Ulid::from_datetime(system_time))
            }

            /// Returns the instant encoded in the identifier.
            pub fn timestamp(&self) -> DateTime<Utc> {
                DateTime::from_timestamp_millis(self.0.timestamp_ms() as i64).unwrap_or_default()
            }

            /// Returns the 10-character timestamp prefix, handy for short display.
            pub fn prefix(&self) -> String {
                self.0.to_string()[..10].to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(\"{}\")"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ulid::from_string(s).map(Self).map_err(|e| ParseIdError {
                    value: s.to_string(),
                    reason: e.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

ulid_id!(
    /// Unique identifier of an article.
    ArticleId
);

ulid_id!(
    /// Unique identifier of a tag row.
    TagId
);

ulid_id!(
    /// Unique identifier of a search document.
    SearchDocumentId
);
