//! Memory regions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{ErrorCode, JeevesError, JeevesResult};

/// One of the four logical partitions of the memory store.
///
/// Region names accept both the hyphenated and the space separated spelling so
/// that `list all new words` and `list all new-words` reach the same region.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum MemoryRegion {
    /// Known word -> reaction name.
    #[strum(to_string = "words")]
    Words,
    /// Reaction name -> list of responses.
    #[strum(to_string = "reactions")]
    Reactions,
    /// Words excluded from keyword search.
    #[strum(to_string = "ignored-words", serialize = "ignored words", serialize = "ignored_words")]
    IgnoredWords,
    /// Unknown word -> occurrence counter.
    #[strum(to_string = "new-words", serialize = "new words", serialize = "new_words")]
    NewWords,
}

impl MemoryRegion {
    /// Stable index of the region, used as the logical database number by
    /// backends that partition by database.
    pub fn index(&self) -> u8 {
        match self {
            Self::Words => 0,
            Self::Reactions => 1,
            Self::IgnoredWords => 2,
            Self::NewWords => 3,
        }
    }

    /// Canonical names of every region.
    pub fn all_names() -> Vec<&'static str> {
        Self::iter().map(|r| r.into()).collect()
    }

    /// Parse a region name typed by a user.
    pub fn parse_user(name: &str) -> JeevesResult<Self> {
        let trimmed = name.trim().trim_end_matches(|c: char| c.is_ascii_punctuation());
        trimmed.parse().map_err(|_| {
            JeevesError::routine_input_with_suggestion(
                ErrorCode::RoutineUnknownRegion,
                format!("I don't have a memory called '{}'", trimmed),
                format!("Try one of: {}", Self::all_names().join(", ")),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_spaced_and_hyphenated_names() {
        assert_eq!(MemoryRegion::parse_user("new words").unwrap(), MemoryRegion::NewWords);
        assert_eq!(MemoryRegion::parse_user("new-words").unwrap(), MemoryRegion::NewWords);
        assert_eq!(
            MemoryRegion::parse_user("Ignored Words").unwrap(),
            MemoryRegion::IgnoredWords
        );
        assert_eq!(MemoryRegion::parse_user("words?").unwrap(), MemoryRegion::Words);
    }

    #[test]
    fn test_parse_rejects_unknown_region() {
        let err = MemoryRegion::parse_user("secrets").unwrap_err();
        assert_eq!(err.code(), ErrorCode::RoutineUnknownRegion);
        assert!(err.suggestion().unwrap().contains("ignored-words"));
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(MemoryRegion::IgnoredWords.to_string(), "ignored-words");
        assert_eq!(MemoryRegion::all_names(), vec!["words", "reactions", "ignored-words", "new-words"]);
    }

    #[test]
    fn test_indexes_are_distinct() {
        let mut indexes: Vec<u8> = MemoryRegion::iter().map(|r| r.index()).collect();
        indexes.dedup();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }
}
