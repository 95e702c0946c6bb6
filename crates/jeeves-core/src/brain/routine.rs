//! Maintenance routines triggered by fixed phrases.
//!
//! A routine is recognized by a trigger phrase anywhere in the (lowercased)
//! input. When several triggers appear, the longest wins; equal lengths are
//! resolved by declaration order. A recognized routine always answers, even when
//! its arguments are malformed.

use tracing::{info, warn};

use crate::error::{ErrorCode, JeevesError, JeevesResult};
use crate::language::tagger::tokenize;
use crate::memory::Memory;
use crate::types::MemoryRegion;

/// The built-in routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// List the most frequently seen unknown words.
    CommonWords,
    /// Drop words from the new-words counter.
    ForgetWords,
    /// Put words on the ignore list.
    IgnoreWords,
    /// List the keys of a memory region.
    ShowMemory,
    /// Associate words to a reaction.
    MemorizeWord,
}

impl Routine {
    /// Declaration order, used to break ties between equally long triggers.
    pub const ALL: [Routine; 5] = [
        Routine::CommonWords,
        Routine::ForgetWords,
        Routine::IgnoreWords,
        Routine::ShowMemory,
        Routine::MemorizeWord,
    ];

    /// Phrase that starts the routine.
    pub fn trigger(&self) -> &'static str {
        match self {
            Routine::CommonWords => "did you learn",
            Routine::ForgetWords => "please forget ",
            Routine::IgnoreWords => "please ignore ",
            Routine::ShowMemory => "list all ",
            Routine::MemorizeWord => "please add ",
        }
    }

    /// Routines in matching order: longest trigger first, then declaration order.
    pub fn by_priority() -> [Routine; 5] {
        let mut routines = Self::ALL;
        // Stable sort keeps declaration order among equal lengths.
        routines.sort_by_key(|r| std::cmp::Reverse(r.trigger().len()));
        routines
    }

    /// Find the routine triggered by `text` and the text following its trigger.
    pub fn detect(text: &str) -> Option<(Routine, &str)> {
        Self::by_priority().into_iter().find_map(|routine| {
            text.split_once(routine.trigger())
                .map(|(_, rest)| (routine, rest))
        })
    }
}

/// Runs routines against Jeeves' memory.
#[derive(Clone)]
pub struct RoutineDispatcher {
    memory: Memory,
    common_words_limit: usize,
}

impl RoutineDispatcher {
    pub fn new(memory: Memory, common_words_limit: usize) -> Self {
        Self {
            memory,
            common_words_limit,
        }
    }

    /// Run the routine triggered by `text`, if any.
    ///
    /// Malformed routine input is answered with an explanation rather than an
    /// error; store failures are propagated.
    pub async fn dispatch(&self, text: &str) -> JeevesResult<Option<String>> {
        let Some((routine, rest)) = Routine::detect(text) else {
            return Ok(None);
        };
        info!(routine = ?routine, "Executing routine");

        match self.execute(routine, rest).await {
            Ok(reply) => Ok(Some(reply)),
            Err(JeevesError::InvalidRoutineInput {
                message,
                suggestion,
                ..
            }) => {
                warn!(routine = ?routine, "Invalid routine input: {}", message);
                let reply = match suggestion {
                    Some(hint) => format!("I couldn't do that: {}. {}", message, hint),
                    None => format!("I couldn't do that: {}", message),
                };
                Ok(Some(reply))
            }
            Err(err) => Err(err),
        }
    }

    /// Run one routine with the text that followed its trigger.
    pub async fn execute(&self, routine: Routine, rest: &str) -> JeevesResult<String> {
        match routine {
            Routine::CommonWords => self.common_words().await,
            Routine::ForgetWords => self.forget_words(rest).await,
            Routine::IgnoreWords => self.ignore_words(rest).await,
            Routine::ShowMemory => self.show_memory(rest).await,
            Routine::MemorizeWord => self.memorize_word(rest).await,
        }
    }

    async fn common_words(&self) -> JeevesResult<String> {
        let common = self.memory.common_words(self.common_words_limit).await?;
        if common.is_empty() {
            return Ok("I haven't learned any new words yet.".to_string());
        }
        let words: Vec<&str> = common.iter().map(|(word, _)| word.as_str()).collect();
        Ok(format!(
            "Here's a list of the most common words I learned: {}",
            words.join(", ")
        ))
    }

    async fn forget_words(&self, rest: &str) -> JeevesResult<String> {
        let words = parse_words(rest, "please forget <word>, <word>")?;
        self.memory.forget(&words, MemoryRegion::NewWords).await?;
        Ok(format!("I forgot these words: {}", words.join(", ")))
    }

    async fn ignore_words(&self, rest: &str) -> JeevesResult<String> {
        let words = parse_words(rest, "please ignore <word>, <word>")?;
        self.memory.ignore(&words).await?;
        Ok(format!("I'm now ignoring these words: {}", words.join(", ")))
    }

    async fn show_memory(&self, rest: &str) -> JeevesResult<String> {
        let region = MemoryRegion::parse_user(rest)?;
        let keys = self.memory.list_all(region).await?;
        Ok(format!("Here's a list of the {} I know: {}", region, keys.join(", ")))
    }

    async fn memorize_word(&self, rest: &str) -> JeevesResult<String> {
        const USAGE: &str = "please add <word>, <word> to <reaction>";

        let (words, target) = rest.split_once(" to ").ok_or_else(|| {
            JeevesError::routine_input_with_suggestion(
                ErrorCode::RoutineMissingSeparator,
                "I need to know which reaction to use",
                format!("Try: {}", USAGE),
            )
        })?;
        let words = parse_words(words, USAGE)?;
        let reaction = tokenize(target).first().map(|w| w.to_string()).ok_or_else(|| {
            JeevesError::routine_input_with_suggestion(
                ErrorCode::RoutineMissingReaction,
                "the reaction name is empty",
                format!("Try: {}", USAGE),
            )
        })?;

        self.memory.add_words(&words, &reaction).await?;
        Ok(format!(
            "I just associated word(s) {} to my reaction \"{}\".",
            words.join(", "),
            reaction
        ))
    }
}

/// Split a comma separated word list, dropping blanks and trailing punctuation.
fn parse_words(text: &str, usage: &str) -> JeevesResult<Vec<String>> {
    let words: Vec<String> = text
        .split(", ")
        .map(|w| w.trim().trim_end_matches(['.', '!', '?', ',']).trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Err(JeevesError::routine_input_with_suggestion(
            ErrorCode::RoutineMissingWords,
            "I didn't get which words you meant",
            format!("Try: {}", usage),
        ));
    }
    Ok(words)
}
