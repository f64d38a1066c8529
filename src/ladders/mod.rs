//! Word ladder catalogue
//!
//! Provides the embedded ladders compiled into the binary, plus parsing and
//! file loading. A ladder line lists its words start first, separated by
//! whitespace or commas. A trailing `*` marks a valid but uncommon word.

mod embedded;
pub mod loader;

pub use embedded::{LADDERS, LADDERS_COUNT};

use crate::core::{TransformError, Word, WordError, step};
use std::fmt;

/// Marks an uncommon word in a ladder line
pub const UNCOMMON_MARK: char = '*';

/// A known word ladder: adjacent words are one edit apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
    uncommon: Vec<Word>,
}

/// Error type for malformed ladder lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Fewer than two words
    TooShort(usize),
    InvalidWord { text: String, source: WordError },
    NotOneStep(TransformError),
    /// The same word appears twice
    Repeated(Word),
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(count) => {
                write!(f, "A ladder needs at least 2 words, got {count}")
            }
            Self::InvalidWord { text, source } => write!(f, "Invalid word '{text}': {source}"),
            Self::NotOneStep(err) => write!(f, "Broken ladder: {err}"),
            Self::Repeated(word) => write!(f, "Word '{word}' appears twice in the ladder"),
        }
    }
}

impl std::error::Error for LadderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::NotOneStep(err) => Some(err),
            Self::TooShort(_) | Self::Repeated(_) => None,
        }
    }
}

impl Ladder {
    /// Parse a ladder line
    ///
    /// # Errors
    /// Returns `LadderError` if a word is invalid, a word repeats, fewer than
    /// two words are given, or two adjacent words are not one edit apart.
    ///
    /// # Examples
    /// ```
    /// use wordchain::ladders::Ladder;
    ///
    /// let ladder = Ladder::parse("corn acorn adorn adore").unwrap();
    /// assert_eq!(ladder.start().text(), "CORN");
    /// assert_eq!(ladder.target().text(), "ADORE");
    ///
    /// assert!(Ladder::parse("corn adore").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, LadderError> {
        let mut words: Vec<Word> = Vec::new();
        let mut uncommon = Vec::new();

        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let (text, is_uncommon) = match token.strip_suffix(UNCOMMON_MARK) {
                Some(text) => (text, true),
                None => (token, false),
            };
            let word = Word::new(text).map_err(|source| LadderError::InvalidWord {
                text: text.to_string(),
                source,
            })?;
            if words.contains(&word) {
                return Err(LadderError::Repeated(word));
            }
            if let Some(previous) = words.last() {
                step(previous.text(), word.text()).map_err(LadderError::NotOneStep)?;
            }
            if is_uncommon {
                uncommon.push(word.clone());
            }
            words.push(word);
        }

        if words.len() < 2 {
            return Err(LadderError::TooShort(words.len()));
        }

        Ok(Self { words, uncommon })
    }

    /// All words, start first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.words[0]
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Number of moves from start to target
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len() - 1
    }

    /// Words marked uncommon in the catalogue
    #[must_use]
    pub fn uncommon(&self) -> &[Word] {
        &self.uncommon
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
