//! A word as it sits in a ladder row
//!
//! Rows normally hold a complete word. During a two-step add move, and when a
//! row previews the letter about to change, the row holds the word's letters
//! plus one empty slot (the hole). The hole is an explicit index rather than a
//! marker character, so a hole can never be confused with a real letter.

use super::word::{MAX_WORD_LENGTH, Word, WordError};
use std::fmt;

/// Character used when a hole is rendered as text
pub const HOLE_CHAR: char = '?';

/// Letters plus an optional hole slot
///
/// `letters` never contains the hole. When `hole` is `Some(i)`, the row is
/// `letters.len() + 1` slots wide and slot `i` (0-based) is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LadderWord {
    letters: String,
    hole: Option<usize>,
}

impl LadderWord {
    /// A complete word with no hole
    #[must_use]
    pub fn plain(word: &Word) -> Self {
        Self {
            letters: word.text().to_string(),
            hole: None,
        }
    }

    /// `word` with an empty slot inserted before the 0-based `index`
    ///
    /// `index == word.len()` appends the slot at the end.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the row would be wider than the
    /// longest allowed word, and `WordError::InvalidCharacters` if `index` is
    /// past the end.
    pub fn with_hole(word: &Word, index: usize) -> Result<Self, WordError> {
        if index > word.len() {
            return Err(WordError::InvalidCharacters);
        }
        if word.len() + 1 > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(word.len() + 1));
        }
        Ok(Self {
            letters: word.text().to_string(),
            hole: Some(index),
        })
    }

    /// `word` with the letter at the 0-based `index` blanked out
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if `index` is out of range.
    pub fn blanked(word: &Word, index: usize) -> Result<Self, WordError> {
        if index >= word.len() {
            return Err(WordError::InvalidCharacters);
        }
        let mut letters = word.text().to_string();
        letters.remove(index);
        Ok(Self {
            letters,
            hole: Some(index),
        })
    }

    /// Letters excluding the hole
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// 0-based index of the hole, if any
    #[inline]
    #[must_use]
    pub const fn hole_index(&self) -> Option<usize> {
        self.hole
    }

    #[inline]
    #[must_use]
    pub const fn has_hole(&self) -> bool {
        self.hole.is_some()
    }

    /// Number of slots in the row, counting the hole
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len() + usize::from(self.hole.is_some())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Letter shown in the 0-based `slot`, `None` for the hole or out of range
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<char> {
        let letter_index = match self.hole {
            Some(hole) if slot == hole => return None,
            Some(hole) if slot > hole => slot - 1,
            _ => slot,
        };
        self.letters.as_bytes().get(letter_index).map(|&b| char::from(b))
    }

    /// The complete word, when there is no hole
    #[must_use]
    pub fn as_word(&self) -> Option<Word> {
        if self.hole.is_some() {
            return None;
        }
        Word::new(self.letters.as_str()).ok()
    }

    /// Fill the hole with `letter`
    ///
    /// A row without a hole has nothing to fill and yields
    /// `WordError::InvalidCharacters`.
    ///
    /// # Errors
    /// Returns `WordError` if the filled row is not a valid word.
    pub fn fill(&self, letter: char) -> Result<Word, WordError> {
        let Some(hole) = self.hole else {
            return Err(WordError::InvalidCharacters);
        };
        if !letter.is_ascii_alphabetic() {
            return Err(WordError::InvalidCharacters);
        }
        let mut text = self.letters.clone();
        text.insert(hole, letter);
        Word::new(text)
    }
}

impl From<&Word> for LadderWord {
    fn from(word: &Word) -> Self {
        Self::plain(word)
    }
}

impl fmt::Display for LadderWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hole {
            None => write!(f, "{}", self.letters),
            Some(hole) => write!(
                f,
                "{}{HOLE_CHAR}{}",
                &self.letters[..hole],
                &self.letters[hole..]
            ),
        }
    }
}
