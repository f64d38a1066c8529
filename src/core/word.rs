//! Word ladder word representation
//!
//! A Word is a validated sequence of 3 to 6 ASCII letters, stored upper-case.

use std::fmt;

/// Shortest word allowed in a ladder
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word allowed in a ladder
pub const MAX_WORD_LENGTH: usize = 6;

/// A word that can appear in a ladder
///
/// Comparison is case-insensitive because the text is normalised on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Word must be {MIN_WORD_LENGTH} to {MAX_WORD_LENGTH} letters, got {len}"
            ),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 3..=6
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordchain::core::Word;
    ///
    /// let word = Word::new("acorn").unwrap();
    /// assert_eq!(word.text(), "ACORN");
    ///
    /// assert!(Word::new("at").is_err());
    /// assert!(Word::new("c0rn").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a 0-based position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Word with the letter at the 0-based `position` replaced
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if `letter` is not alphabetic or
    /// `position` is out of range.
    pub fn with_letter(&self, position: usize, letter: char) -> Result<Self, WordError> {
        if position >= self.len() || !letter.is_ascii_alphabetic() {
            return Err(WordError::InvalidCharacters);
        }
        let mut text = self.text.clone();
        text.replace_range(position..=position, &letter.to_string());
        Self::new(text)
    }

    /// Word with the letter at the 0-based `position` removed
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the result would be too short and
    /// `WordError::InvalidCharacters` if `position` is out of range.
    pub fn without_letter(&self, position: usize) -> Result<Self, WordError> {
        if position >= self.len() {
            return Err(WordError::InvalidCharacters);
        }
        let mut text = self.text.clone();
        text.remove(position);
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
