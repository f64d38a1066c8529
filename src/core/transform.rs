//! Single-edit transformations between adjacent ladder words
//!
//! Two words are adjacent in a ladder when one letter was added, deleted, or
//! changed. [`step`] recovers which edit that was and where it happened.

use std::fmt;

/// Kind of single-letter edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Add,
    Delete,
    Change,
}

/// The edit that turns one word into the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: EditKind,
    /// 1-based position of the edit
    ///
    /// For `Add` this is the position of the new letter in the longer word,
    /// for `Delete` the position of the removed letter in the longer word.
    pub position: usize,
    /// Letter added or changed to; the removed letter for `Delete`
    pub letter: char,
}

impl Step {
    /// Position to highlight when displaying this edit: the edit position for
    /// a change, 0 for an add or delete
    #[inline]
    #[must_use]
    pub const fn change_position(self) -> usize {
        match self.kind {
            EditKind::Change => self.position,
            EditKind::Add | EditKind::Delete => 0,
        }
    }
}

/// The two words are not exactly one insertion, deletion, or substitution apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformError {
    pub from: String,
    pub to: String,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no single-edit relationship between '{}' and '{}'",
            self.from, self.to
        )
    }
}

impl std::error::Error for TransformError {}

/// Find the single edit that turns `from` into `to`
///
/// Letters compare case-insensitively. When the edit position is ambiguous
/// (a doubled letter added or removed) the last position of the run is reported.
///
/// # Errors
/// Returns `TransformError` when the words are identical, differ in length by
/// more than one, or differ in more than one place.
///
/// # Examples
/// ```
/// use wordchain::core::{EditKind, step};
///
/// let add = step("CORN", "ACORN").unwrap();
/// assert_eq!(add.kind, EditKind::Add);
/// assert_eq!(add.position, 1);
///
/// let change = step("ACORN", "ADORN").unwrap();
/// assert_eq!(change.kind, EditKind::Change);
/// assert_eq!(change.position, 2);
/// assert_eq!(change.letter, 'D');
///
/// assert!(step("CORN", "ADORE").is_err());
/// ```
pub fn step(from: &str, to: &str) -> Result<Step, TransformError> {
    let a = from.as_bytes();
    let b = to.as_bytes();
    let error = || TransformError {
        from: from.to_string(),
        to: to.to_string(),
    };

    if a.len() == b.len() {
        let mut diffs = a
            .iter()
            .zip(b)
            .enumerate()
            .filter(|(_, (x, y))| !x.eq_ignore_ascii_case(y));
        return match (diffs.next(), diffs.next()) {
            (Some((i, (_, &letter))), None) => Ok(Step {
                kind: EditKind::Change,
                position: i + 1,
                letter: char::from(letter.to_ascii_uppercase()),
            }),
            _ => Err(error()),
        };
    }

    let (shorter, longer, kind) = if b.len() == a.len() + 1 {
        (a, b, EditKind::Add)
    } else if a.len() == b.len() + 1 {
        (b, a, EditKind::Delete)
    } else {
        return Err(error());
    };

    let i = first_difference(shorter, longer);
    if !shorter[i..].eq_ignore_ascii_case(&longer[i + 1..]) {
        return Err(error());
    }

    Ok(Step {
        kind,
        position: i + 1,
        letter: char::from(longer[i].to_ascii_uppercase()),
    })
}

/// Index of the first mismatch, or the shorter length when one is a prefix
fn first_difference(shorter: &[u8], longer: &[u8]) -> usize {
    shorter
        .iter()
        .zip(longer)
        .position(|(x, y)| !x.eq_ignore_ascii_case(y))
        .unwrap_or(shorter.len())
}
