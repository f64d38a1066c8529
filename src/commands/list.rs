//! List command
//!
//! Summarises a ladder catalogue.

use crate::game::KnownLadders;

/// Summary of a ladder catalogue
pub struct ListResult {
    pub ladders: usize,
    pub words: usize,
    pub shortest: usize,
    pub longest: usize,
}

/// Count the ladders and distinct words in `finder`
#[must_use]
pub fn list_ladders(finder: &KnownLadders) -> ListResult {
    let steps = finder.ladders().iter().map(crate::ladders::Ladder::steps);
    ListResult {
        ladders: finder.ladders().len(),
        words: finder.word_count(),
        shortest: steps.clone().min().unwrap_or(0),
        longest: steps.max().unwrap_or(0),
    }
}
