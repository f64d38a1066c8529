//! Shortest remaining paths
//!
//! The game needs two things from a dictionary: whether a word exists, and
//! the shortest ladder from a word to the target. [`PathFinder`] is that seam;
//! [`KnownLadders`] answers from a catalogue of known ladders.

use crate::core::Word;
use crate::ladders::Ladder;
use rustc_hash::{FxHashMap, FxHashSet};

/// Dictionary and shortest-path oracle used by the game
pub trait PathFinder {
    /// Whether `word` may be played
    fn is_word(&self, word: &Word) -> bool;

    /// Shortest ladder from `from` to `to`, both included
    ///
    /// Returns `None` when no ladder is known.
    fn shortest_path(&self, from: &Word, to: &Word) -> Option<Vec<Word>>;

    /// Whether `word` is a common word; uncommon words that keep the solution
    /// length are rated as Scrabble moves
    fn is_common(&self, word: &Word) -> bool {
        let _ = word;
        true
    }
}

impl<P: PathFinder + ?Sized> PathFinder for &P {
    fn is_word(&self, word: &Word) -> bool {
        (**self).is_word(word)
    }

    fn shortest_path(&self, from: &Word, to: &Word) -> Option<Vec<Word>> {
        (**self).shortest_path(from, to)
    }

    fn is_common(&self, word: &Word) -> bool {
        (**self).is_common(word)
    }
}

/// Path finder over a fixed set of ladders
///
/// A path is any contiguous run of a single known ladder, walked in either
/// direction. The dictionary is every word that appears in some ladder.
#[derive(Debug, Clone, Default)]
pub struct KnownLadders {
    ladders: Vec<Ladder>,
    /// word -> (ladder index, position in ladder)
    positions: FxHashMap<Word, Vec<(usize, usize)>>,
    uncommon: FxHashSet<Word>,
}

impl KnownLadders {
    #[must_use]
    pub fn new(ladders: Vec<Ladder>) -> Self {
        let mut positions: FxHashMap<Word, Vec<(usize, usize)>> = FxHashMap::default();
        let mut uncommon = FxHashSet::default();

        for (ladder_index, ladder) in ladders.iter().enumerate() {
            for (position, word) in ladder.words().iter().enumerate() {
                positions
                    .entry(word.clone())
                    .or_default()
                    .push((ladder_index, position));
            }
            uncommon.extend(ladder.uncommon().iter().cloned());
        }

        Self {
            ladders,
            positions,
            uncommon,
        }
    }

    #[must_use]
    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    /// Find the known ladder running from `start` to `target`
    #[must_use]
    pub fn find(&self, start: &Word, target: &Word) -> Option<&Ladder> {
        self.ladders
            .iter()
            .find(|l| l.start() == start && l.target() == target)
    }

    /// Number of distinct words known
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.positions.len()
    }
}

impl PathFinder for KnownLadders {
    fn is_word(&self, word: &Word) -> bool {
        self.positions.contains_key(word)
    }

    fn shortest_path(&self, from: &Word, to: &Word) -> Option<Vec<Word>> {
        if from == to {
            return self.is_word(from).then(|| vec![from.clone()]);
        }

        let from_positions = self.positions.get(from)?;
        let to_positions = self.positions.get(to)?;

        from_positions
            .iter()
            .flat_map(move |&(ladder, i)| {
                to_positions
                    .iter()
                    .filter(move |&&(other, _)| other == ladder)
                    .map(move |&(_, j)| (ladder, i, j))
            })
            .min_by_key(|&(ladder, i, j)| (i.abs_diff(j), ladder))
            .map(|(ladder, i, j)| {
                let words = self.ladders[ladder].words();
                if i <= j {
                    words[i..=j].to_vec()
                } else {
                    words[j..=i].iter().rev().cloned().collect()
                }
            })
    }

    fn is_common(&self, word: &Word) -> bool {
        !self.uncommon.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(path: &[Word]) -> Vec<&str> {
        path.iter().map(Word::text).collect()
    }

    fn finder() -> KnownLadders {
        KnownLadders::new(vec![
            Ladder::parse("fate fat sat sap sop").unwrap(),
            Ladder::parse("sag* sap sop").unwrap(),
            Ladder::parse("corn acorn adorn adore").unwrap(),
        ])
    }

    #[test]
    fn dictionary_is_every_ladder_word() {
        let finder = finder();
        assert!(finder.is_word(&word("acorn")));
        assert!(finder.is_word(&word("sag")));
        assert!(!finder.is_word(&word("bat")));
        assert_eq!(finder.word_count(), 10);
    }

    #[test]
    fn forward_segment() {
        let path = finder().shortest_path(&word("fat"), &word("sop")).unwrap();
        assert_eq!(texts(&path), ["FAT", "SAT", "SAP", "SOP"]);
    }

    #[test]
    fn reverse_segment() {
        let path = finder().shortest_path(&word("adore"), &word("acorn")).unwrap();
        assert_eq!(texts(&path), ["ADORE", "ADORN", "ACORN"]);
    }

    #[test]
    fn shortest_of_several_ladders() {
        let path = finder().shortest_path(&word("sap"), &word("sop")).unwrap();
        assert_eq!(texts(&path), ["SAP", "SOP"]);

        let from_sag = finder().shortest_path(&word("sag"), &word("sop")).unwrap();
        assert_eq!(texts(&from_sag), ["SAG", "SAP", "SOP"]);
    }

    #[test]
    fn same_word_is_trivial_path() {
        let path = finder().shortest_path(&word("sop"), &word("sop")).unwrap();
        assert_eq!(texts(&path), ["SOP"]);
    }

    #[test]
    fn unrelated_words_have_no_path() {
        assert!(finder().shortest_path(&word("corn"), &word("sop")).is_none());
        assert!(finder().shortest_path(&word("bat"), &word("sop")).is_none());
    }

    #[test]
    fn uncommon_words() {
        let finder = finder();
        assert!(!finder.is_common(&word("sag")));
        assert!(finder.is_common(&word("sap")));
    }

    #[test]
    fn find_ladder_by_endpoints() {
        let finder = finder();
        assert!(finder.find(&word("corn"), &word("adore")).is_some());
        assert!(finder.find(&word("adore"), &word("corn")).is_none());
    }
}
