//! Ladder catalogue loading utilities
//!
//! Provides functions to load ladders from files or from the embedded catalogue.

use super::{Ladder, LadderError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load ladders from a file
///
/// Blank lines and lines starting with `#` are skipped. Unlike the embedded
/// catalogue, a malformed line is an error naming the line number.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid ladder.
///
/// # Examples
/// ```no_run
/// use wordchain::ladders::loader::load_from_file;
///
/// let ladders = load_from_file("data/ladders.txt").unwrap();
/// println!("Loaded {} ladders", ladders.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Ladder>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    parse_lines(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Parse every ladder line in `content`
///
/// # Errors
///
/// Returns an error naming the first malformed line.
pub fn parse_lines(content: &str) -> Result<Vec<Ladder>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| Ladder::parse(line).with_context(|| format!("line {number}")))
        .collect()
}

/// Convert embedded ladder lines to Ladder values, skipping malformed lines
///
/// # Examples
/// ```
/// use wordchain::ladders::loader::ladders_from_slice;
/// use wordchain::ladders::LADDERS;
///
/// let ladders = ladders_from_slice(LADDERS);
/// assert_eq!(ladders.len(), LADDERS.len());
/// ```
#[must_use]
pub fn ladders_from_slice(slice: &[&str]) -> Vec<Ladder> {
    slice
        .iter()
        .filter_map(|&line| {
            Ladder::parse(line)
                .map_err(|err: LadderError| log::warn!("skipping ladder '{line}': {err}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladders_from_slice_converts_valid_lines() {
        let input = &["corn acorn adore", "dog cog cot cat", "hard heard hear pear"];
        let ladders = ladders_from_slice(input);

        // "corn acorn adore" skips a step
        assert_eq!(ladders.len(), 2);
        assert_eq!(ladders[0].start().text(), "DOG");
        assert_eq!(ladders[1].target().text(), "PEAR");
    }

    #[test]
    fn ladders_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(ladders_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_skips_comments_and_blanks() {
        let content = "# comment\n\ndog cog cot cat\n   \nlead load goad gold\n";
        let ladders = parse_lines(content).unwrap();
        assert_eq!(ladders.len(), 2);
    }

    #[test]
    fn parse_lines_reports_line_number() {
        let content = "dog cog cot cat\n\ncorn adore\n";
        let err = parse_lines(content).unwrap_err();
        assert_eq!(err.to_string(), "line 3");
    }

    #[test]
    fn load_from_embedded_ladders() {
        use crate::ladders::LADDERS;

        let ladders = ladders_from_slice(LADDERS);
        assert_eq!(ladders.len(), LADDERS.len());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("no/such/ladders.txt").is_err());
    }
}
