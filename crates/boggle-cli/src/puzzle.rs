//! Puzzle files: a board, its expected answers, and the dictionary.
//!
//! The three sections are separated by runs of two or more blank lines:
//!
//! ```text
//! cats
//! qoxe
//!
//!
//! cat
//! cats
//!
//!
//! cat
//! cats
//! dog
//! ```
//!
//! Within the answer and dictionary sections every non-blank line is one
//! word; single blank lines are ignored. CRLF line endings are accepted.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("expected 3 sections (board, answers, dictionary), found {0}")]
    Sections(usize),

    #[error("board is empty")]
    EmptyBoard,

    #[error("board row {row} has {actual} letters, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Board letters as written: one or more rows of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardText {
    rows: Vec<String>,
}

impl BoardText {
    /// Validate rows of letters. Whitespace inside a row is dropped.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<String> = rows
            .into_iter()
            .map(|r| r.as_ref().split_whitespace().collect::<String>())
            .filter(|r| !r.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(PuzzleError::EmptyBoard);
        };
        let expected = first.chars().count();
        for (i, row) in rows.iter().enumerate().skip(1) {
            let actual = row.chars().count();
            if actual != expected {
                return Err(PuzzleError::RaggedBoard {
                    row: i + 1,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self { rows })
    }

    /// All letters in row-major order.
    pub fn letters(&self) -> String {
        self.rows.concat()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Board dimensions as `(width, height)`.
    ///
    /// A board written as several rows has its own shape; a single line of
    /// letters takes `fallback`. Explicit overrides win over both.
    pub fn dimensions(
        &self,
        width: Option<usize>,
        height: Option<usize>,
        fallback: (usize, usize),
    ) -> (usize, usize) {
        let (w, h) = if self.rows.len() > 1 {
            (self.rows[0].chars().count(), self.rows.len())
        } else {
            fallback
        };
        (width.unwrap_or(w), height.unwrap_or(h))
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub board: BoardText,
    pub answers: Vec<String>,
    pub words: Vec<String>,
}

impl Puzzle {
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let sections = split_sections(text);
        let [board, answers, words] = <[Vec<&str>; 3]>::try_from(sections)
            .map_err(|sections| PuzzleError::Sections(sections.len()))?;

        Ok(Self {
            board: BoardText::from_rows(board)?,
            answers: word_lines(answers),
            words: word_lines(words),
        })
    }
}

/// Read a plain word list: one word per non-blank line.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, PuzzleError> {
    let text = fs::read_to_string(path)?;
    Ok(word_lines(text.lines()))
}

fn word_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split into sections on runs of two or more blank lines.
///
/// Leading and trailing blank lines never produce empty sections.
fn split_sections(text: &str) -> Vec<Vec<&str>> {
    let mut sections: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    // `lines()` strips a trailing '\r' as well as '\n'.
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run >= 2 && !current.is_empty() {
            sections.push(std::mem::take(&mut current));
        }
        blank_run = 0;
        current.push(line);
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "cats\nqoxe\n\n\ncat\n\ncats\n\n\ncat\ncats\ndog\n";

    #[test]
    fn parse_three_sections() {
        let p = Puzzle::parse(SAMPLE).unwrap();
        assert_eq!(p.board.rows(), ["cats", "qoxe"]);
        assert_eq!(p.board.letters(), "catsqoxe");
        assert_eq!(p.answers, ["cat", "cats"]);
        assert_eq!(p.words, ["cat", "cats", "dog"]);
    }

    #[test]
    fn parse_crlf() {
        let text = SAMPLE.replace('\n', "\r\n");
        let p = Puzzle::parse(&text).unwrap();
        assert_eq!(p.board.letters(), "catsqoxe");
        assert_eq!(p.words.len(), 3);
        assert!(p.words.iter().all(|w| !w.ends_with('\r')));
    }

    #[test]
    fn long_blank_runs_are_one_separator() {
        let text = "\n\nab\n\n\n\n\nab\n\n\n\nab\nba\n\n\n";
        let p = Puzzle::parse(text).unwrap();
        assert_eq!(p.board.letters(), "ab");
        assert_eq!(p.answers, ["ab"]);
        assert_eq!(p.words, ["ab", "ba"]);
    }

    #[test]
    fn wrong_section_count() {
        let err = Puzzle::parse("abcd\n\n\ncat\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Sections(2)));
        let err = Puzzle::parse("").unwrap_err();
        assert!(matches!(err, PuzzleError::Sections(0)));
    }

    #[test]
    fn ragged_board_rejected() {
        let err = Puzzle::parse("abc\nde\n\n\nx\n\n\nx\n").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RaggedBoard {
                row: 2,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn board_whitespace_dropped() {
        let b = BoardText::from_rows(["c a t s", " d o g s "]).unwrap();
        assert_eq!(b.letters(), "catsdogs");
    }

    #[test]
    fn empty_board_rejected() {
        let err = BoardText::from_rows(["", "  "]).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyBoard));
    }

    #[test]
    fn dimensions_from_rows() {
        let b = BoardText::from_rows(["abc", "def"]).unwrap();
        assert_eq!(b.dimensions(None, None, (4, 4)), (3, 2));
        assert_eq!(b.dimensions(Some(2), Some(3), (4, 4)), (2, 3));
    }

    #[test]
    fn dimensions_single_line_uses_fallback() {
        let b = BoardText::from_rows(["abcdefghijklmnop"]).unwrap();
        assert_eq!(b.dimensions(None, None, (4, 4)), (4, 4));
        assert_eq!(b.dimensions(Some(8), Some(2), (4, 4)), (8, 2));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let p = Puzzle::load(file.path()).unwrap();
        assert_eq!(p.answers.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let err = Puzzle::load(Path::new("/nonexistent/puzzle.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }

    #[test]
    fn read_word_list_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cat\r\n\r\n  dog  \n\n").unwrap();
        let words = read_word_list(file.path()).unwrap();
        assert_eq!(words, ["cat", "dog"]);
    }
}
