//! Side-by-side comparison of expected answers and solver output.

use std::fmt::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// One line of the comparison. `None` marks a word present on one side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Row {
    pub fn is_match(&self) -> bool {
        self.expected.is_some() && self.expected == self.actual
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub rows: Vec<Row>,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

impl CheckReport {
    /// Sort both lists and align equal words on the same row.
    pub fn compare<E, A>(expected: E, actual: A) -> Self
    where
        E: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        let expected = sorted_unique(expected);
        let actual = sorted_unique(actual);

        let mut rows = Vec::with_capacity(expected.len().max(actual.len()));
        let mut missing = Vec::new();
        let mut unexpected = Vec::new();
        let mut e = expected.into_iter().peekable();
        let mut a = actual.into_iter().peekable();

        loop {
            let row = match (e.peek(), a.peek()) {
                (None, None) => break,
                (Some(x), Some(y)) if x == y => Row {
                    expected: e.next(),
                    actual: a.next(),
                },
                (Some(x), Some(y)) if x < y => Row {
                    expected: e.next(),
                    actual: None,
                },
                (Some(_), None) => Row {
                    expected: e.next(),
                    actual: None,
                },
                _ => Row {
                    expected: None,
                    actual: a.next(),
                },
            };
            match (&row.expected, &row.actual) {
                (Some(x), None) => missing.push(x.clone()),
                (None, Some(y)) => unexpected.push(y.clone()),
                _ => {}
            }
            rows.push(row);
        }

        Self {
            rows,
            missing,
            unexpected,
        }
    }

    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }

    pub fn matched(&self) -> usize {
        self.rows.iter().filter(|r| r.is_match()).count()
    }

    /// Text rendering: `expected - actual` per row, mismatches flagged with
    /// `!`, followed by a one-line summary.
    pub fn render(&self) -> String {
        let column = self
            .rows
            .iter()
            .filter_map(|r| r.expected.as_deref())
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for row in &self.rows {
            let expected = row.expected.as_deref().unwrap_or("");
            let actual = row.actual.as_deref().unwrap_or("");
            let pad = column.saturating_sub(expected.width());
            let flag = if row.is_match() { "" } else { "  !" };
            let _ = writeln!(out, "{expected}{:pad$} - {actual}{flag}", "");
        }
        if !self.rows.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{} matched, {} missing, {} unexpected",
            self.matched(),
            self.missing.len(),
            self.unexpected.len()
        );
        if self.passed() {
            out.push_str("All tests completed successfully.\n");
        } else {
            out.push_str("Tests completed with errors.\n");
        }
        out
    }
}

fn sorted_unique(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort();
    words.dedup();
    words
}
