//! Board search: depth-first traversal pruned by the prefix index.
//!
//! The solver owns the index and nothing else. Everything a single search
//! mutates (visited cells, the word being spelled, the words found so far)
//! lives in a [`SearchState`] created per call, so `solve_board` takes
//! `&self` and concurrent calls on one solver need no locking.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::board::Board;
use crate::settings::settings;
use crate::tiles::TileSet;
use crate::trie::{Node, PrefixIndex};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid input: a {width}x{height} board needs width*height letters, got {letters}")]
    InvalidInput {
        width: usize,
        height: usize,
        letters: usize,
    },

    #[error("no dictionary configured (call set_legal_words first)")]
    NotConfigured,
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub tiles: TileSet,
    /// Words shorter than this many characters are not reported.
    pub min_word_length: usize,
}

impl SolverConfig {
    /// Configuration taken from the global [`settings`].
    pub fn from_settings() -> Self {
        let s = settings();
        Self {
            tiles: s.tiles().clone(),
            min_word_length: s.search.min_word_length,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tiles: TileSet::classic(),
            min_word_length: 1,
        }
    }
}

#[derive(Debug)]
pub struct Solver {
    index: Option<PrefixIndex>,
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// A solver configured from the global settings, with no dictionary yet.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::from_settings())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            index: None,
            config,
        }
    }

    /// Build the prefix index from the legal words, replacing any earlier one.
    ///
    /// Words use the board's alphabet, with multi-letter tiles spelled out in
    /// full (`"quiz"`, not `"qiz"`).
    pub fn set_legal_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.index = Some(PrefixIndex::build(words));
    }

    /// The index built by the last `set_legal_words` call.
    pub fn index(&self) -> Option<&PrefixIndex> {
        self.index.as_ref()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every legal word on a `width` x `height` board given row-major.
    pub fn solve_board(
        &self,
        width: usize,
        height: usize,
        letters: &str,
    ) -> Result<HashSet<String>, SolveError> {
        let _span = debug_span!("solve_board", width, height).entered();
        let index = self.index.as_ref().ok_or(SolveError::NotConfigured)?;
        let board = Board::new(width, height, letters, &self.config.tiles)?;
        let found = self.search_board(index, &board);
        debug!(found = found.len());
        Ok(found)
    }

    /// Find every legal word on an already-built board.
    pub fn solve(&self, board: &Board) -> Result<HashSet<String>, SolveError> {
        let index = self.index.as_ref().ok_or(SolveError::NotConfigured)?;
        Ok(self.search_board(index, board))
    }

    fn search_board(&self, index: &PrefixIndex, board: &Board) -> HashSet<String> {
        let mut state = SearchState::new(board, self.config.min_word_length);
        let root = index.root();
        for cell in 0..board.len() {
            state.step(cell, root);
        }
        state.found
    }
}

/// Per-call traversal state.
struct SearchState<'b> {
    board: &'b Board,
    min_word_length: usize,
    /// Cells on the path currently being spelled.
    visited: Vec<bool>,
    word: String,
    found: HashSet<String>,
}

impl<'b> SearchState<'b> {
    fn new(board: &'b Board, min_word_length: usize) -> Self {
        Self {
            board,
            min_word_length,
            visited: vec![false; board.len()],
            word: String::new(),
            found: HashSet::new(),
        }
    }

    /// Extend the path onto `cell` from `node`, search, then undo.
    ///
    /// Does nothing if the cell is already on the path, lies outside the
    /// board, or its tile does not continue any dictionary word.
    fn step(&mut self, cell: usize, node: &Node) {
        let board = self.board;
        let Some(tile) = board.tile(cell) else {
            return;
        };
        if self.visited.get(cell).copied().unwrap_or(true) {
            return;
        }
        let Some(next) = node.advance_chain(tile) else {
            return;
        };

        let mark = self.word.len();
        self.word.push_str(tile);
        self.visited[cell] = true;

        self.search(cell, next);

        self.visited[cell] = false;
        self.word.truncate(mark);
    }

    fn search(&mut self, cell: usize, node: &Node) {
        if node.is_terminal() && self.word.chars().count() >= self.min_word_length {
            self.found.insert(self.word.clone());
        }
        if node.is_leaf() {
            return;
        }
        let board = self.board;
        for neighbour in board.neighbours(cell) {
            self.step(neighbour, node);
        }
    }
}
