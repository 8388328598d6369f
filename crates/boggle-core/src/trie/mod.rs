//! Prefix index over the dictionary.
//!
//! `PrefixIndex` stores every legal word as a path of single-character edges
//! from the root. Each node stands for one prefix; a terminal node marks a
//! prefix that is itself a dictionary word. The index is built once and only
//! read afterwards, so one instance can back any number of searches.


use std::collections::HashMap;

use tracing::{debug, debug_span};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("no dictionary word continues with {0:?}")]
    NotFound(char),
}

#[derive(Debug, Default)]
pub struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

impl Node {
    /// Whether some dictionary word extends this prefix with `letter`.
    pub fn has_letter(&self, letter: char) -> bool {
        self.children.contains_key(&letter)
    }

    /// The child reached by `letter`.
    ///
    /// Callers are expected to check [`Node::has_letter`] first.
    pub fn advance(&self, letter: char) -> Result<&Node, IndexError> {
        self.children
            .get(&letter)
            .ok_or(IndexError::NotFound(letter))
    }

    /// Follow every character of `letters` in turn.
    ///
    /// Returns `None` as soon as one link of the chain is missing, so a
    /// multi-letter tile either matches in full or not at all.
    pub fn advance_chain(&self, letters: &str) -> Option<&Node> {
        letters.chars().try_fold(self, |node, letter| {
            if node.has_letter(letter) {
                node.advance(letter).ok()
            } else {
                None
            }
        })
    }

    /// True iff the prefix this node represents is a complete word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug)]
pub struct PrefixIndex {
    root: Node,
    word_count: usize,
    node_count: usize,
    longest_word: usize,
}

impl PrefixIndex {
    /// Build the index from a word list.
    ///
    /// Duplicate words collapse into one entry. Empty strings are skipped:
    /// the root never becomes terminal, so the empty word is never reported.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("build_index").entered();
        let mut index = Self {
            root: Node::default(),
            word_count: 0,
            node_count: 1,
            longest_word: 0,
        };
        let mut skipped = 0usize;
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            index.insert(word);
        }
        debug!(
            word_count = index.word_count,
            node_count = index.node_count,
            longest_word = index.longest_word,
            skipped
        );
        index
    }

    fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        let mut len = 0;
        for letter in word.chars() {
            len += 1;
            if !node.has_letter(letter) {
                self.node_count += 1;
            }
            node = node.children.entry(letter).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
            self.longest_word = self.longest_word.max(len);
        }
    }

    /// The node for the empty prefix.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .root
                .advance_chain(word)
                .is_some_and(Node::is_terminal)
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length in characters of the longest stored word.
    pub fn longest_word(&self) -> usize {
        self.longest_word
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
