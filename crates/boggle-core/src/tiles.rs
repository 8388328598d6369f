//! Board alphabet: which board characters stand for more than one letter.

use std::collections::BTreeMap;

/// Maps a board character to the literal it spells inside a word.
///
/// Characters without an entry spell themselves. The classic table has a
/// single entry, `q → "qu"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    literals: BTreeMap<char, String>,
}

impl TileSet {
    /// A table with no multi-letter tiles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard Boggle table: `q` is the "Qu" tile.
    pub fn classic() -> Self {
        let mut tiles = Self::empty();
        tiles.insert('q', "qu".to_string());
        tiles
    }

    /// Register `letter` as a tile spelling `literal`.
    ///
    /// An empty literal is ignored; it would make the tile a no-op step.
    pub fn insert(&mut self, letter: char, literal: String) {
        if !literal.is_empty() {
            self.literals.insert(letter, literal);
        }
    }

    /// The multi-letter literal for `letter`, if it has one.
    pub fn literal(&self, letter: char) -> Option<&str> {
        self.literals.get(&letter).map(String::as_str)
    }

    /// The letters a cell showing `letter` contributes to a word.
    pub fn spell(&self, letter: char) -> String {
        match self.literal(letter) {
            Some(literal) => literal.to_string(),
            None => letter.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_qu() {
        let tiles = TileSet::classic();
        assert_eq!(tiles.spell('q'), "qu");
        assert_eq!(tiles.spell('a'), "a");
        assert_eq!(tiles.len(), 1);
    }

    #[test]
    fn empty_spells_every_char_as_itself() {
        let tiles = TileSet::empty();
        assert_eq!(tiles.spell('q'), "q");
        assert!(tiles.is_empty());
    }

    #[test]
    fn insert_ignores_empty_literal() {
        let mut tiles = TileSet::empty();
        tiles.insert('x', String::new());
        assert_eq!(tiles.literal('x'), None);
    }
}
