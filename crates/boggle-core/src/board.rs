//! Letter grid with 8-connected adjacency.
//!
//! Layout: `height` rows of `width` columns, flattened row-major, so cell
//! `(row, col)` sits at index `row * width + col`. Every cell holds the
//! literal its tile contributes to a word (usually one letter, `"qu"` for
//! the classic Qu tile).

use crate::solver::SolveError;
use crate::tiles::TileSet;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<String>,
}

impl Board {
    /// Build a board from `width * height` characters in row-major order.
    ///
    /// Each character is resolved through `tiles` once, up front. Returns
    /// `SolveError::InvalidInput` when the character count does not match the
    /// declared dimensions (including dimensions whose product overflows).
    pub fn new(
        width: usize,
        height: usize,
        letters: &str,
        tiles: &TileSet,
    ) -> Result<Self, SolveError> {
        let count = letters.chars().count();
        let invalid = || SolveError::InvalidInput {
            width,
            height,
            letters: count,
        };
        let expected = width.checked_mul(height).ok_or_else(invalid)?;
        if count != expected {
            return Err(invalid());
        }
        let cells = letters.chars().map(|c| tiles.spell(c)).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`, or `None` outside the board.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// `(row, col)` of a flat index.
    pub fn coord(&self, cell: usize) -> Option<(usize, usize)> {
        if cell < self.cells.len() {
            Some((cell / self.width, cell % self.width))
        } else {
            None
        }
    }

    /// The literal shown on `cell`.
    pub fn tile(&self, cell: usize) -> Option<&str> {
        self.cells.get(cell).map(String::as_str)
    }

    /// In-bounds neighbours of `cell`, in `OFFSETS_8` order.
    ///
    /// Out-of-range input yields nothing rather than panicking.
    pub fn neighbours(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let origin = self.coord(cell);
        OFFSETS_8.iter().filter_map(move |&(dr, dc)| {
            let (row, col) = origin?;
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.index(r, c)
        })
    }
}
