//! Boggle word finder.
//!
//! Build a [`Solver`] once per dictionary with [`Solver::set_legal_words`],
//! then call [`Solver::solve_board`] for any number of boards. The prefix
//! index is read-only after it is built, so a solver can be shared across
//! threads.

pub mod board;
pub mod settings;
pub mod solver;
pub mod tiles;
pub mod trie;

pub use board::Board;
pub use solver::{SolveError, Solver, SolverConfig};
pub use tiles::TileSet;
pub use trie::{IndexError, PrefixIndex};
