
use std::collections::HashSet;

use super::{Solver, SolverConfig};

pub(super) fn make_solver(words: &[&str]) -> Solver {
    let mut solver = Solver::with_config(SolverConfig::default());
    solver.set_legal_words(words.iter().copied());
    solver
}

pub(super) fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
