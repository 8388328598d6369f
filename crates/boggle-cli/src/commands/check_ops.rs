use std::path::Path;
use std::process;

use tracing::debug;

use boggle_core::settings::settings;
use boggle_core::Solver;

use crate::puzzle::Puzzle;
use crate::report::CheckReport;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub struct CheckOptions {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub json: bool,
}

/// Solve the board in a puzzle file and compare against its answers.
///
/// Exits with status 1 when the answers differ.
pub fn check(file: &str, opts: &CheckOptions) {
    let puzzle = die!(Puzzle::load(Path::new(file)), "Error reading {file}: {}");
    debug!(
        rows = puzzle.board.rows().len(),
        answers = puzzle.answers.len(),
        words = puzzle.words.len()
    );

    let report = die!(run_check(&puzzle, opts), "Error: {}");

    if opts.json {
        let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{json}");
    } else {
        println!("------------------------------ Running {file}");
        println!();
        print!("{}", report.render());
    }

    if !report.passed() {
        process::exit(1);
    }
}

/// Solve a parsed puzzle and build the comparison report.
pub fn run_check(
    puzzle: &Puzzle,
    opts: &CheckOptions,
) -> Result<CheckReport, boggle_core::SolveError> {
    let defaults = &settings().board;
    let (width, height) =
        puzzle
            .board
            .dimensions(opts.width, opts.height, (defaults.width, defaults.height));

    let mut solver = Solver::new();
    solver.set_legal_words(&puzzle.words);
    let found = solver.solve_board(width, height, &puzzle.board.letters())?;

    Ok(CheckReport::compare(puzzle.answers.iter().cloned(), found))
}
