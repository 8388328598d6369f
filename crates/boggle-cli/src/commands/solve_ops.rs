use std::path::Path;
use std::process;

use boggle_core::settings::settings;
use boggle_core::{Board, PrefixIndex, SolveError, Solver};

use crate::puzzle::{read_word_list, BoardText};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub struct SolveOptions {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub json: bool,
}

/// Solve one board. `letters` may be a single run of letters or several
/// whitespace-separated rows.
pub fn solve(dict_file: &str, letters: &str, opts: &SolveOptions) {
    let words = die!(
        read_word_list(Path::new(dict_file)),
        "Error reading {dict_file}: {}"
    );
    let text = die!(
        BoardText::from_rows(letters.split_whitespace()),
        "Error: {}"
    );
    let (board, found) = die!(solve_words(&words, &text, opts), "Error: {}");

    if opts.json {
        let json = die!(serde_json::to_string_pretty(&found), "Error: {}");
        println!("{json}");
    } else {
        for word in &found {
            println!("{word}");
        }
        eprintln!(
            "{} words on {}x{} board",
            found.len(),
            board.width(),
            board.height()
        );
    }
}

/// Lay out `text` with the solver's tile table and return the board together
/// with the sorted words found on it.
///
/// Dimensions come from `opts`, then the shape of `text`, then the `[board]`
/// settings.
pub fn solve_words(
    words: &[String],
    text: &BoardText,
    opts: &SolveOptions,
) -> Result<(Board, Vec<String>), SolveError> {
    let defaults = &settings().board;
    let (width, height) =
        text.dimensions(opts.width, opts.height, (defaults.width, defaults.height));

    let mut solver = Solver::new();
    solver.set_legal_words(words);
    let board = Board::new(width, height, &text.letters(), &solver.config().tiles)?;
    let mut found: Vec<String> = solver.solve(&board)?.into_iter().collect();
    found.sort();
    Ok((board, found))
}

pub fn info(dict_file: &str) {
    let words = die!(
        read_word_list(Path::new(dict_file)),
        "Error reading {dict_file}: {}"
    );
    let index = PrefixIndex::build(&words);
    println!("Lines:        {}", words.len());
    println!("Words:        {}", index.word_count());
    println!("Nodes:        {}", index.node_count());
    println!("Longest word: {}", index.longest_word());
}
