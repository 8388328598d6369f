use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        boggle_core::settings::init_custom(content),
        "Error loading settings: {}"
    );
}

pub fn settings_export() {
    print!("{}", boggle_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        boggle_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: board={}x{}, search.min_word_length={}, tiles={}",
        s.board.width,
        s.board.height,
        s.search.min_word_length,
        s.tiles().len()
    );
}
