//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::tiles::TileSet;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub board: BoardSettings,
    pub search: SearchSettings,
    #[serde(default)]
    tiles: BTreeMap<String, String>,
    /// Parsed tile table: board character → literal.
    #[serde(skip)]
    tiles_parsed: TileSet,
}

impl Settings {
    /// The configured multi-letter tiles.
    pub fn tiles(&self) -> &TileSet {
        &self.tiles_parsed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub min_word_length: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.tiles_parsed = parse_tiles(&s.tiles)?;
    Ok(s)
}

fn parse_tiles(raw: &BTreeMap<String, String>) -> Result<TileSet, SettingsError> {
    let mut tiles = TileSet::empty();
    for (key, literal) in raw {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SettingsError::InvalidValue {
                    field: format!("tiles.{key}"),
                    reason: "key must be a single character".to_string(),
                })
            }
        };
        if literal.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("tiles.{key}"),
                reason: "literal must not be empty".to_string(),
            });
        }
        tiles.insert(letter, literal.clone());
    }
    Ok(tiles)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(board.width);
    check_positive_usize!(board.height);
    check_positive_usize!(search.min_word_length);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.board.width, 4);
        assert_eq!(s.board.height, 4);
        assert_eq!(s.search.min_word_length, 1);
        assert_eq!(s.tiles().literal('q'), Some("qu"));
        assert_eq!(s.tiles().literal('a'), None);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[board]
width = 5
height = 5

[search]
min_word_length = 3

[tiles]
q = "qu"
t = "th"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.board.width, 5);
        assert_eq!(s.search.min_word_length, 3);
        assert_eq!(s.tiles().literal('t'), Some("th"));
        assert_eq!(s.tiles().len(), 2);
    }

    #[test]
    fn tiles_omitted_is_empty() {
        let toml = r#"
[board]
width = 4
height = 4

[search]
min_word_length = 1
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.tiles().is_empty());
        assert_eq!(s.tiles().literal('q'), None);
    }

    #[test]
    fn error_zero_width() {
        let toml = r#"
[board]
width = 0
height = 4

[search]
min_word_length = 1
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("board.width"));
    }

    #[test]
    fn error_zero_min_word_length() {
        let toml = r#"
[board]
width = 4
height = 4

[search]
min_word_length = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("search.min_word_length"));
    }

    #[test]
    fn error_tile_key_not_single_char() {
        let toml = r#"
[board]
width = 4
height = 4

[search]
min_word_length = 1

[tiles]
qu = "qu"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("tiles.qu"));
    }

    #[test]
    fn error_tile_empty_literal() {
        let toml = r#"
[board]
width = 4
height = 4

[search]
min_word_length = 1

[tiles]
q = ""
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("literal must not be empty"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[board]
width = 4
height = 4
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
