//! Recorded game files

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use chess_core::algebraic_to_square;

/// A recorded game as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFile {
    /// Display name; the file stem is used when absent
    #[serde(default)]
    pub name: Option<String>,
    /// Coordinate moves, origin then destination (`"e2e4"`)
    pub moves: Vec<String>,
    /// Abort at the first move that cannot be played
    #[serde(default = "default_stop_on_illegal")]
    pub stop_on_illegal: bool,
}

fn default_stop_on_illegal() -> bool {
    true
}

impl GameFile {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse game file")
    }

    /// Load a game from a TOML file, naming it after the file when the
    /// file does not say otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut game = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid game file {}", path.display()))?;
        if game.name.is_none() {
            game.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(game)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed game")
    }
}

/// Splits `"e2e4"` into origin and destination squares.
pub fn parse_coordinate_move(text: &str) -> Option<(u8, u8)> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = algebraic_to_square(&text[..2])?;
    let to = algebraic_to_square(&text[2..])?;
    Some((from, to))
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
