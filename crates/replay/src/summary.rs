//! Replay summaries and reporting

use std::{cmp::Reverse, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use chess_core::{Alliance, MoveStatus, Piece, Player};

/// One entry of the replayed move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// 1-based ply number
    pub ply: usize,
    /// The move as written in the game file
    pub input: String,
    /// Human label of the resolved move, `--` when unresolved
    pub label: String,
    pub status: MoveStatus,
}

/// Where the game stands after the last applied ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress { to_move: Alliance },
    Check { to_move: Alliance },
    Checkmate { winner: Alliance },
    Stalemate { to_move: Alliance },
}

impl GameStatus {
    pub fn of(player: &Player<'_>) -> Self {
        let to_move = player.alliance();
        if player.is_in_checkmate() {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else if player.is_in_stalemate() {
            GameStatus::Stalemate { to_move }
        } else if player.is_in_check() {
            GameStatus::Check { to_move }
        } else {
            GameStatus::InProgress { to_move }
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate { .. }
        )
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "{to_move} to move"),
            GameStatus::Check { to_move } => write!(f, "{to_move} to move, in check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate { to_move } => write!(f, "stalemate, {to_move} cannot move"),
        }
    }
}

/// Pieces taken off the board, grouped by the side that lost them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedTray {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedTray {
    pub fn add(&mut self, piece: Piece) {
        let pile = match piece.alliance {
            Alliance::White => &mut self.white,
            Alliance::Black => &mut self.black,
        };
        pile.push(piece);
        // most valuable first, capture order among equals
        pile.sort_by_key(|p| Reverse(p.value()));
    }

    pub fn material(&self, alliance: Alliance) -> u32 {
        let pile = match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        };
        pile.iter().map(Piece::value).sum()
    }

    fn letters(pile: &[Piece]) -> String {
        pile.iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Complete replay outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub name: String,
    pub plies: Vec<PlyRecord>,
    pub status: GameStatus,
    pub captured: CapturedTray,
}

impl GameSummary {
    /// Number of plies that were actually played.
    pub fn applied_plies(&self) -> usize {
        self.plies.iter().filter(|p| p.status.is_done()).count()
    }

    /// Save summary to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize summary")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load summary from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse summary")
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Game: {} ===\n\n", self.name));

        for record in &self.plies {
            match record.status {
                MoveStatus::Done => {
                    report.push_str(&format!("{:>4}. {}\n", record.ply, record.label))
                }
                other => report.push_str(&format!(
                    "{:>4}. {} rejected: {other:?}\n",
                    record.ply, record.input
                )),
            }
        }

        report.push('\n');
        report.push_str(&format!("Status: {}\n", self.status));
        report.push_str(&format!(
            "Captured white: {} ({})\n",
            CapturedTray::letters(&self.captured.white),
            self.captured.material(Alliance::White)
        ));
        report.push_str(&format!(
            "Captured black: {} ({})\n",
            CapturedTray::letters(&self.captured.black),
            self.captured.material(Alliance::Black)
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
