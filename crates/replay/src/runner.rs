//! Replays a recorded game from the initial board

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use chess_core::{Board, MoveStatus, create_move};

use crate::{
    game::{GameFile, parse_coordinate_move},
    summary::{CapturedTray, GameStatus, GameSummary, PlyRecord},
};

/// Outcome of a replay: the summary plus the final board.
#[derive(Debug, Clone)]
pub struct Replay {
    pub summary: GameSummary,
    pub board: Board,
}

/// Plays every move of `game` through the move factory.
///
/// A move that is malformed, unknown to the factory or rejected by the
/// player aborts the replay when `stop_on_illegal` is set; otherwise it is
/// recorded and skipped, leaving the board as it was.
pub fn replay_game(game: &GameFile) -> Result<Replay> {
    let mut board = Board::initial();
    let mut plies = Vec::with_capacity(game.moves.len());
    let mut captured = CapturedTray::default();

    info!(
        game = game.display_name(),
        moves = game.moves.len(),
        "replaying"
    );

    for (idx, input) in game.moves.iter().enumerate() {
        let ply = idx + 1;
        let mv = match parse_coordinate_move(input) {
            Some((from, to)) => create_move(&board, from, to),
            None => {
                if game.stop_on_illegal {
                    bail!("ply {ply}: {input} is not a coordinate move");
                }
                warn!(ply, input = input.as_str(), "skipping malformed move");
                plies.push(PlyRecord {
                    ply,
                    input: input.clone(),
                    label: "--".to_string(),
                    status: MoveStatus::IllegalMove,
                });
                continue;
            }
        };

        let transition = board.current_player().make_move(&mv);
        let status = transition.status();
        if !status.is_done() {
            if game.stop_on_illegal {
                bail!("ply {ply}: {input} is not a legal move ({status:?})");
            }
            warn!(
                ply,
                input = input.as_str(),
                ?status,
                "skipping rejected move"
            );
            plies.push(PlyRecord {
                ply,
                input: input.clone(),
                label: mv.to_string(),
                status,
            });
            continue;
        }

        debug!(ply, label = %mv, "applied");
        if let Some(piece) = mv.captured_piece() {
            captured.add(piece);
        }
        plies.push(PlyRecord {
            ply,
            input: input.clone(),
            label: mv.to_string(),
            status,
        });
        board = transition.into_board();

        if GameStatus::of(&board.current_player()).is_over() && ply < game.moves.len() {
            warn!(
                ply,
                remaining = game.moves.len() - ply,
                "game over before the last move"
            );
        }
    }

    let status = GameStatus::of(&board.current_player());
    info!(%status, "replay finished");

    Ok(Replay {
        summary: GameSummary {
            name: game.display_name().to_string(),
            plies,
            status,
            captured,
        },
        board,
    })
}
