use crate::{board::Board, moves::Move};

/// Pure perft node count.
/// Counts every position reachable by completed moves down to `depth`.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let player = board.current_player();
    let mut nodes = 0u64;
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if transition.status().is_done() {
            nodes += perft(transition.board(), depth - 1);
        }
    }
    nodes
}

/// Node counts per root move, for narrowing down a perft mismatch.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    let player = board.current_player();
    player
        .legal_moves()
        .iter()
        .filter_map(|mv| {
            let transition = player.make_move(mv);
            transition.status().is_done().then(|| {
                let nodes = perft(transition.board(), depth.saturating_sub(1));
                (mv.clone(), nodes)
            })
        })
        .collect()
}
