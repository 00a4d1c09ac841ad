//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating and tuning the flood-fill.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::color::Color;

/// Count the leaves `depth` plies below the standard start, black to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Color::Black, depth, false)
}

/// Count the leaves `depth` plies below `board` with `color` to move.
/// A pass counts as a ply; two passes in a row end the game.
pub fn leaves_below(board: Board, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut child = board;
            child.apply_move(color, mv);
            leaves_below(child, !color, depth - 1, false)
        })
        .sum()
}
