//! Properties of the board operations over random legal playouts.

use proptest::prelude::*;
use reversan_board::{
    Bitboard, Board, Color, HeuristicTable, Position, Square, MOBILITY_WEIGHT,
};

/// Play from a named layout, picking each move by the next choice.
/// Returns every `(board, color to move, move)` visited.
fn playout(position: Position, choices: &[u8]) -> Vec<(Board, Color, Square)> {
    let mut board = Board::make_initial(position);
    let mut color = Color::Black;
    let mut visited = Vec::new();

    for &choice in choices {
        let mut moves = board.legal_moves(color);
        if moves.is_empty() {
            color = !color;
            moves = board.legal_moves(color);
            if moves.is_empty() {
                break;
            }
        }

        let mv = moves.nth(choice as usize % moves.len()).unwrap();
        visited.push((board, color, mv));
        board.apply_move(color, mv);
        color = !color;
    }

    visited
}

fn arb_playout() -> impl Strategy<Value = Vec<(Board, Color, Square)>> {
    (
        prop::sample::select(Position::ALL.to_vec()),
        prop::collection::vec(any::<u8>(), 0..64),
    )
        .prop_map(|(position, choices)| playout(position, &choices))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn colors_never_overlap(visited in arb_playout()) {
        for (board, color, mv) in visited {
            let mut next = board;
            next.apply_move(color, mv);
            prop_assert!(next.white().is_disjoint(next.black()));
            prop_assert!(next.occupancy(Color::White) == next.white());
            prop_assert!(next.occupancy(Color::Black) == next.black());
        }
    }

    #[test]
    fn legal_moves_are_pure(visited in arb_playout()) {
        for (board, color, _) in visited {
            let first = board.legal_moves(color);
            prop_assert_eq!(first, board.legal_moves(color));
            prop_assert!(first.bitboard().is_disjoint(board.occupied()));
        }
    }

    #[test]
    fn apply_move_is_deterministic(visited in arb_playout()) {
        for (board, color, mv) in visited {
            let (mut a, mut b) = (board, board);
            a.apply_move(color, mv);
            b.apply_move(color, mv);
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn apply_move_conserves_discs(visited in arb_playout()) {
        for (board, color, mv) in visited {
            let mut next = board;
            next.apply_move(color, mv);

            let total = |b: Board| b.occupied().count_occupied();
            prop_assert_eq!(total(next), total(board) + 1);

            // Captures only move discs from the opponent to the mover, and there is at least one.
            let flipped = board.count(!color) - next.count(!color);
            prop_assert!(flipped > 0);
            prop_assert_eq!(next.count(color), board.count(color) + 1 + flipped);
            prop_assert_eq!(board.occupancy(color) & !next.occupancy(color), Bitboard::EMPTY);
            prop_assert_eq!(next.occupancy(!color) & !board.occupancy(!color), Bitboard::EMPTY);
        }
    }

    #[test]
    fn evaluation_is_antisymmetric(visited in arb_playout()) {
        for (board, _, _) in visited {
            prop_assert_eq!(board.swap_colors().evaluate(), -board.evaluate());
        }
    }

    #[test]
    fn negated_table_leaves_only_mobility_flipped(visited in arb_playout()) {
        let negated = HeuristicTable::STANDARD.negated();
        for (board, _, _) in visited {
            // Swapping colors and negating the table keeps the positional term
            // and negates the mobility term, so the two scores differ by twice
            // the mobility term.
            let mobility = board.legal_moves(Color::White).len() as i32
                - board.legal_moves(Color::Black).len() as i32;
            prop_assert_eq!(
                board.evaluate() - board.swap_colors().evaluate_with(&negated),
                2 * MOBILITY_WEIGHT * mobility
            );
        }
    }
}
