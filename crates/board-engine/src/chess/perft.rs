//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a given depth; the
//! totals are compared against published reference values.

use board_core::{ChessPiece, Color, Move};

use super::executor::apply;
use super::legality::generate_moves;
use crate::Board;

/// Counts the leaf nodes at the given depth with `color` to move.
pub fn perft(board: &Board<ChessPiece>, color: Color, last_move: Option<Move>, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, color, last_move);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = board.clone();
        if let Ok(commit) = apply(&mut next, *m) {
            nodes += perft(&next, color.opposite(), Some(commit.mv), depth - 1);
        }
    }
    nodes
}

/// Perft with divide: the node count below each root move, sorted by move.
pub fn perft_divide(
    board: &Board<ChessPiece>,
    color: Color,
    last_move: Option<Move>,
    depth: u32,
) -> Vec<(String, u64)> {
    let moves = generate_moves(board, color, last_move);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = board.clone();
        if let Ok(commit) = apply(&mut next, *m) {
            let nodes = if depth > 1 {
                perft(&next, color.opposite(), Some(commit.mv), depth - 1)
            } else {
                1
            };
            results.push((m.to_coordinate_string(), nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(perft(&board, Color::White, None, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(perft(&board, Color::White, None, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(perft(&board, Color::White, None, 3), 8902);
    }

    // Depth 4 is slow with the clone-based filter, only run in release mode
    #[test]
    #[ignore]
    fn perft_startpos_depth_4() {
        let board = Board::<ChessPiece>::standard();
        assert_eq!(perft(&board, Color::White, None, 4), 197281);
    }

    // Kiwipete - a position with lots of special moves
    #[test]
    fn perft_kiwipete_depth_1() {
        let board = Board::<ChessPiece>::from_placement(KIWIPETE).unwrap();
        assert_eq!(perft(&board, Color::White, None, 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        let board = Board::<ChessPiece>::from_placement(KIWIPETE).unwrap();
        assert_eq!(perft(&board, Color::White, None, 2), 2039);
    }

    // Position 3: check evasion, en passant, no castling pieces
    #[test]
    fn perft_position3_depth_2() {
        let board = Board::<ChessPiece>::from_placement("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8").unwrap();
        assert_eq!(perft(&board, Color::White, None, 2), 191);
    }

    #[test]
    fn perft_divide_works() {
        let board = Board::<ChessPiece>::standard();
        let results = perft_divide(&board, Color::White, None, 1);
        assert_eq!(results.len(), 20);
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 20);
        assert!(results.iter().any(|(m, _)| m == "g1f3"));
    }
}
