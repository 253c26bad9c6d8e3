//! Movement rules for checkers pieces.
//!
//! Men step and capture diagonally forward only. Kings move like men in all
//! four directions and additionally fly along open diagonals.

use board_core::{Checker, Color, Square};

use crate::rays::{between, ray, DIAGONAL};
use crate::{Board, SquareSet};

/// Where a checkers piece can go, split by kind of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerMoves {
    /// Non-capturing destinations.
    pub steps: SquareSet,
    /// Landing squares of single captures.
    pub captures: SquareSet,
}

impl CheckerMoves {
    /// Returns steps and captures together.
    pub fn all(self) -> SquareSet {
        self.steps | self.captures
    }

    fn merge(&mut self, other: CheckerMoves) {
        self.steps |= other.steps;
        self.captures |= other.captures;
    }
}

/// Row direction men of `color` advance in: White toward row 0, Black toward row 7.
pub const fn forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The row on which a man of `color` is crowned.
pub const fn crowning_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Returns the steps and captures of `piece` standing on `from`.
pub fn candidate_moves(board: &Board<Checker>, piece: Checker, from: Square) -> CheckerMoves {
    let mut moves = CheckerMoves::default();

    let forward_directions = [(forward(piece.color), -1), (forward(piece.color), 1)];
    for direction in forward_directions {
        moves.merge(short_moves(board, piece.color, from, direction));
    }

    if piece.is_king() {
        for direction in DIAGONAL {
            moves.merge(flying_moves(board, piece.color, from, direction));
        }
    }

    moves
}

/// A single diagonal step, or a jump over an adjacent opponent.
fn short_moves(
    board: &Board<Checker>,
    color: Color,
    from: Square,
    (rank_step, file_step): (i8, i8),
) -> CheckerMoves {
    let mut moves = CheckerMoves::default();
    let Some(next) = from.offset(rank_step, file_step) else {
        return moves;
    };

    match board.piece_at(next) {
        None => moves.steps.insert(next),
        Some(other) if other.color != color => {
            if let Some(landing) = next
                .offset(rank_step, file_step)
                .filter(|&sq| board.is_empty(sq))
            {
                moves.captures.insert(landing);
            }
        }
        Some(_) => {}
    }

    moves
}

/// Open-diagonal travel; the first occupied square ends the ray.
fn flying_moves(
    board: &Board<Checker>,
    color: Color,
    from: Square,
    (rank_step, file_step): (i8, i8),
) -> CheckerMoves {
    let mut moves = CheckerMoves::default();

    for sq in ray(from, (rank_step, file_step)) {
        match board.piece_at(sq) {
            None => moves.steps.insert(sq),
            Some(other) => {
                if other.color != color {
                    if let Some(landing) = sq
                        .offset(rank_step, file_step)
                        .filter(|&beyond| board.is_empty(beyond))
                    {
                        moves.captures.insert(landing);
                    }
                }
                break;
            }
        }
    }

    moves
}

/// Returns the occupied square a move from `from` to `to` jumps over, if any.
pub fn jumped_square(board: &Board<Checker>, from: Square, to: Square) -> Option<Square> {
    between(from, to).iter().find(|&sq| !board.is_empty(sq))
}

/// Returns true if any piece of `color` has a capture.
pub fn can_capture(board: &Board<Checker>, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, piece)| !candidate_moves(board, piece, from).captures.is_empty())
}
