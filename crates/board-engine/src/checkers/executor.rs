//! Commits checkers moves: captures, crowning and capture chains.

use board_core::{Checker, Move, MoveFlag};

use super::pieces::{candidate_moves, crowning_row, jumped_square};
use crate::rules::CommitResult;
use crate::{Board, GameError};

/// Applies a move. A jumped opponent is removed, a man reaching the far row
/// is crowned, and when `chain_captures` is on a capturing piece that can
/// capture again reports its follow-up landings in `chain`.
///
/// A piece crowned by this move never continues the chain.
pub fn apply(
    board: &mut Board<Checker>,
    mv: Move,
    chain_captures: bool,
) -> Result<CommitResult<Checker>, GameError> {
    let (from, to) = (mv.from(), mv.to());
    let piece = board.piece_at(from).ok_or(GameError::EmptySource(from))?;

    let captured = match jumped_square(board, from, to) {
        Some(victim) if board.is_color(victim, piece.color.opposite()) => board.remove(victim),
        _ => None,
    };
    board.relocate(from, to);

    let crowned = !piece.is_king() && to.rank() == crowning_row(piece.color);
    if crowned {
        board.place(to, Checker::king(piece.color));
        tracing::trace!("{} man crowned on {}", piece.color, to);
    }

    let chain = if captured.is_some() && !crowned && chain_captures {
        let follow_ups = candidate_moves(board, piece, to).captures;
        (!follow_ups.is_empty()).then_some(follow_ups)
    } else {
        None
    };
    if let Some(landings) = chain {
        tracing::trace!("capture chain continues from {} to {:?}", to, landings);
    }

    let flag = if captured.is_some() {
        MoveFlag::Jump
    } else {
        MoveFlag::Normal
    };

    Ok(CommitResult {
        mv: Move::new(from, to, flag),
        captured,
        promoted: crowned,
        chain,
    })
}
