//! Commits chess moves to the board.

use board_core::{ChessPiece, Move, MoveFlag, PieceKind, Square};

use super::legality::classify;
use super::pieces::is_en_passant_capture;
use crate::rules::CommitResult;
use crate::{Board, GameError};

/// Applies a move, handling en passant removal, castling rook relocation and
/// promotion.
///
/// Legality is not re-checked here; callers pass moves taken from the legal
/// target sets. The board is untouched when an error is returned.
pub fn apply(
    board: &mut Board<ChessPiece>,
    mv: Move,
) -> Result<CommitResult<ChessPiece>, GameError> {
    let (from, to) = (mv.from(), mv.to());
    let piece = board.piece_at(from).ok_or(GameError::EmptySource(from))?;

    let promotes = piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank();
    let promotion = match (promotes, mv.promotion()) {
        (true, None) => return Err(GameError::PromotionRequired(to)),
        (true, Some(choice)) => Some(choice),
        (false, _) => None,
    };
    let flag = match promotion {
        Some(choice) => MoveFlag::promotion(choice),
        None => classify(board, from, to),
    };

    let mut captured = None;
    if is_en_passant_capture(board, piece, from, to) {
        if let Some(victim) = Square::new(from.rank(), to.file()) {
            captured = board.remove(victim);
            tracing::trace!("{} takes en passant on {}", piece.color, victim);
        }
    }
    if flag.is_castling() {
        tracing::trace!("{} castles from {} to {}", piece.color, from, to);
    }

    captured = board.move_raw(from, to).or(captured);

    if let Some(choice) = promotion {
        let mut promoted = ChessPiece::new(choice.kind(), piece.color);
        promoted.moved = true;
        board.place(to, promoted);
        tracing::trace!("pawn promoted to {} on {}", choice.kind(), to);
    }

    Ok(CommitResult {
        mv: Move::new(from, to, flag),
        captured,
        promoted: promotion.is_some(),
        chain: None,
    })
}
