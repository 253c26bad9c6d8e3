//! Per-piece movement rules for chess.
//!
//! Candidate moves describe where a piece may go on the current board,
//! ignoring whether the move leaves its own king in check. Attack targets
//! are the squares a piece threatens, used for check and castling-safety
//! queries; they differ from candidates for pawns (diagonals only) and kings
//! (no castling).

use board_core::{ChessPiece, Color, Move, PieceKind, Square};

use crate::rays::{between, ray, DIAGONAL, ORTHOGONAL};
use crate::{Board, SquareSet};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Precomputed knight targets.
const KNIGHT_TARGETS: [SquareSet; 64] = leaper_table(&KNIGHT_OFFSETS);

/// Precomputed king targets (without castling).
const KING_TARGETS: [SquareSet; 64] = leaper_table(&KING_OFFSETS);

/// Computes single-step targets for all squares at compile time.
const fn leaper_table(offsets: &[(i8, i8); 8]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    let mut index = 0;

    while index < 64 {
        let from = Square::ALL[index];
        let mut bits = 0u64;
        let mut i = 0;
        while i < offsets.len() {
            let (rank_delta, file_delta) = offsets[i];
            if let Some(to) = from.offset(rank_delta, file_delta) {
                bits |= 1u64 << to.index();
            }
            i += 1;
        }
        table[index] = SquareSet(bits);
        index += 1;
    }

    table
}

/// Returns the squares `piece` standing on `from` could move to, before the
/// king-safety filter.
///
/// Never contains `from` itself or a square held by the mover's own color.
/// `last_move` is the previous move of the game, needed for en passant.
pub fn candidate_moves(
    board: &Board<ChessPiece>,
    piece: ChessPiece,
    from: Square,
    last_move: Option<Move>,
) -> SquareSet {
    let own = board.occupied_by(piece.color);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece.color, from, last_move),
        PieceKind::King => {
            (KING_TARGETS[from.index() as usize] - own) | castling_targets(board, piece, from)
        }
        _ => attack_targets(board, piece, from) - own,
    }
}

/// Returns the squares `piece` standing on `from` attacks.
///
/// Sliders include the first blocker of either color. Pawns attack both
/// forward diagonals whatever stands there.
pub fn attack_targets(board: &Board<ChessPiece>, piece: ChessPiece, from: Square) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::Knight => KNIGHT_TARGETS[from.index() as usize],
        PieceKind::Bishop => slide(board, from, &DIAGONAL),
        PieceKind::Rook => slide(board, from, &ORTHOGONAL),
        PieceKind::Queen => slide(board, from, &DIAGONAL) | slide(board, from, &ORTHOGONAL),
        PieceKind::King => KING_TARGETS[from.index() as usize],
    }
}

/// Returns true if moving `piece` from `from` to `to` is an en passant
/// capture: a pawn moving diagonally onto an empty square.
pub fn is_en_passant_capture(
    board: &Board<ChessPiece>,
    piece: ChessPiece,
    from: Square,
    to: Square,
) -> bool {
    piece.kind == PieceKind::Pawn && from.file() != to.file() && board.is_empty(to)
}

fn slide(board: &Board<ChessPiece>, from: Square, directions: &[(i8, i8)]) -> SquareSet {
    let mut reach = SquareSet::EMPTY;
    for &direction in directions {
        for sq in ray(from, direction) {
            reach.insert(sq);
            if !board.is_empty(sq) {
                break;
            }
        }
    }
    reach
}

fn pawn_attacks(from: Square, color: Color) -> SquareSet {
    [-1, 1]
        .into_iter()
        .filter_map(|file_delta| from.offset(color.pawn_direction(), file_delta))
        .collect()
}

fn pawn_moves(
    board: &Board<ChessPiece>,
    color: Color,
    from: Square,
    last_move: Option<Move>,
) -> SquareSet {
    let direction = color.pawn_direction();
    let mut moves = SquareSet::EMPTY;

    if let Some(single) = from.offset(direction, 0).filter(|&sq| board.is_empty(sq)) {
        moves.insert(single);
        if from.rank() == color.pawn_start_rank() {
            if let Some(double) = single.offset(direction, 0).filter(|&sq| board.is_empty(sq)) {
                moves.insert(double);
            }
        }
    }

    for target in pawn_attacks(from, color) {
        if board.is_color(target, color.opposite()) {
            moves.insert(target);
        }
    }

    if let Some(target) = en_passant_target(board, color, from, last_move) {
        moves.insert(target);
    }

    moves
}

/// The square a pawn on `from` can take en passant on, if the previous move
/// was an enemy pawn's double advance landing right beside it.
fn en_passant_target(
    board: &Board<ChessPiece>,
    color: Color,
    from: Square,
    last_move: Option<Move>,
) -> Option<Square> {
    let last = last_move?;
    let (pushed_from, pushed_to) = (last.from(), last.to());
    let pusher = board.piece_at(pushed_to)?;

    let double_advance =
        pushed_from.file() == pushed_to.file() && pushed_from.rank().abs_diff(pushed_to.rank()) == 2;
    let adjacent =
        pushed_to.rank() == from.rank() && pushed_to.file().abs_diff(from.file()) == 1;
    if !pusher.is(PieceKind::Pawn, color.opposite()) || !double_advance || !adjacent {
        return None;
    }

    let file_delta = pushed_to.file() as i8 - from.file() as i8;
    from.offset(color.pawn_direction(), file_delta)
        .filter(|&sq| board.is_empty(sq))
}

/// Two-file king destinations available by castling.
///
/// Requires an unmoved king, an unmoved rook of the same color in the corner
/// of the king's rank, nothing between them, and none of the king's current,
/// crossed or destination squares under attack.
fn castling_targets(board: &Board<ChessPiece>, king: ChessPiece, from: Square) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    if king.moved {
        return targets;
    }

    for (rook_file, step) in [(7u8, 1i8), (0u8, -1i8)] {
        let Some(rook_square) = Square::new(from.rank(), rook_file) else {
            continue;
        };
        let rook_ready = board
            .piece_at(rook_square)
            .is_some_and(|rook| rook.is(PieceKind::Rook, king.color) && !rook.moved);
        if !rook_ready || from.file().abs_diff(rook_file) < 3 {
            continue;
        }

        let path_clear = between(from, rook_square)
            .iter()
            .all(|sq| board.is_empty(sq));
        let (Some(crossed), Some(destination)) = (from.offset(0, step), from.offset(0, 2 * step))
        else {
            continue;
        };
        let safe = [from, crossed, destination]
            .iter()
            .all(|&sq| !board.is_square_attacked(sq, king.color));

        if path_clear && safe {
            targets.insert(destination);
        }
    }

    targets
}
