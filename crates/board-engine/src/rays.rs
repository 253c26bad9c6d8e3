//! Direction tables and ray walking shared by both games.

use board_core::Square;

use crate::SquareSet;

/// Rank and file steps along the four orthogonal directions.
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rank and file steps along the four diagonals.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walks from `from` (exclusive) in one direction until the board edge.
pub fn ray(from: Square, (rank_step, file_step): (i8, i8)) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(rank_step, file_step), move |sq| {
        sq.offset(rank_step, file_step)
    })
}

/// Returns the squares strictly between two squares on a shared rank, file
/// or diagonal. Unaligned squares have nothing between them.
pub fn between(a: Square, b: Square) -> SquareSet {
    let rank_delta = b.rank() as i8 - a.rank() as i8;
    let file_delta = b.file() as i8 - a.file() as i8;
    let aligned = rank_delta == 0 || file_delta == 0 || rank_delta.abs() == file_delta.abs();
    if a == b || !aligned {
        return SquareSet::EMPTY;
    }

    ray(a, (rank_delta.signum(), file_delta.signum()))
        .take_while(|&sq| sq != b)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn ray_stops_at_the_edge() {
        let squares: Vec<Square> = ray(sq("f6"), (1, 1)).collect();
        assert_eq!(squares, vec![sq("g7"), sq("h8")]);
        assert_eq!(ray(Square::H8, (1, 0)).count(), 0);
    }

    #[test]
    fn between_on_lines() {
        let path = between(Square::E1, Square::H1);
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![Square::F1, Square::G1]);
        assert_eq!(between(Square::A1, Square::H8).count(), 6);
        assert_eq!(between(sq("c3"), sq("c4")), SquareSet::EMPTY);
    }

    #[test]
    fn between_unaligned_is_empty() {
        assert_eq!(between(Square::A1, sq("b3")), SquareSet::EMPTY);
        assert_eq!(between(Square::A1, Square::A1), SquareSet::EMPTY);
    }
}
