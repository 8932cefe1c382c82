//! Canonical chess-rule constants.
//!
//! Holds the standard starting position and the fixed castling geometry
//! shared by the move generator and the move applier.

use crate::game_state::chess_types::{CastleSide, Color, Square, SquareSet};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const MAX_PIECES_PER_SIDE: usize = 16;

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub between: SquareSet,
    /// King's current square, the square it crosses, and its destination.
    pub king_path: SquareSet,
}

pub const fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    let base = color.home_rank() * 8;
    let (king_to, rook_from, rook_to, between_bits, path_bits) = match side {
        // f, g empty; e, f, g safe.
        CastleSide::Kingside => (6, 7, 5, 0b0110_0000u64, 0b0111_0000u64),
        // b, c, d empty; e, d, c safe.
        CastleSide::Queenside => (2, 0, 3, 0b0000_1110u64, 0b0001_1100u64),
    };

    CastlePath {
        king_from: Square::from_index(base + 4),
        king_to: Square::from_index(base + king_to),
        rook_from: Square::from_index(base + rook_from),
        rook_to: Square::from_index(base + rook_to),
        between: SquareSet::from_bits(between_bits << base),
        king_path: SquareSet::from_bits(path_bits << base),
    }
}

/// Castling right lost when a piece leaves or is captured on `square`.
pub const fn castle_right_for_corner(square: Square) -> Option<(Color, CastleSide)> {
    match square.index() {
        0 => Some((Color::White, CastleSide::Queenside)),
        7 => Some((Color::White, CastleSide::Kingside)),
        56 => Some((Color::Black, CastleSide::Queenside)),
        63 => Some((Color::Black, CastleSide::Kingside)),
        _ => None,
    }
}
