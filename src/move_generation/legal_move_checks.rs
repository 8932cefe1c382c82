//! Attack queries: which squares a side controls, and whether a king is in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::piece_attacks;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Every square a piece of `by` could capture on, occupied or not.
///
/// Sliding rays include their first blocker regardless of its color, so a
/// defended piece counts as attacked. Pawns contribute only their diagonals.
pub fn attacked_squares(game_state: &GameState, by: Color) -> SquareSet {
    let occupied = game_state.occupancy_all();
    let mut attacked = SquareSet::EMPTY;

    for from in game_state.occupancy(by) {
        if let Some(piece) = game_state.piece_at(from) {
            attacked |= piece_attacks(piece, from, occupied);
        }
    }

    attacked
}

/// Equivalent to `attacked_squares(game_state, by).contains(square)`, looking
/// outward from the target instead of enumerating every attacker.
pub fn is_square_attacked(game_state: &GameState, square: Square, by: Color) -> bool {
    let occupied = game_state.occupancy_all();

    // A pawn of `by` attacks `square` iff a pawn of the other color on
    // `square` would attack that pawn.
    if !(pawn_attacks(by.opposite(), square) & game_state.pieces_of(by, PieceKind::Pawn)).is_empty()
    {
        return true;
    }

    if !(knight_attacks(square) & game_state.pieces_of(by, PieceKind::Knight)).is_empty() {
        return true;
    }

    if !(king_attacks(square) & game_state.pieces_of(by, PieceKind::King)).is_empty() {
        return true;
    }

    let queens = game_state.pieces_of(by, PieceKind::Queen);

    let bishops_queens = game_state.pieces_of(by, PieceKind::Bishop) | queens;
    if !(bishop_attacks(square, occupied) & bishops_queens).is_empty() {
        return true;
    }

    let rooks_queens = game_state.pieces_of(by, PieceKind::Rook) | queens;
    !(rook_attacks(square, occupied) & rooks_queens).is_empty()
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}
