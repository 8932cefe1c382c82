//! Pseudo-legal move generation and the `MoveGenerator` seam.
//!
//! Movement rules are dispatched here by `PieceKind`; pieces themselves carry
//! no behavior.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_from};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub trait MoveGenerator: Send + Sync {
    /// Moves for every piece of the side to move.
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move>;

    /// Moves for the piece on `square`; empty when it is not the mover's piece.
    fn generate_moves_from(&self, game_state: &GameState, square: Square) -> Vec<Move>;
}

/// Geometry only: moves may leave the mover's own king attacked.
pub struct PseudoLegalMoveGenerator;

/// Pseudo-legal moves filtered by the self-check test.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        pseudo_legal_moves_all(game_state)
    }

    fn generate_moves_from(&self, game_state: &GameState, square: Square) -> Vec<Move> {
        pseudo_legal_moves(game_state, square)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        legal_moves(game_state)
    }

    fn generate_moves_from(&self, game_state: &GameState, square: Square) -> Vec<Move> {
        legal_moves_from(game_state, square)
    }
}

/// Pseudo-legal moves of the piece on `square`.
///
/// Selecting an empty square or an enemy piece is not an error; it simply
/// yields no moves.
pub fn pseudo_legal_moves(game_state: &GameState, square: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    generate_piece_moves(game_state, square, &mut out);
    out
}

/// Pseudo-legal moves of every piece of the side to move, in square order.
pub fn pseudo_legal_moves_all(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(128);
    for square in game_state.occupancy(game_state.side_to_move()) {
        generate_piece_moves(game_state, square, &mut out);
    }
    out
}

pub(crate) fn generate_piece_moves(game_state: &GameState, square: Square, out: &mut Vec<Move>) {
    let Some(piece) = game_state.piece_at(square) else {
        return;
    };
    if piece.color != game_state.side_to_move() {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, out),
        PieceKind::Knight => generate_knight_moves(game_state, square, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, out),
        PieceKind::Rook => generate_rook_moves(game_state, square, out),
        PieceKind::Queen => generate_queen_moves(game_state, square, out),
        PieceKind::King => generate_king_moves(game_state, square, out),
    }
}

/// Squares `piece` on `from` could capture on, given the board occupancy.
#[inline]
pub fn piece_attacks(piece: Piece, from: Square, occupied: SquareSet) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupied),
        PieceKind::Rook => rook_attacks(from, occupied),
        PieceKind::Queen => queen_attacks(from, occupied),
        PieceKind::King => king_attacks(from),
    }
}
