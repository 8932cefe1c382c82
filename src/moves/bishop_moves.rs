//! Bishop rays traced against an occupancy set.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        attacks |= trace_ray(square, file_step, rank_step, occupancy);
    }
    attacks
}
