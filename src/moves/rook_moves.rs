//! Rook rays traced against an occupancy set.

use crate::game_state::chess_types::{Square, SquareSet};

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Squares a rook on `square` reaches: each ray includes its first blocker.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    for (file_step, rank_step) in ROOK_DIRECTIONS {
        attacks |= trace_ray(square, file_step, rank_step, occupancy);
    }
    attacks
}

/// Walk from `square` (exclusive) in one direction, stopping after the first occupied square.
pub fn trace_ray(square: Square, file_step: i32, rank_step: i32, occupancy: SquareSet) -> SquareSet {
    let mut file = square.file() as i32 + file_step;
    let mut rank = square.rank() as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy.bits() & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    SquareSet::from_bits(attacks)
}
