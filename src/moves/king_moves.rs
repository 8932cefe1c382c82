//! King step geometry as a precomputed table.
//!
//! Castling is not geometry of the king alone; it is generated by
//! `move_generation::legal_moves_king`.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::knight_moves::set_if_valid;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> SquareSet {
    SquareSet::from_bits(KING_ATTACKS[square.index() as usize])
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(file - 1, rank - 1);
        attacks |= set_if_valid(file, rank - 1);
        attacks |= set_if_valid(file + 1, rank - 1);
        attacks |= set_if_valid(file - 1, rank);
        attacks |= set_if_valid(file + 1, rank);
        attacks |= set_if_valid(file - 1, rank + 1);
        attacks |= set_if_valid(file, rank + 1);
        attacks |= set_if_valid(file + 1, rank + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_has_three_targets() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(king_attacks(Square::from_index(0)).len(), 3);
    }

    #[test]
    fn king_attacks_from_e4_surround_it() {
        let e4 = Square::from_index(28);
        let attacks = king_attacks(e4);
        assert_eq!(attacks.len(), 8);
        assert!(!attacks.contains(e4));
    }

    #[test]
    fn king_on_the_h_file_does_not_wrap_to_the_a_file() {
        let h4 = Square::from_index(31);
        let targets: Vec<String> = king_attacks(h4).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["g3", "h3", "g4", "g5", "h5"]);
    }
}
