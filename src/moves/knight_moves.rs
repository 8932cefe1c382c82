//! Knight jump geometry as a precomputed table.

use crate::game_state::chess_types::{Square, SquareSet};

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub const fn knight_attacks(square: Square) -> SquareSet {
    SquareSet::from_bits(KNIGHT_ATTACKS[square.index() as usize])
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0;
        while i < KNIGHT_OFFSETS.len() {
            let (d_file, d_rank) = KNIGHT_OFFSETS[i];
            attacks |= set_if_valid(file + d_file, rank + d_rank);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = Square::from_index(27);
        assert_eq!(KNIGHT_ATTACKS[27].count_ones(), 8);
        assert_eq!(knight_attacks(d4).len(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let h8 = Square::from_index(63);
        let targets: Vec<String> = knight_attacks(h8).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["g6", "f7"]);
    }

    #[test]
    fn knight_near_the_a_file_does_not_wrap_to_the_h_file() {
        let b1 = Square::from_index(1);
        let targets: Vec<String> = knight_attacks(b1).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["d2", "a3", "c3"]);

        let g2 = Square::from_index(14);
        let targets: Vec<String> = knight_attacks(g2).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["e1", "e3", "f4", "h4"]);
    }
}
