//! Pawn capture geometry.
//!
//! Pawns attack diagonally forward whether or not the target is occupied;
//! pushes are not attacks and are generated in `legal_moves_pawn`.

use crate::game_state::chess_types::{Color, Square, SquareSet};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_white_pawn_attacks();
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_black_pawn_attacks();

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> SquareSet {
    match color {
        Color::White => SquareSet::from_bits(WHITE_PAWN_ATTACKS[square.index() as usize]),
        Color::Black => SquareSet::from_bits(BLACK_PAWN_ATTACKS[square.index() as usize]),
    }
}

const fn generate_white_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank < 7 {
            if file > 0 {
                attacks |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks |= 1u64 << (sq + 9);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn generate_black_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        if rank > 0 {
            if file > 0 {
                attacks |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks |= 1u64 << (sq - 7);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_pawn_attacks_from_e2() {
        let expected = (1u64 << 19) | (1u64 << 21);
        assert_eq!(WHITE_PAWN_ATTACKS[12], expected);
        assert_eq!(pawn_attacks(Color::White, Square::from_index(12)).bits(), expected);
    }

    #[test]
    fn black_pawn_attacks_from_a7_stay_on_the_board() {
        let a7 = Square::from_index(48);
        assert_eq!(BLACK_PAWN_ATTACKS[48], 1u64 << 41);
        assert_eq!(pawn_attacks(Color::Black, a7).len(), 1);
    }

    #[test]
    fn edge_file_pawns_do_not_wrap_and_last_rank_is_empty() {
        let h2 = Square::from_index(15);
        let targets: Vec<String> = pawn_attacks(Color::White, h2).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["g3"]);

        let a2 = Square::from_index(8);
        let targets: Vec<String> = pawn_attacks(Color::Black, a2).iter().map(|s| s.to_string()).collect();
        assert_eq!(targets, vec!["b1"]);

        assert!(pawn_attacks(Color::White, Square::from_index(63)).is_empty());
        assert!(pawn_attacks(Color::Black, Square::from_index(7)).is_empty());
    }
}
