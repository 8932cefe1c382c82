//! King steps plus castling candidates.
//!
//! A castling move is only emitted when every castling condition holds:
//! the right is still set, king and rook stand on their home squares, the
//! squares between them are empty, and none of the king's current, crossed
//! or destination squares is attacked.

use crate::game_state::chess_rules::castle_path;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::attacked_squares;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_target_moves(game_state, from, king_attacks(from), out);
    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let rights = game_state.castling_rights();
    if !rights.has(side, CastleSide::Kingside) && !rights.has(side, CastleSide::Queenside) {
        return;
    }

    let occupied = game_state.occupancy_all();
    let enemy_attacks = attacked_squares(game_state, side.opposite());

    for (castle_side, kind) in [
        (CastleSide::Kingside, MoveKind::CastleKingside),
        (CastleSide::Queenside, MoveKind::CastleQueenside),
    ] {
        if !rights.has(side, castle_side) {
            continue;
        }

        let path = castle_path(side, castle_side);
        if king_from != path.king_from
            || game_state.piece_at(path.rook_from) != Some(Piece::new(side, PieceKind::Rook))
        {
            continue;
        }

        if !(path.between & occupied).is_empty() || !(path.king_path & enemy_attacks).is_empty() {
            continue;
        }

        out.push(Move::new(king_from, path.king_to, None, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{Move, MoveKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn castles(fen: &str, king: &str) -> Vec<MoveKind> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = algebraic_to_square(king).expect("king square");
        let mut moves: Vec<Move> = Vec::new();
        generate_king_moves(&game, from, &mut moves);
        moves.into_iter().filter(|m| m.is_castle()).map(|m| m.kind).collect()
    }

    #[test]
    fn both_castles_available_with_clear_paths() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1"),
            vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8"),
            vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]
        );
    }

    #[test]
    fn attacked_transit_square_removes_the_candidate() {
        // Black rook on f8 covers f1, the square the king crosses going kingside.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1"),
            vec![MoveKind::CastleQueenside]
        );
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1").is_empty());
    }

    #[test]
    fn queenside_needs_b_file_empty_but_not_safe() {
        // b1 attacked by the rook on b8 does not matter; b1 occupied does.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", "e1"),
            vec![MoveKind::CastleQueenside]
        );
        assert!(castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", "e1").is_empty());
    }

    #[test]
    fn cleared_right_or_missing_rook_blocks_castling() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1", "e1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K2R w Q - 0 1", "e1").is_empty());
    }
}
