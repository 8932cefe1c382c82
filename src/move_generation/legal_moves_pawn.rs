//! Pawn pushes, captures, en passant and promotion candidates.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let step = side.pawn_step();
    let occupied = game_state.occupancy_all();

    if let Some(one_step) = from.offset(0, step) {
        if !occupied.contains(one_step) {
            push_pawn_move(side, from, one_step, None, out);

            if from.rank() == side.pawn_start_rank() {
                if let Some(two_step) = from.offset(0, 2 * step) {
                    if !occupied.contains(two_step) {
                        out.push(Move::new(from, two_step, None, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if let Some(captured) = enemy_piece_on(game_state, to) {
            push_pawn_move(side, from, to, Some(captured), out);
        } else if game_state.en_passant_square() == Some(to) && !occupied.contains(to) {
            // The pawn being taken stands beside us, on the destination file.
            let victim = Square::from_index(from.rank() * 8 + to.file());
            if game_state.piece_at(victim) == Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
                out.push(Move::new(
                    from,
                    to,
                    Some(PieceKind::Pawn),
                    MoveKind::EnPassantCapture,
                ));
            }
        }
    }
}

fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    out: &mut Vec<Move>,
) {
    if to.rank() == side.promotion_rank() {
        for promo in PieceKind::PROMOTION_CHOICES {
            out.push(Move::promotion(from, to, captured, promo));
        }
    } else {
        out.push(Move::new(from, to, captured, MoveKind::Normal));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn pawn_moves(fen: &str, square: &str) -> Vec<crate::moves::move_descriptions::Move> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = algebraic_to_square(square).expect("square should parse");
        let mut moves = Vec::new();
        generate_pawn_moves(&game, from, &mut moves);
        moves
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].kind, MoveKind::Normal);
        assert_eq!(moves[1].kind, MoveKind::DoublePawnPush);
        assert_eq!(moves[1].to.to_string(), "e4");
    }

    #[test]
    fn blocked_pawn_cannot_jump_over_a_piece() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn black_pawn_captures_diagonally_forward() {
        let moves = pawn_moves("4k3/3p4/2N1B3/8/8/8/8/4K3 b - - 0 1", "d7");
        let mut targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["c6", "d5", "d6", "e6"]);
    }

    #[test]
    fn en_passant_targets_the_passed_over_square() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5");
        let ep: Vec<_> = moves
            .iter()
            .filter(|m| m.kind == MoveKind::EnPassantCapture)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to.to_string(), "d6");
        assert_eq!(ep[0].captured, Some(PieceKind::Pawn));
    }

    #[test]
    fn reaching_the_last_rank_offers_four_promotions() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Promotion));
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
        assert!(moves
            .iter()
            .all(|m| m.promotion.is_some_and(|k| k.is_promotion_choice())));
    }
}
