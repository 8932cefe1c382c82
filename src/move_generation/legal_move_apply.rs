//! Move Applier.
//!
//! `apply_move` returns the successor position and leaves its input untouched;
//! `apply_move_in_place` is the primitive it and the legality filter share.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castle_path, castle_right_for_corner};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Apply `mv` to a copy of `game_state`.
///
/// Intended for moves taken from the legal set. The checks here only guard
/// the inputs the applier cannot interpret (no mover on the origin square, a
/// missing or impossible promotion piece); they are not a legality test. Use
/// `legal_move_generator::play_move` for untrusted moves.
pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    let mover = game_state.side_to_move();
    let piece = game_state
        .piece_at(mv.from)
        .filter(|piece| piece.color == mover)
        .ok_or(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        })?;

    validate_promotion(piece, mv)?;

    let mut next = game_state.clone();
    apply_move_in_place(&mut next, mv);
    Ok(next)
}

fn validate_promotion(piece: Piece, mv: &Move) -> ChessResult<()> {
    let reaches_last_rank =
        piece.kind == PieceKind::Pawn && mv.to.rank() == piece.color.promotion_rank();

    match (mv.kind, mv.promotion) {
        (MoveKind::Promotion, Some(kind)) if kind.is_promotion_choice() && reaches_last_rank => {
            Ok(())
        }
        (MoveKind::Promotion, promotion) => Err(ChessError::InvalidPromotionChoice(promotion)),
        (_, Some(kind)) => Err(ChessError::InvalidPromotionChoice(Some(kind))),
        (_, None) if reaches_last_rank => Err(ChessError::InvalidPromotionChoice(None)),
        (_, None) => Ok(()),
    }
}

/// Mutate `game_state` by `mv`. The caller guarantees the move is well formed.
pub(crate) fn apply_move_in_place(game_state: &mut GameState, mv: &Move) {
    let mover = game_state.side_to_move;

    let Some(piece) = game_state.take_piece(mv.from) else {
        return;
    };

    let mut captured = game_state.take_piece(mv.to);

    match mv.kind {
        MoveKind::EnPassantCapture => {
            // Same rank as the origin, same file as the destination.
            let victim = Square::from_index(mv.from.rank() * 8 + mv.to.file());
            captured = game_state.take_piece(victim);
        }
        MoveKind::CastleKingside | MoveKind::CastleQueenside => {
            if let Some(side) = mv.kind.castle_side() {
                let path = castle_path(mover, side);
                if let Some(rook) = game_state.take_piece(path.rook_from) {
                    game_state.put_piece(path.rook_to, rook);
                }
            }
        }
        _ => {}
    }

    let placed = match (mv.kind, mv.promotion) {
        (MoveKind::Promotion, Some(kind)) => Piece::new(mover, kind),
        _ => piece,
    };
    game_state.put_piece(mv.to, placed);

    update_castling_rights(game_state, mover, piece.kind, mv);

    game_state.en_passant_square = if mv.kind == MoveKind::DoublePawnPush {
        mv.from.offset(0, mover.pawn_step())
    } else {
        None
    };

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
}

fn update_castling_rights(game_state: &mut GameState, mover: Color, moved: PieceKind, mv: &Move) {
    if moved == PieceKind::King {
        game_state.castling_rights.revoke_all(mover);
    }

    // A rook leaving its corner, or anything landing on one, ends that right.
    for square in [mv.from, mv.to] {
        if let Some((color, side)) = castle_right_for_corner(square) {
            game_state.castling_rights.revoke(color, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::find_legal_move;
    use crate::moves::move_descriptions::{Move, MoveKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    fn play(game: &GameState, from: &str, to: &str, promotion: Option<PieceKind>) -> GameState {
        let mv = find_legal_move(game, sq(from), sq(to), promotion).expect("move should be legal");
        apply_move(game, &mv).expect("legal move should apply")
    }

    #[test]
    fn double_push_sets_the_passed_over_square() {
        let game = GameState::new_game();
        let next = play(&game, "e2", "e4", None);
        assert_eq!(next.en_passant_square(), Some(sq("e3")));
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.halfmove_clock(), 0);
        assert_eq!(next.fullmove_number(), 1);

        let after_reply = play(&next, "g8", "f6", None);
        assert_eq!(after_reply.en_passant_square(), None);
        assert_eq!(after_reply.halfmove_clock(), 1);
        assert_eq!(after_reply.fullmove_number(), 2);
        // The input position is never touched.
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_destination() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let next = play(&game, "e5", "d6", None);
        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(
            next.piece_at(sq("d6")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(next.occupancy(Color::Black).len(), 1);
    }

    #[test]
    fn castling_moves_the_rook_next_to_the_king() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 9").expect("FEN should parse");
        let next = play(&game, "e1", "g1", None);
        assert_eq!(
            next.piece_at(sq("g1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            next.piece_at(sq("f1")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(next.piece_at(sq("h1")), None);
        assert!(!next.castling_rights().white_kingside);
        assert!(!next.castling_rights().white_queenside);
        assert!(next.castling_rights().black_kingside);
        assert_eq!(next.halfmove_clock(), 4);

        let queenside = play(&next, "e8", "c8", None);
        assert_eq!(
            queenside.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(queenside.piece_at(sq("a8")), None);
        assert!(!queenside.castling_rights().any());
    }

    #[test]
    fn capturing_a_home_rook_clears_that_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let next = play(&game, "a1", "a8", None);
        let rights = next.castling_rights();
        assert!(!rights.white_queenside);
        assert!(!rights.black_queenside);
        assert!(rights.white_kingside);
        assert!(rights.black_kingside);
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn promotion_substitutes_the_chosen_piece() {
        let game = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let next = play(&game, "a7", "b8", Some(PieceKind::Knight));
        assert_eq!(
            next.piece_at(sq("b8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(next.pieces_of(Color::White, PieceKind::Pawn).is_empty());
        assert!(next.pieces_of(Color::Black, PieceKind::Rook).is_empty());
    }

    #[test]
    fn promotion_without_a_valid_piece_is_rejected() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let (a7, a8) = (sq("a7"), sq("a8"));

        let to_king = Move::promotion(a7, a8, None, PieceKind::King);
        assert_eq!(
            apply_move(&game, &to_king),
            Err(ChessError::InvalidPromotionChoice(Some(PieceKind::King)))
        );

        let mut missing = Move::promotion(a7, a8, None, PieceKind::Queen);
        missing.promotion = None;
        assert_eq!(
            apply_move(&game, &missing),
            Err(ChessError::InvalidPromotionChoice(None))
        );

        let untagged = Move::new(a7, a8, None, MoveKind::Normal);
        assert_eq!(
            apply_move(&game, &untagged),
            Err(ChessError::InvalidPromotionChoice(None))
        );
    }

    #[test]
    fn moving_from_an_empty_square_is_rejected() {
        let game = GameState::new_game();
        let mv = Move::new(sq("e4"), sq("e5"), None, MoveKind::Normal);
        assert_eq!(
            apply_move(&game, &mv),
            Err(ChessError::IllegalMove {
                from: sq("e4"),
                to: sq("e5")
            })
        );
    }
}
