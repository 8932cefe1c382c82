//! Legality Filter.
//!
//! Each pseudo-legal candidate is played on a scratch copy and kept only if
//! the mover's king is not attacked afterwards. Pins, discovered checks and
//! check evasion all fall out of that single test.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, apply_move_in_place};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{pseudo_legal_moves, pseudo_legal_moves_all};
use crate::moves::move_descriptions::{Move, MoveKind};

/// All legal moves of the side to move.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    retain_legal(game_state, pseudo_legal_moves_all(game_state))
}

/// Legal moves of the piece on `square`; empty for empty or enemy squares.
pub fn legal_moves_from(game_state: &GameState, square: Square) -> Vec<Move> {
    retain_legal(game_state, pseudo_legal_moves(game_state, square))
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    pseudo_legal_moves_all(game_state)
        .iter()
        .any(|mv| leaves_king_safe(game_state, mv))
}

/// Resolve a collaborator's (origin, destination, promotion) intent against
/// the legal set.
pub fn find_legal_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<Move> {
    let candidates: Vec<Move> = legal_moves_from(game_state, from)
        .into_iter()
        .filter(|mv| mv.to == to)
        .collect();

    let Some(first) = candidates.first().copied() else {
        return Err(ChessError::IllegalMove { from, to });
    };

    if first.kind != MoveKind::Promotion {
        return match promotion {
            None => Ok(first),
            Some(kind) => Err(ChessError::InvalidPromotionChoice(Some(kind))),
        };
    }

    let kind = promotion.ok_or(ChessError::InvalidPromotionChoice(None))?;
    candidates
        .into_iter()
        .find(|mv| mv.promotion == Some(kind))
        .ok_or(ChessError::InvalidPromotionChoice(Some(kind)))
}

/// Apply `mv` only if it belongs to the legal set of `game_state`.
pub fn play_move(game_state: &GameState, mv: &Move) -> ChessResult<GameState> {
    if !legal_moves_from(game_state, mv.from).contains(mv) {
        if mv.kind == MoveKind::Promotion && !mv.promotion.is_some_and(|k| k.is_promotion_choice()) {
            return Err(ChessError::InvalidPromotionChoice(mv.promotion));
        }
        return Err(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }
    apply_move(game_state, mv)
}

fn retain_legal(game_state: &GameState, pseudo: Vec<Move>) -> Vec<Move> {
    pseudo
        .into_iter()
        .filter(|mv| leaves_king_safe(game_state, mv))
        .collect()
}

fn leaves_king_safe(game_state: &GameState, mv: &Move) -> bool {
    let mover = game_state.side_to_move();
    let mut scratch = game_state.clone();
    apply_move_in_place(&mut scratch, mv);

    if is_king_in_check(&scratch, mover) {
        log::trace!("pruned {mv}: leaves {mover:?} king attacked");
        return false;
    }
    true
}
