use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, MoveKind};

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != game_state.side_to_move())
        .map(|piece| piece.kind)
}

/// Emit a `Normal` move to every target not held by the side to move.
pub fn push_target_moves(
    game_state: &GameState,
    from: Square,
    targets: SquareSet,
    out: &mut Vec<Move>,
) {
    let own_occ = game_state.occupancy(game_state.side_to_move());
    for to in targets & !own_occ {
        out.push(Move::new(
            from,
            to,
            enemy_piece_on(game_state, to),
            MoveKind::Normal,
        ));
    }
}
