use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let targets = queen_attacks(from, game_state.occupancy_all());
    push_target_moves(game_state, from, targets, out);
}
