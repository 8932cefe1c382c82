use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let targets = bishop_attacks(from, game_state.occupancy_all());
    push_target_moves(game_state, from, targets, out);
}
