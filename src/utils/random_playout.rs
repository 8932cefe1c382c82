//! Seeded random playouts that check reachable-position invariants.
//!
//! Moves are picked uniformly from the legal set; this is a consistency
//! checker for the rules, not a player.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate(Color),
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub games: u32,
    pub max_plies: u16,
    pub base_seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 20,
            max_plies: 200,
            base_seed: 1234,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub positions_checked: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    pub games: u32,
    pub positions_checked: usize,
    pub white_checkmated: u32,
    pub black_checkmated: u32,
    pub stalemates: u32,
    pub max_plies: u32,
}

impl PlayoutStats {
    fn record(&mut self, result: &PlayoutResult) {
        self.games += 1;
        self.positions_checked += result.positions_checked;
        match result.outcome {
            PlayoutOutcome::Checkmate(Color::White) => self.white_checkmated += 1,
            PlayoutOutcome::Checkmate(Color::Black) => self.black_checkmated += 1,
            PlayoutOutcome::Stalemate => self.stalemates += 1,
            PlayoutOutcome::MaxPlies => self.max_plies += 1,
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} positions={} white_mated={} black_mated={} stalemates={} ply_cap={}",
            self.games,
            self.positions_checked,
            self.white_checkmated,
            self.black_checkmated,
            self.stalemates,
            self.max_plies
        )
    }
}

/// Check the invariants every reachable position must hold, returning the
/// legal moves on success.
///
/// - board invariants (one king per side, piece counts, pawn ranks)
/// - no legal move leaves the mover's king attacked
/// - the legal set is the same when generated twice
pub fn check_position_invariants(state: &GameState) -> ChessResult<Vec<Move>> {
    state.validate()?;

    let moves = legal_moves(state);
    if legal_moves(state) != moves {
        return Err(violation(state, "legal move generation is not deterministic"));
    }

    let mover = state.side_to_move();
    for mv in &moves {
        let next = apply_move(state, mv)?;
        if is_king_in_check(&next, mover) {
            return Err(violation(state, &format!("{mv} leaves the {mover:?} king attacked")));
        }
        next.validate()?;
    }

    Ok(moves)
}

fn violation(state: &GameState, msg: &str) -> ChessError {
    ChessError::InvalidPosition(format!("{msg} at {}", state.get_fen()))
}

/// Play one seeded random game from `initial`, checking every position.
pub fn run_playout(initial: &GameState, seed: u64, max_plies: u16) -> ChessResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut played_moves_lan = Vec::new();
    let mut positions_checked = 0usize;

    let outcome = loop {
        let moves = check_position_invariants(&state)?;
        positions_checked += 1;

        match evaluate_status(&state) {
            GameStatus::Checkmate(color) => break PlayoutOutcome::Checkmate(color),
            GameStatus::Stalemate => break PlayoutOutcome::Stalemate,
            GameStatus::InProgress | GameStatus::Check(_) => {}
        }

        if played_moves_lan.len() >= usize::from(max_plies) {
            break PlayoutOutcome::MaxPlies;
        }

        let chosen = moves[rng.random_range(0..moves.len())];
        played_moves_lan.push(chosen.to_string());
        state = apply_move(&state, &chosen)?;
    };

    log::debug!(
        "playout seed={seed} ended {outcome:?} after {} plies",
        played_moves_lan.len()
    );

    Ok(PlayoutResult {
        outcome,
        final_state: state,
        played_moves_lan,
        positions_checked,
    })
}

/// Run `config.games` playouts from the standard position. Game `i` uses
/// seed `base_seed + i`, so a failing game can be replayed on its own.
pub fn run_playout_series(config: &PlayoutConfig) -> ChessResult<PlayoutStats> {
    let initial = GameState::new_game();
    let mut stats = PlayoutStats::default();

    for game in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(game));
        let result = run_playout(&initial, seed, config.max_plies).map_err(|err| {
            log::warn!("playout seed={seed} failed: {err}");
            err
        })?;
        stats.record(&result);
    }

    Ok(stats)
}
