//! Game session: the single owner and writer of a `GameState`.
//!
//! Input collaborators feed it square selections and move intents; render
//! collaborators read `snapshot()` and `status()`. Every position the session
//! moves away from is kept so a move can be taken back.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{find_legal_move, legal_moves_from};
use crate::moves::move_descriptions::Move;
use crate::session::session_config::SessionConfig;
use crate::utils::long_algebraic::parse_long_algebraic;

/// Read-only occupancy view handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub status: GameStatus,
    pub last_move: Option<Move>,
}

impl BoardSnapshot {
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    history: Vec<(GameState, Move)>,
    selected: Option<Square>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let state = config.initial_state()?;
        log::debug!("session started at {}", state.get_fen());
        Ok(Self {
            config,
            state,
            history: Vec::new(),
            selected: None,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        evaluate_status(&self.state)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|(_, mv)| *mv)
    }

    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut squares = [None; 64];
        for (square, piece) in self.state.pieces() {
            squares[square.index() as usize] = Some(piece);
        }
        BoardSnapshot {
            squares,
            side_to_move: self.state.side_to_move(),
            status: self.status(),
            last_move: self.last_move(),
        }
    }

    /// Select an origin square and return its legal moves for highlighting.
    ///
    /// Empty and enemy squares clear the selection and return no moves.
    pub fn select_square(&mut self, square: Square) -> Vec<Move> {
        let moves = legal_moves_from(&self.state, square);
        self.selected = if moves.is_empty() { None } else { Some(square) };
        moves
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolve and play an intent. On error the session is unchanged.
    pub fn move_piece(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<GameStatus> {
        let mv = find_legal_move(&self.state, from, to, promotion).map_err(|err| {
            log::warn!("rejected {from}{to}: {err}");
            err
        })?;
        let next = apply_move(&self.state, &mv)?;

        let previous = std::mem::replace(&mut self.state, next);
        self.history.push((previous, mv));
        self.selected = None;

        let status = self.status();
        log::debug!("played {mv}; {status}");
        Ok(status)
    }

    pub fn play_long_algebraic(&mut self, text: &str) -> ChessResult<GameStatus> {
        let (from, to, promotion) = parse_long_algebraic(text).map_err(|err| {
            log::warn!("rejected {text:?}: {err}");
            err
        })?;
        self.move_piece(from, to, promotion)
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> ChessResult<()> {
        let (previous, mv) = self.history.pop().ok_or(ChessError::NoHistory)?;
        self.state = previous;
        self.selected = None;
        log::debug!("took back {mv}");
        Ok(())
    }

    /// Return to the configured start position and forget the history.
    pub fn reset(&mut self) -> ChessResult<()> {
        self.state = self.config.initial_state()?;
        self.history.clear();
        self.selected = None;
        log::debug!("session reset");
        Ok(())
    }
}
