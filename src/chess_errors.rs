//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by the engine, the game
//! session and the text utilities. Every variant is recoverable: the engine
//! never partially mutates a position before reporting one, so callers can
//! simply re-prompt for a different selection.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The requested move is not in the legal-move set of the position.
    IllegalMove { from: Square, to: Square },

    /// A promotion kind was missing, was not one of Knight/Bishop/Rook/Queen,
    /// or was supplied for a move that does not promote.
    ///
    /// Payload: the kind the caller supplied, if any.
    InvalidPromotionChoice(Option<PieceKind>),

    /// A coordinate outside `0..=7` reached the input boundary.
    OutOfBoundsSquare { file: i16, rank: i16 },

    /// Square or move text could not be interpreted (for example `"z9"`).
    InvalidAlgebraic(String),

    /// A Forsyth-Edwards position string was malformed.
    InvalidFen(String),

    /// A position violates a board invariant (missing king, too many pieces).
    InvalidPosition(String),

    /// `undo` was requested with no prior position recorded.
    NoHistory,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessError::InvalidPromotionChoice(Some(kind)) => {
                write!(f, "invalid promotion choice: {kind:?}")
            }
            ChessError::InvalidPromotionChoice(None) => {
                write!(f, "promotion requires a piece choice")
            }
            ChessError::OutOfBoundsSquare { file, rank } => {
                write!(f, "square ({file}, {rank}) is off the board")
            }
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic text: {text}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
            ChessError::NoHistory => write!(f, "no move to undo"),
        }
    }
}

impl Error for ChessError {}
