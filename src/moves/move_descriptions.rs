//! Move value type.
//!
//! A `Move` is produced by the generator, never assembled by collaborators:
//! the `kind` tag is derived from the position and drives the applier's side
//! effects.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassantCapture,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

impl MoveKind {
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::CastleKingside => Some(CastleSide::Kingside),
            MoveKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Set only on `MoveKind::Promotion`.
    pub promotion: Option<PieceKind>,
    /// Kind of the piece removed by this move, if any (the pawn for en passant).
    pub captured: Option<PieceKind>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, captured: Option<PieceKind>, kind: MoveKind) -> Self {
        Self {
            from,
            to,
            promotion: None,
            captured,
            kind,
        }
    }

    #[inline]
    pub const fn promotion(
        from: Square,
        to: Square,
        captured: Option<PieceKind>,
        promotion: PieceKind,
    ) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
            captured,
            kind: MoveKind::Promotion,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.kind.castle_side().is_some()
    }
}

/// Long algebraic form: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let ch = match kind {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                PieceKind::Queen => 'q',
                PieceKind::Pawn => 'p',
                PieceKind::King => 'k',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
