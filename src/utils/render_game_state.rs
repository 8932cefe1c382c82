//! Text board rendering for terminals and logs.
//!
//! Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::fen_generator::piece_to_fen_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardGlyphs {
    Unicode,
    Ascii,
}

pub fn render_game_state(game_state: &GameState) -> String {
    render_with_highlights(game_state, SquareSet::EMPTY, BoardGlyphs::Unicode)
}

/// Render with White at the bottom. Highlighted empty squares are drawn as `*`
/// and highlighted occupied squares are wrapped in brackets.
pub fn render_with_highlights(
    game_state: &GameState,
    highlights: SquareSet,
    glyphs: BoardGlyphs,
) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::from_index(rank * 8 + file);
            let glyph = match game_state.piece_at(square) {
                Some(piece) => piece_glyph(piece, glyphs),
                None if highlights.contains(square) => '*',
                None => match glyphs {
                    BoardGlyphs::Unicode => '·',
                    BoardGlyphs::Ascii => '.',
                },
            };

            if highlights.contains(square) && game_state.piece_at(square).is_some() {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn piece_glyph(piece: Piece, glyphs: BoardGlyphs) -> char {
    if glyphs == BoardGlyphs::Ascii {
        return piece_to_fen_char(piece);
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
