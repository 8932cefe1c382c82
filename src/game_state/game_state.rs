//! Board State: occupancy plus the auxiliary rule state.
//!
//! `GameState` is plain data. The mailbox (`Square -> Option<Piece>`) is
//! authoritative; the per-piece and per-color square sets are caches that only
//! `put_piece`/`take_piece` touch, so the two views cannot drift apart.
//! Only the move applier (and position setup) mutates a state.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::MAX_PIECES_PER_SIDE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: [Option<Piece>; 64],

    // [color][piece_kind]
    pieces: [[SquareSet; 6]; 2],
    occupancy_by_color: [SquareSet; 2],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            pieces: [[SquareSet::EMPTY; 6]; 2],
            occupancy_by_color: [SquareSet::EMPTY; 2],

            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no rights. Used as a blank for position setup.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard initial position.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for color in Color::BOTH {
            for (file, kind) in back_rank.iter().enumerate() {
                let file = file as u8;
                game_state.put_piece(
                    Square::from_index(color.home_rank() * 8 + file),
                    Piece::new(color, *kind),
                );
                game_state.put_piece(
                    Square::from_index(color.pawn_start_rank() * 8 + file),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }

        game_state.castling_rights = CastlingRights::all();
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index() as usize]
    }

    /// Read-only view of every occupied square, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| piece.map(|p| (Square::from_index(idx as u8), p)))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> SquareSet {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> SquareSet {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> SquareSet {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).first()
    }

    /// Place `piece` on an empty square.
    pub(crate) fn put_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(self.board[square.index() as usize].is_none());
        self.board[square.index() as usize] = Some(piece);
        self.pieces[piece.color.index()][piece.kind.index()].insert(square);
        self.occupancy_by_color[piece.color.index()].insert(square);
    }

    /// Remove and return whatever stands on `square`.
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board[square.index() as usize].take()?;
        self.pieces[piece.color.index()][piece.kind.index()].remove(square);
        self.occupancy_by_color[piece.color.index()].remove(square);
        Some(piece)
    }

    /// Check the invariants every playable position satisfies: piece counts,
    /// pawn ranks, the side that just moved not being in check, and an en
    /// passant target that a double push could have produced.
    pub fn validate(&self) -> ChessResult<()> {
        for color in Color::BOTH {
            let kings = self.pieces_of(color, PieceKind::King).len();
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} has {kings} kings"
                )));
            }

            let count = self.occupancy(color).len();
            if count > MAX_PIECES_PER_SIDE {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} has {count} pieces"
                )));
            }
        }

        let pawns = self.pieces_of(Color::White, PieceKind::Pawn)
            | self.pieces_of(Color::Black, PieceKind::Pawn);
        if pawns
            .iter()
            .any(|square| square.rank() == 0 || square.rank() == 7)
        {
            return Err(ChessError::InvalidPosition(
                "pawn on first or last rank".to_owned(),
            ));
        }

        let waiting = self.side_to_move.opposite();
        if is_king_in_check(self, waiting) {
            return Err(ChessError::InvalidPosition(format!(
                "{waiting:?} is in check but not to move"
            )));
        }

        self.validate_en_passant()
    }

    /// The target lies behind an enemy pawn that just advanced two squares,
    /// so both the target and the pawn's origin square are empty.
    fn validate_en_passant(&self) -> ChessResult<()> {
        let Some(target) = self.en_passant_square else {
            return Ok(());
        };

        let pusher = self.side_to_move.opposite();
        let expected_rank = pusher.pawn_start_rank() as i8 + pusher.pawn_step();
        let pawn_square = target.offset(0, pusher.pawn_step());
        let origin_square = target.offset(0, -pusher.pawn_step());

        let consistent = target.rank() as i8 == expected_rank
            && self.piece_at(target).is_none()
            && origin_square.is_some_and(|square| self.piece_at(square).is_none())
            && pawn_square.is_some_and(|square| {
                self.piece_at(square) == Some(Piece::new(pusher, PieceKind::Pawn))
            });

        if consistent {
            Ok(())
        } else {
            Err(ChessError::InvalidPosition(format!(
                "en passant target {target} does not follow a {pusher:?} double push"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn new_game_has_one_king_and_sixteen_pieces_per_side() {
        let game = GameState::new_game();
        for color in Color::BOTH {
            assert_eq!(game.pieces_of(color, PieceKind::King).len(), 1);
            assert_eq!(game.occupancy(color).len(), 16);
        }
        assert_eq!(
            game.king_square(Color::Black),
            Some(algebraic_to_square("e8").expect("e8"))
        );
        game.validate().expect("start position is valid");
    }

    #[test]
    fn take_piece_keeps_caches_in_step() {
        let mut game = GameState::new_game();
        let e2 = algebraic_to_square("e2").expect("e2");
        let piece = game.take_piece(e2).expect("pawn on e2");
        assert_eq!(piece, Piece::new(Color::White, PieceKind::Pawn));
        assert!(!game.occupancy(Color::White).contains(e2));
        assert!(!game.pieces_of(Color::White, PieceKind::Pawn).contains(e2));
        assert_eq!(game.take_piece(e2), None);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut game = GameState::new_game();
        let e1 = algebraic_to_square("e1").expect("e1");
        game.take_piece(e1);
        assert!(game.validate().is_err());
    }
}
