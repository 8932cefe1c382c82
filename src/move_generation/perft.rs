//! Perft: exhaustive move-path counting used to validate move generation
//! against published node counts.

use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        match mv.kind {
            MoveKind::EnPassantCapture => self.en_passant += 1,
            MoveKind::CastleKingside | MoveKind::CastleQueenside => self.castles += 1,
            MoveKind::Promotion => self.promotions += 1,
            _ => {}
        }
    }
}

/// Count leaf nodes and leaf move kinds. Check statistics are left at zero.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    perft_internal(generator, game_state, depth, false)
}

/// Like `perft`, additionally classifying every leaf position's status.
pub fn perft_with_checks<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    perft_internal(generator, game_state, depth, true)
}

/// Convenience wrapper over `LegalMoveGenerator`.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_internal<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    classify: bool,
) -> PerftCounts {
    let mut total = PerftCounts::default();

    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in generator.generate_moves(game_state) {
        if depth == 1 {
            total.record_leaf(&mv);
            if classify {
                let mut child = game_state.clone();
                apply_move_in_place(&mut child, &mv);
                match evaluate_status(&child) {
                    GameStatus::Check(_) => total.checks += 1,
                    GameStatus::Checkmate(_) => {
                        total.checks += 1;
                        total.checkmates += 1;
                    }
                    GameStatus::InProgress | GameStatus::Stalemate => {}
                }
            }
            continue;
        }

        let mut child = game_state.clone();
        apply_move_in_place(&mut child, &mv);
        total.merge(perft_internal(generator, &child, depth - 1, classify));
    }

    total
}

/// Per-root-move node counts, for diffing against a reference engine.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_moves(game_state)
        .into_iter()
        .map(|mv| {
            let mut child = game_state.clone();
            apply_move_in_place(&mut child, &mv);
            let nodes = perft(generator, &child, depth - 1).nodes;
            (mv, nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn nodes(fen: &str, depth: u8) -> usize {
        let game = GameState::from_fen(fen).expect("perft FEN should parse");
        perft_legal(&game, depth).nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft_legal(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        assert_eq!(nodes(STARTING_POSITION_FEN, 1), 20);
        assert_eq!(nodes(STARTING_POSITION_FEN, 2), 400);
        assert_eq!(nodes(STARTING_POSITION_FEN, 3), 8_902);
    }

    #[test]
    fn start_position_depth_three_leaf_statistics() {
        let game = GameState::new_game();
        assert_eq!(
            perft_with_checks(&LegalMoveGenerator, &game, 3),
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_node_counts_and_statistics() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete should parse");
        let depth_one = perft_with_checks(&LegalMoveGenerator, &game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        assert_eq!(
            perft_with_checks(&LegalMoveGenerator, &game, 2),
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn endgame_position_exercises_en_passant_pins() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(nodes(fen, 1), 14);
        assert_eq!(nodes(fen, 2), 191);
        assert_eq!(nodes(fen, 3), 2_812);
    }

    #[test]
    fn promotion_heavy_position_node_counts() {
        let fen = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        assert_eq!(nodes(fen, 1), 6);
        assert_eq!(nodes(fen, 2), 264);
        assert_eq!(nodes(fen, 3), 9_467);
    }

    #[test]
    fn tricky_castling_position_node_counts() {
        let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        assert_eq!(nodes(fen, 1), 44);
        assert_eq!(nodes(fen, 2), 1_486);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, n)| *n == 20));
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }

    #[test]
    fn pseudo_legal_perft_overcounts_when_pins_exist() {
        let game = GameState::from_fen("k3r3/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let pseudo = perft(&PseudoLegalMoveGenerator, &game, 1).nodes;
        let legal = perft(&LegalMoveGenerator, &game, 1).nodes;
        assert!(pseudo > legal);
        assert_eq!(pseudo - legal, 9);
    }
}
