//! Line-oriented console front-end over a `GameSession`.
//!
//! Stands in for the input and render collaborators: each line is one intent
//! (`moves e2`, `e2e4`, `undo`, ...) and replies are plain text.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::SquareSet;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::session::game_session::GameSession;
use crate::session::session_config::SessionConfig;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::render_game_state::{render_with_highlights, BoardGlyphs};

const HELP_TEXT: &str = "commands: board | moves [square] | <move e.g. e2e4, e7e8q> | undo | fen | status | new | help | quit";

pub fn run_stdio_loop(config: SessionConfig) -> Result<(), ChessError> {
    let mut console = Console::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(err) = console.run(stdin.lock(), &mut stdout) {
        log::warn!("console stopped on I/O error: {err}");
    }

    Ok(())
}

pub struct Console {
    session: GameSession,
}

impl Console {
    pub fn new(config: SessionConfig) -> Result<Self, ChessError> {
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    #[inline]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn glyphs(&self) -> BoardGlyphs {
        if self.session.config().unicode_board {
            BoardGlyphs::Unicode
        } else {
            BoardGlyphs::Ascii
        }
    }

    fn print_board(&self, out: &mut impl Write, highlights: SquareSet) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_with_highlights(self.session.state(), highlights, self.glyphs())
        )?;
        writeln!(
            out,
            "{:?} to move, {}",
            self.session.state().side_to_move(),
            self.session.status()
        )
    }

    /// Print the board, then handle lines until `quit`, end of input, or the
    /// first read or write failure.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.print_board(out, SquareSet::EMPTY)?;
        out.flush()?;

        for line in input.lines() {
            let quit = self.handle_command(&line?, out)?;
            out.flush()?;
            if quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one input line. Returns `Ok(true)` when the console should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "board" => self.print_board(out, SquareSet::EMPTY)?,
            "moves" => match parts.next() {
                Some(square_text) => match algebraic_to_square(square_text) {
                    Ok(square) => {
                        let moves = self.session.select_square(square);
                        let targets: SquareSet = moves.iter().map(|m| m.to).collect();
                        let mut highlights = targets;
                        if !moves.is_empty() {
                            highlights.insert(square);
                        }
                        self.print_board(out, highlights)?;
                        writeln!(out, "{}", join_moves(&moves))?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                None => {
                    let moves = legal_moves(self.session.state());
                    writeln!(out, "{}", join_moves(&moves))?;
                }
            },
            "undo" => match self.session.undo() {
                Ok(()) => self.print_board(out, SquareSet::EMPTY)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "fen" => writeln!(out, "{}", self.session.state().get_fen())?,
            "status" => writeln!(out, "{}", self.session.status())?,
            "new" => match self.session.reset() {
                Ok(()) => self.print_board(out, SquareSet::EMPTY)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            text => match self.session.play_long_algebraic(text) {
                Ok(_) => self.print_board(out, SquareSet::EMPTY)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }

        Ok(false)
    }
}

fn join_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "(no legal moves)".to_owned();
    }
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(console: &mut Console, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = console
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (quit, String::from_utf8(out).expect("console output is UTF-8"))
    }

    fn ascii_console() -> Console {
        Console::new(SessionConfig {
            start_fen: None,
            unicode_board: false,
        })
        .expect("default console")
    }

    #[test]
    fn moves_then_play_then_undo() {
        let mut console = ascii_console();

        let (_, text) = run(&mut console, "moves g1");
        assert!(text.ends_with("g1f3 g1h3\n"), "{text}");
        assert!(text.contains("[N]"));

        let (quit, text) = run(&mut console, "e2e4");
        assert!(!quit);
        assert!(text.contains("Black to move, in progress"), "{text}");

        let (_, text) = run(&mut console, "fen");
        assert_eq!(text, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n");

        run(&mut console, "undo");
        let (_, text) = run(&mut console, "undo");
        assert_eq!(text, "error: no move to undo\n");
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let mut console = ascii_console();
        let (quit, text) = run(&mut console, "e2e5");
        assert!(!quit);
        assert_eq!(text, "error: illegal move e2e5\n");

        let (_, text) = run(&mut console, "moves z9");
        assert!(text.starts_with("error: "));

        let (_, text) = run(&mut console, "status");
        assert_eq!(text, "in progress\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run_stops_at_quit_and_ignores_later_lines() {
        let mut console = ascii_console();
        let mut out = Vec::new();
        console
            .run("e2e4\nquit\ne7e5\n".as_bytes(), &mut out)
            .expect("writing to a Vec cannot fail");
        assert_eq!(console.session().moves_played(), 1);
        let text = String::from_utf8(out).expect("console output is UTF-8");
        assert!(text.starts_with("   a  b  c"));
    }

    #[test]
    fn run_reports_the_first_write_failure() {
        let mut console = ascii_console();
        let err = console
            .run("e2e4\n".as_bytes(), &mut BrokenPipe)
            .expect_err("a closed output must stop the loop");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(console.session().moves_played(), 0);
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut console = ascii_console();
        assert!(!run(&mut console, "   ").0);
        assert!(run(&mut console, "quit").0);
    }
}
