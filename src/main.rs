//! Console driver for the rules engine.
//!
//! Run with:
//! `cargo run --bin rules_chess`
//! `RULES_CHESS_ASCII_BOARD=1 RUST_LOG=debug cargo run --bin rules_chess`

use rules_chess::chess_errors::ChessError;
use rules_chess::session::console::run_stdio_loop;
use rules_chess::session::session_config::SessionConfig;

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let config = SessionConfig::from_env();
    log::info!("starting console with {config:?}");
    run_stdio_loop(config)
}
