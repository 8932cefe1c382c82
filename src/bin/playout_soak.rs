//! Seeded random-playout soak run over reachable positions.
//!
//! Run with:
//! `cargo run --release --bin playout_soak`
//! `RULES_CHESS_SOAK_GAMES=500 RULES_CHESS_SOAK_SEED=42 cargo run --release --bin playout_soak`

use std::time::Instant;

use rules_chess::chess_errors::ChessError;
use rules_chess::utils::random_playout::{run_playout_series, PlayoutConfig};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable {key}={value:?}");
            default
        }),
        Err(_) => default,
    }
}

fn main() -> Result<(), ChessError> {
    env_logger::init();

    let defaults = PlayoutConfig::default();
    let config = PlayoutConfig {
        games: env_or("RULES_CHESS_SOAK_GAMES", defaults.games),
        max_plies: env_or("RULES_CHESS_SOAK_PLIES", defaults.max_plies),
        base_seed: env_or("RULES_CHESS_SOAK_SEED", defaults.base_seed),
    };
    log::info!("soak config: {config:?}");

    let started = Instant::now();
    let stats = run_playout_series(&config)?;
    let elapsed = started.elapsed();

    println!("{}", stats.report());
    println!(
        "elapsed={:.2?} positions/s={:.0}",
        elapsed,
        stats.positions_checked as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    Ok(())
}
