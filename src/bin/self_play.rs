//! Engine-versus-engine self-play runner.
//!
//! Usage:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 3 --plies 80 --seed 7 --verbose`

use chessmaster_engine::chess_errors::ChessErrors;
use chessmaster_engine::engines::engine_minimax::MinimaxEngine;
use chessmaster_engine::engines::engine_trait::{Engine, SearchParams};
use chessmaster_engine::game_state::chess_types::Color;
use chessmaster_engine::game_state::game_state::GameState;
use chessmaster_engine::game_state::game_status::GameStatus;
use chessmaster_engine::move_generation::legal_move_apply::{execute_move, ExecuteOutcome};
use chessmaster_engine::search::minimax_search::SearchConfig;
use chessmaster_engine::utils::render_game_state::render_game_state;
use log::{error, info};

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn run(depth: u8, max_plies: usize, seed: u64) -> Result<(), ChessErrors> {
    let config = SearchConfig { depth };
    let mut light = MinimaxEngine::with_seed(config, seed);
    let mut dark = MinimaxEngine::with_seed(config, seed.wrapping_add(1));
    let mut game = GameState::new_game();
    let mut status = GameStatus::InProgress;
    info!("light: {} / dark: {}", light.name(), dark.name());

    while game.ply_count() < max_plies && !status.is_terminal() {
        let engine: &mut dyn Engine = match game.side_to_move {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let output = engine.choose_move(&game, &SearchParams::default())?;
        let mv = output.best_move;
        status = match execute_move(&mut game, mv.from, mv.to, mv.promotion)? {
            ExecuteOutcome::Applied(status) => status,
            ExecuteOutcome::PromotionRequired { from, to } => {
                return Err(ChessErrors::IllegalMove { from, to })
            }
        };

        println!(
            "{:>3}. {}{} {:?}",
            game.ply_count(),
            mv.from.to_algebraic(),
            mv.to.to_algebraic(),
            status
        );
        println!("{}\n", render_game_state(&game));
    }

    match status {
        GameStatus::Checkmate => info!(
            "{:?} wins by checkmate after {} plies",
            game.side_to_move.opposite(),
            game.ply_count()
        ),
        GameStatus::Stalemate => info!("draw by stalemate after {} plies", game.ply_count()),
        _ => info!("stopped after {} plies", game.ply_count()),
    }
    println!(
        "captured by light: {}, captured by dark: {}",
        game.captured_pieces.by(Color::Light).len(),
        game.captured_pieces.by(Color::Dark).len()
    );
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = simple_logger::init_with_level(level) {
        eprintln!("logger init failed: {err}");
    }

    let depth = parse_arg(&args, "--depth", SearchConfig::default().depth).max(1);
    let max_plies = parse_arg(&args, "--plies", 200usize);
    let seed = parse_arg(&args, "--seed", rand::random::<u64>());
    info!("self-play depth={depth} plies={max_plies} seed={seed}");

    if let Err(err) = run(depth, max_plies, seed) {
        error!("self-play aborted: {err}");
        std::process::exit(1);
    }
}
