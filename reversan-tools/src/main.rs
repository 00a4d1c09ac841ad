//! Micro-profiling and perft driver for the board core.

use clap::{Parser, Subcommand};
use log::info;
use reversan_board::test_utils::perft;
use reversan_board::{Board, Color, Position};
use std::error::Error;
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "reversan-profile", version, about = "Time the Reversan board operations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time legal_moves, evaluate and apply_move over the named layouts.
    Profile {
        /// Calls per operation.
        #[arg(long, default_value_t = 10_000_000)]
        iterations: u64,
    },
    /// Count game-tree leaves below the standard start.
    Perft {
        #[arg(long, default_value_t = 8)]
        depth: u64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Profile { iterations } => profile(iterations),
        Command::Perft { depth } => {
            let start = Instant::now();
            let leaves = perft::run_perft(depth);
            info!("perft({}) = {} in {:?}", depth, leaves, start.elapsed());
            Ok(())
        }
    }
}

/// Alternates colors and cycles through several layouts so the branch
/// predictor cannot learn a single board.
fn profile(iterations: u64) -> Result<(), Box<dyn Error>> {
    if iterations == 0 {
        return Err("--iterations must be positive".into());
    }

    let boards: Vec<Board> = Position::ALL
        .iter()
        .map(|&position| Board::make_initial(position))
        .collect();
    let pick = |i: u64| {
        let color = if i & 1 == 1 { Color::White } else { Color::Black };
        (boards[(i % boards.len() as u64) as usize], color)
    };

    let start = Instant::now();
    for i in 0..iterations {
        let (board, color) = pick(i);
        black_box(black_box(board).legal_moves(color));
    }
    report("legal_moves", start.elapsed(), iterations, "");

    let start = Instant::now();
    for i in 0..iterations {
        let (board, _) = pick(i);
        black_box(black_box(board).evaluate());
    }
    report("evaluate", start.elapsed(), iterations, "");

    let start = Instant::now();
    for i in 0..iterations {
        let (mut board, color) = pick(i);
        // The iterator yields the lowest set bit first.
        if let Some(mv) = black_box(board).legal_moves(color).next() {
            board.apply_move(color, mv);
        }
        black_box(board.white() ^ board.black());
    }
    report("apply_move", start.elapsed(), iterations, ", includes legal_moves");

    Ok(())
}

fn report(name: &str, elapsed: Duration, iterations: u64, note: &str) {
    let ms = elapsed.as_secs_f64() * 1e3;
    let ns_per_call = elapsed.as_secs_f64() * 1e9 / iterations as f64;
    info!(
        "{:<11}: {:.1} ms total, {:.2} ns/call ({} iters{})",
        name, ms, ns_per_call, iterations, note
    );
}
