//! Search the initial position from the command line and print the analysis.
//!
//! Usage: `analyze [easy|medium|hard|expert] [seed]`

use std::env;

use camelot_engine::{Color, Difficulty, Engine, Position};

fn main() {
    let mut args = env::args().skip(1);

    let difficulty = match args.next() {
        Some(text) => match text.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        },
        None => Difficulty::Medium,
    };

    let mut engine = match args.next() {
        Some(text) => match text.parse::<u64>() {
            Ok(seed) => Engine::with_seed(difficulty.config(), seed),
            Err(_) => {
                eprintln!("Seed must be an unsigned integer, got '{text}'");
                return;
            }
        },
        None => Engine::from_difficulty(difficulty),
    };

    let position = Position::initial();
    println!("{position}");
    println!("thinking as White at difficulty {difficulty}...");

    let analysis = engine.search(&position, Color::White);
    match &analysis.best_move {
        Some(turn) => println!("best move:  {turn}"),
        None => println!("no legal turn: White has lost"),
    }
    println!("evaluation: {}", analysis.format_evaluation());
    println!(
        "depth {}  nodes {}  ({} nodes/s, {} ms)",
        analysis.depth_reached, analysis.nodes_searched, analysis.nodes_per_second, analysis.time_ms
    );
    if !analysis.principal_variation.is_empty() {
        println!("line:       {}", analysis.principal_variation.join(" "));
    }
}
