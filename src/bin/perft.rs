//! Perft divide from the command line.
//!
//! ```text
//! perft <depth> <fen>
//! ```
//!
//! The FEN may be one quoted argument or its fields passed separately.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_movegen::board::{init_attack_tables, Position};

const USAGE: &str = "usage: perft <depth> <fen>";

fn parse_args(args: &[String]) -> Result<(u32, Position), String> {
    let (depth, fen) = match args {
        [depth, fen @ ..] if !fen.is_empty() => (depth, fen.join(" ")),
        _ => return Err("missing arguments".to_string()),
    };
    let depth: u32 = depth
        .parse()
        .map_err(|_| format!("invalid depth '{depth}'"))?;
    let position = Position::try_from_fen(&fen).map_err(|err| format!("invalid FEN: {err}"))?;
    Ok((depth, position))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let (depth, position) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    init_attack_tables();
    let start = Instant::now();
    let divide = position.perft_divide(depth);
    let nodes: u64 = if depth == 0 {
        1
    } else {
        divide.iter().map(|(_, count)| count).sum()
    };
    let elapsed = start.elapsed();

    for (mv, count) in &divide {
        println!("{mv}: {count}");
    }
    println!();
    println!("Nodes: {nodes}");
    println!("Time: {} ms", elapsed.as_millis());
    let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!("NPS: {}", nps as u64);
    ExitCode::SUCCESS
}
