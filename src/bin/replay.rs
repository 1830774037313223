// Standalone replay tool for analyzing debug logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --turns <turn1,turn2>  Replay specific turns (comma-separated)
//   --validate             Check the logged moves against expected ones
//   --verbose              Show detailed output for each turn

use std::env;
use std::process;

use greedy_snake::replay::{parse_args, ReplayEngine, ReplayMode};

fn print_usage() {
    eprintln!("Greedy Snake Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --turns <T1,T2,...>     Replay specific turns (comma-separated)");
    eprintln!("  --validate <T:M,...>    Validate expected moves (format: turn:move,...)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  replay battlesnake_debug.jsonl --all");
    eprintln!("  replay battlesnake_debug.jsonl --turns 5,10,15");
    eprintln!("  replay battlesnake_debug.jsonl --validate 5:up,10:right|down");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help") {
        print_usage();
        process::exit(0);
    }

    let args = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage();
        process::exit(1);
    });

    println!("Replay log file: {}", args.log_file);

    let engine = ReplayEngine::new(args.verbose);

    let entries = match engine.load_log_file(&args.log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", entries.len());

    match args.mode {
        ReplayMode::All => {
            let results = engine.replay_all(&entries);
            engine.print_report(&results);
        }
        ReplayMode::Turns(turns) => match engine.replay_turns(&entries, &turns) {
            Ok(results) => engine.print_report(&results),
            Err(e) => {
                eprintln!("Error during replay: {}", e);
                process::exit(1);
            }
        },
        ReplayMode::Validate(expected_moves) => {
            match engine.validate_expected_moves(&entries, &expected_moves) {
                Ok(()) => println!("All {} expected move(s) validated", expected_moves.len()),
                Err(e) => {
                    eprintln!("Validation failed: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
