// Replay module for analyzing historical game states and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Replay the engine on historical states
// 3. Compare logged vs replayed moves
// 4. Generate analysis reports

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::engine::{decide, BoardSnapshot};
use crate::safety::MoveSafety;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Represents a single log entry from the debug JSONL file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogEntry {
    #[serde(default)]
    pub game_id: String,
    pub turn: i32,
    pub chosen_move: String,
    pub board: Board,
    pub you: Battlesnake,
    #[serde(default)]
    pub timestamp: String,
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub matches: bool,
    pub target: Option<Coord>,
    pub safety: MoveSafety,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
    pub redirected: usize,
    pub boxed: usize,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(verbose: bool) -> Self {
        ReplayEngine { verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &LogEntry) -> Result<ReplayResult, String> {
        let original_move = Direction::parse(&entry.chosen_move)?;

        let start_time = Instant::now();
        let snapshot = BoardSnapshot::from_turn(&entry.board, &entry.you);
        let decision = decide(&snapshot).map_err(|e| format!("Turn {}: {}", entry.turn, e))?;
        let computation_time_us = start_time.elapsed().as_micros();

        let matches = original_move == decision.chosen;

        if self.verbose {
            if matches {
                info!(
                    "Turn {}: match {} ({:?}, {}us)",
                    entry.turn,
                    decision.chosen.as_str(),
                    decision.safety,
                    computation_time_us
                );
            } else {
                warn!(
                    "Turn {}: mismatch, logged {} replayed {} ({:?}, {}us)",
                    entry.turn,
                    original_move.as_str(),
                    decision.chosen.as_str(),
                    decision.safety,
                    computation_time_us
                );
            }
        }

        Ok(ReplayResult {
            turn: entry.turn,
            original_move,
            replayed_move: decision.chosen,
            matches,
            target: decision.target.map(|t| t.coord),
            safety: decision.safety,
            computation_time_us,
        })
    }

    /// Replays all entries in parallel, keeping log order in the results
    ///
    /// Entries that fail to replay are logged and skipped.
    pub fn replay_all(&self, entries: &[LogEntry]) -> Vec<ReplayResult> {
        entries
            .par_iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[LogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", turn_num, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches: total_turns - matches,
            match_rate,
            redirected: results
                .iter()
                .filter(|r| r.safety == MoveSafety::Redirected)
                .count(),
            boxed: results.iter().filter(|r| r.safety == MoveSafety::Boxed).count(),
        }
    }

    /// Renders the replay summary: counts, safety outcomes, then one line per mismatch
    pub fn format_report(&self, results: &[ReplayResult]) -> String {
        let stats = self.generate_stats(results);
        let mut report = format!(
            "turns {} | matched {} ({:.1}%) | mismatched {} | redirected {} | boxed {}\n",
            stats.total_turns,
            stats.matches,
            stats.match_rate,
            stats.mismatches,
            stats.redirected,
            stats.boxed
        );

        for result in results.iter().filter(|r| !r.matches) {
            let target = result
                .target
                .map(|t| format!("({}, {})", t.x, t.y))
                .unwrap_or_else(|| "none".to_string());
            report.push_str(&format!(
                "turn {}: logged {}, replayed {} (target {}, {:?})\n",
                result.turn,
                result.original_move.as_str(),
                result.replayed_move.as_str(),
                target,
                result.safety
            ));
        }

        report
    }

    pub fn print_report(&self, results: &[ReplayResult]) {
        print!("{}", self.format_report(results));
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[LogEntry],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            let actual_move = Direction::parse(&entry.chosen_move)?;

            if !acceptable.contains(&actual_move) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    actual_move.as_str()
                ));
            }
        }

        Ok(())
    }
}

/// Parses "turn:move|move,turn:move" into expected moves per turn
pub fn parse_expected_moves(s: &str) -> Result<Vec<(i32, Vec<Direction>)>, String> {
    s.split(',')
        .map(|pair| {
            let parts: Vec<&str> = pair.trim().split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid format '{}'. Expected 'turn:move'", pair));
            }

            let turn = parts[0]
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;

            let moves = parts[1]
                .split('|')
                .map(Direction::parse)
                .collect::<Result<Vec<_>, _>>()?;

            Ok((turn, moves))
        })
        .collect()
}

/// Parses a comma-separated list of turn numbers
pub fn parse_turns(s: &str) -> Result<Vec<i32>, String> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", t, e))
        })
        .collect()
}

/// What the replay tool should do with the loaded log
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayMode {
    All,
    Turns(Vec<i32>),
    Validate(Vec<(i32, Vec<Direction>)>),
}

/// Parsed command line of the replay tool
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayArgs {
    pub log_file: String,
    pub mode: ReplayMode,
    pub verbose: bool,
}

/// Parses the replay tool's arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<ReplayArgs, String> {
    let (log_file, rest) = args.split_first().ok_or("Missing log file")?;
    let mut mode = None;
    let mut verbose = false;

    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--all" => mode = Some(ReplayMode::All),
            "--turns" => {
                let value = iter.next().ok_or("--turns requires an argument")?;
                mode = Some(ReplayMode::Turns(parse_turns(value)?));
            }
            "--validate" => {
                let value = iter.next().ok_or("--validate requires an argument")?;
                mode = Some(ReplayMode::Validate(parse_expected_moves(value)?));
            }
            "--verbose" => verbose = true,
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    let mode = mode.ok_or("Must specify --all, --turns, or --validate")?;

    Ok(ReplayArgs {
        log_file: log_file.clone(),
        mode,
        verbose,
    })
}
