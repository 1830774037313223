// Tests for the replay module
//
// Covers:
// - Loading JSONL debug logs
// - Replaying all or selected turns
// - Validating expected moves
// - Generating statistics

use greedy_snake::replay::{parse_expected_moves, ReplayEngine};
use greedy_snake::safety::MoveSafety;
use greedy_snake::types::{Coord, Direction};
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_load_log_file_food_chase() {
    let engine = ReplayEngine::new(false);

    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .expect("Failed to load food_chase.jsonl");

    assert_eq!(entries.len(), 4, "Expected 4 log entries");
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.turn, i as i32, "Turn number should match index");
        assert_eq!(entry.game_id, "food-chase");
    }
    assert_eq!(entries[0].chosen_move, "up");
    assert_eq!(entries[0].you.body[0], Coord::new(5, 5));
}

#[test]
fn test_load_log_file_skips_blank_lines() {
    let engine = ReplayEngine::new(false);

    let entries = engine
        .load_log_file(fixture_path("malformed_turns.jsonl"))
        .expect("Failed to load malformed_turns.jsonl");

    assert_eq!(entries.len(), 3);
}

#[test]
fn test_load_missing_file_errors() {
    let engine = ReplayEngine::new(false);
    assert!(engine.load_log_file(fixture_path("does_not_exist.jsonl")).is_err());
}

#[test]
fn test_replay_all_finds_mismatch() {
    let engine = ReplayEngine::new(true);
    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .unwrap();

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 4);

    // Results keep log order even though replay runs in parallel
    let turns: Vec<i32> = results.iter().map(|r| r.turn).collect();
    assert_eq!(turns, vec![0, 1, 2, 3]);

    // Turn 2 was logged as "left" but the engine heads up toward the food
    let turn_two = &results[2];
    assert!(!turn_two.matches);
    assert_eq!(turn_two.original_move, Direction::Left);
    assert_eq!(turn_two.replayed_move, Direction::Up);
    assert_eq!(turn_two.target, Some(Coord::new(5, 2)));

    // Turn 3 has no food and sits on the top wall
    let turn_three = &results[3];
    assert!(turn_three.matches);
    assert_eq!(turn_three.target, None);
    assert_eq!(turn_three.safety, MoveSafety::Redirected);
}

#[test]
fn test_generate_stats() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .unwrap();

    let stats = engine.generate_stats(&engine.replay_all(&entries));
    assert_eq!(stats.total_turns, 4);
    assert_eq!(stats.matches, 3);
    assert_eq!(stats.mismatches, 1);
    assert!((stats.match_rate - 75.0).abs() < f64::EPSILON);
    assert_eq!(stats.redirected, 1);
    assert_eq!(stats.boxed, 0);
}

#[test]
fn test_replay_all_skips_malformed_turns() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("malformed_turns.jsonl"))
        .unwrap();

    let results = engine.replay_all(&entries);
    let turns: Vec<i32> = results.iter().map(|r| r.turn).collect();
    assert_eq!(turns, vec![0, 2]);
    assert!(results.iter().all(|r| r.matches));
}

#[test]
fn test_replay_entry_reports_malformed_turn() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("malformed_turns.jsonl"))
        .unwrap();

    let err = engine.replay_entry(&entries[1]).unwrap_err();
    assert!(err.contains("empty"), "unexpected error: {}", err);
}

#[test]
fn test_replay_specific_turns() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .unwrap();

    let results = engine.replay_turns(&entries, &[1, 3]).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].turn, 1);
    assert_eq!(results[1].turn, 3);

    assert!(engine.replay_turns(&entries, &[42]).is_err());
}

#[test]
fn test_validate_expected_moves() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .unwrap();

    let expected = parse_expected_moves("0:up,2:left|right,3:down").unwrap();
    assert!(engine.validate_expected_moves(&entries, &expected).is_ok());

    let expected = parse_expected_moves("1:down").unwrap();
    let err = engine.validate_expected_moves(&entries, &expected).unwrap_err();
    assert!(err.contains("Turn 1"));

    let expected = parse_expected_moves("9:up").unwrap();
    assert!(engine.validate_expected_moves(&entries, &expected).is_err());
}

#[test]
fn test_report_summarizes_food_chase() {
    let engine = ReplayEngine::new(false);
    let entries = engine
        .load_log_file(fixture_path("food_chase.jsonl"))
        .unwrap();

    let report = engine.format_report(&engine.replay_all(&entries));
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines,
        vec![
            "turns 4 | matched 3 (75.0%) | mismatched 1 | redirected 1 | boxed 0",
            "turn 2: logged left, replayed up (target (5, 2), Preferred)",
        ]
    );
}
