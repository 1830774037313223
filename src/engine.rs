// Move decision engine
//
// Turns one board snapshot into one direction:
// occupancy grid -> nearest food -> axis-first direction -> safety check.
// Every call owns its grid and scores, so calls for different games can run
// concurrently without coordination.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::occupancy::OccupancyGrid;
use crate::resolver::preferred_direction;
use crate::safety::{validate, MoveSafety};
use crate::target::{select_target, CellScore};
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Largest board the engine will allocate a grid for (official boards top out at 25x25)
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// Reasons a snapshot cannot be decided on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("snake body is empty")]
    EmptyBody,
    #[error("head ({x}, {y}) is outside the {width}x{height} board")]
    HeadOutOfBounds { x: i32, y: i32, width: i32, height: i32 },
    #[error("board {width}x{height} exceeds {max} cells")]
    BoardTooLarge { width: i32, height: i32, max: usize },
}

/// Immutable per-turn input to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub food: Vec<Coord>,
    /// Our snake's body, head first
    pub body: Vec<Coord>,
}

impl BoardSnapshot {
    pub fn new(width: i32, height: i32, food: Vec<Coord>, body: Vec<Coord>) -> Self {
        BoardSnapshot {
            width,
            height,
            food,
            body,
        }
    }

    /// Builds the snapshot from a parsed turn payload
    pub fn from_turn(board: &Board, you: &Battlesnake) -> Self {
        BoardSnapshot {
            width: board.width,
            height: board.height,
            food: board.food.clone(),
            body: you.body.clone(),
        }
    }

    /// Checks the input contract and returns the head
    pub fn validate(&self) -> Result<Coord, SnapshotError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SnapshotError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let cells = (self.width as usize).checked_mul(self.height as usize);
        if cells.map_or(true, |c| c > MAX_BOARD_CELLS) {
            return Err(SnapshotError::BoardTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_CELLS,
            });
        }

        let head = *self.body.first().ok_or(SnapshotError::EmptyBody)?;

        if head.x < 0 || head.x >= self.width || head.y < 0 || head.y >= self.height {
            return Err(SnapshotError::HeadOutOfBounds {
                x: head.x,
                y: head.y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(head)
    }
}

/// Outcome of one move computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Closest unoccupied food, if any
    pub target: Option<CellScore>,
    /// Axis-first direction toward the target
    pub preferred: Direction,
    /// Direction to send back
    pub chosen: Direction,
    pub safety: MoveSafety,
}

/// Runs the full pipeline and reports every intermediate choice
pub fn decide(snapshot: &BoardSnapshot) -> Result<Decision, SnapshotError> {
    let head = snapshot.validate()?;

    let grid = OccupancyGrid::build(snapshot.width, snapshot.height, &snapshot.body);
    let target = select_target(&grid, &snapshot.food, head);
    let preferred = preferred_direction(target.map(|t| t.coord), head);
    let (chosen, safety) = validate(preferred, head, &grid);

    debug!(
        "head=({}, {}) target={:?} preferred={} chosen={} safety={:?}",
        head.x,
        head.y,
        target.map(|t| (t.coord.x, t.coord.y, t.distance)),
        preferred.as_str(),
        chosen.as_str(),
        safety
    );

    Ok(Decision {
        target,
        preferred,
        chosen,
        safety,
    })
}

/// Chooses the direction to move this turn
pub fn decide_move(snapshot: &BoardSnapshot) -> Result<Direction, SnapshotError> {
    decide(snapshot).map(|d| d.chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(i32, i32)]) -> Vec<Coord> {
        points.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    #[test]
    fn test_rejects_empty_body() {
        let snapshot = BoardSnapshot::new(11, 11, vec![], vec![]);
        assert_eq!(decide_move(&snapshot), Err(SnapshotError::EmptyBody));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let snapshot = BoardSnapshot::new(0, 11, vec![], coords(&[(0, 0)]));
        assert_eq!(
            decide_move(&snapshot),
            Err(SnapshotError::InvalidDimensions { width: 0, height: 11 })
        );
    }

    #[test]
    fn test_rejects_head_outside_board() {
        let snapshot = BoardSnapshot::new(11, 11, vec![], coords(&[(11, 3)]));
        assert!(matches!(
            decide_move(&snapshot),
            Err(SnapshotError::HeadOutOfBounds { x: 11, y: 3, .. })
        ));
    }

    #[test]
    fn test_decision_reports_target_and_safety() {
        let snapshot = BoardSnapshot::new(
            16,
            16,
            coords(&[(5, 2)]),
            coords(&[(5, 5), (5, 6), (5, 7)]),
        );

        let decision = decide(&snapshot).unwrap();
        let target = decision.target.unwrap();
        assert_eq!(target.coord, Coord::new(5, 2));
        assert_eq!(target.distance, 3);
        assert_eq!(decision.preferred, Direction::Up);
        assert_eq!(decision.chosen, Direction::Up);
        assert_eq!(decision.safety, MoveSafety::Preferred);
    }

    #[test]
    fn test_largest_allowed_board_is_accepted() {
        let snapshot = BoardSnapshot::new(256, 256, vec![], coords(&[(255, 255)]));
        assert_eq!(decide_move(&snapshot), Ok(Direction::Up));

        let snapshot = BoardSnapshot::new(257, 256, vec![], coords(&[(0, 0)]));
        assert!(matches!(
            decide_move(&snapshot),
            Err(SnapshotError::BoardTooLarge { width: 257, height: 256, .. })
        ));
    }

    #[test]
    fn test_error_messages_are_readable() {
        let err = SnapshotError::HeadOutOfBounds { x: -1, y: 0, width: 11, height: 11 };
        assert_eq!(err.to_string(), "head (-1, 0) is outside the 11x11 board");
    }
}
