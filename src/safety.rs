// One-ply safety check with a fixed-order fallback

use serde::Serialize;

use crate::occupancy::OccupancyGrid;
use crate::types::{Coord, Direction};

/// How the final direction relates to the preferred one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSafety {
    /// The preferred direction was safe
    Preferred,
    /// The preferred direction was unsafe; another direction was safe
    Redirected,
    /// No direction was safe; the preferred one is returned anyway
    Boxed,
}

/// Returns the preferred direction if it leads to a safe cell, else the first safe
/// direction in up, down, left, right order, else the preferred direction
pub fn validate(preferred: Direction, head: Coord, grid: &OccupancyGrid) -> (Direction, MoveSafety) {
    if grid.is_safe(&preferred.apply(&head)) {
        return (preferred, MoveSafety::Preferred);
    }

    Direction::all()
        .iter()
        .find(|dir| grid.is_safe(&dir.apply(&head)))
        .map(|&dir| (dir, MoveSafety::Redirected))
        .unwrap_or((preferred, MoveSafety::Boxed))
}
