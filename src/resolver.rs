// Axis-first direction resolution

use crate::types::{Coord, Direction};

/// Direction preferred when there is no target, or the target is the head itself
pub const DEFAULT_DIRECTION: Direction = Direction::Up;

/// Resolves the vertical offset to the target first, then the horizontal one
pub fn preferred_direction(target: Option<Coord>, head: Coord) -> Direction {
    let target = match target {
        Some(t) => t,
        None => return DEFAULT_DIRECTION,
    };

    if target.y != head.y {
        if target.y > head.y {
            Direction::Down
        } else {
            Direction::Up
        }
    } else if target.x != head.x {
        if target.x > head.x {
            Direction::Right
        } else {
            Direction::Left
        }
    } else {
        DEFAULT_DIRECTION
    }
}
