// Nearest-food target selection

use serde::Serialize;
use std::collections::HashSet;

use crate::occupancy::OccupancyGrid;
use crate::types::Coord;

/// Per-cell record produced while scanning the board for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellScore {
    pub coord: Coord,
    pub is_food: bool,
    pub is_occupied: bool,
    pub distance: i32,
}

impl CellScore {
    /// Unoccupied food
    pub fn is_candidate(&self) -> bool {
        self.is_food && !self.is_occupied
    }
}

/// Scores every board cell in x-major, y-minor order
///
/// The scanned range is exactly the grid's width and height, so the food scan and
/// the occupancy grid always agree on which cells exist.
pub fn scan_cells<'a>(
    grid: &'a OccupancyGrid,
    food: &'a HashSet<Coord>,
    head: Coord,
) -> impl Iterator<Item = CellScore> + 'a {
    (0..grid.width()).flat_map(move |x| {
        (0..grid.height()).map(move |y| {
            let coord = Coord { x, y };
            CellScore {
                coord,
                is_food: food.contains(&coord),
                is_occupied: grid.is_occupied(&coord),
                distance: head.manhattan(&coord),
            }
        })
    })
}

/// Picks the closest unoccupied food cell, or `None` when there is none
///
/// Ties keep the cell seen first in scan order (lower x, then lower y).
pub fn select_target(grid: &OccupancyGrid, food: &[Coord], head: Coord) -> Option<CellScore> {
    let food: HashSet<Coord> = food.iter().copied().collect();
    let mut best: Option<CellScore> = None;

    for cell in scan_cells(grid, &food, head) {
        if !cell.is_candidate() {
            continue;
        }
        match best {
            Some(current) if cell.distance >= current.distance => {}
            _ => best = Some(cell),
        }
    }

    best
}
