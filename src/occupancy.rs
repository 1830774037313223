// Occupancy grid for a single turn
//
// Marks every board cell covered by our snake's body. The grid is built fresh
// for each move computation and dropped with it.

use crate::types::Coord;

/// Boolean occupancy map over a `width` x `height` board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Builds the grid by indexing each body segment straight into its cell
    ///
    /// Segments outside the board are ignored. Non-positive dimensions yield an empty grid.
    pub fn build(width: i32, height: i32, body: &[Coord]) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut grid = OccupancyGrid {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        };

        for segment in body {
            if let Some(idx) = grid.index(segment) {
                grid.cells[idx] = true;
            }
        }

        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the coordinate lies on the board
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Whether a body segment covers the cell. Off-board cells are never occupied.
    pub fn is_occupied(&self, coord: &Coord) -> bool {
        self.index(coord).map_or(false, |idx| self.cells[idx])
    }

    /// In bounds and unoccupied
    pub fn is_safe(&self, coord: &Coord) -> bool {
        self.in_bounds(coord) && !self.is_occupied(coord)
    }

    #[cfg(test)]
    fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    // x-major layout, matching the scan order of the target selector
    fn index(&self, coord: &Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some((coord.x as usize) * (self.height as usize) + coord.y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_cells_are_occupied() {
        let body = vec![Coord::new(5, 5), Coord::new(5, 6), Coord::new(5, 7)];
        let grid = OccupancyGrid::build(16, 16, &body);

        for segment in &body {
            assert!(grid.is_occupied(segment));
        }
        assert!(!grid.is_occupied(&Coord::new(5, 4)));
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn test_stacked_segments_count_once() {
        // Freshly spawned snakes have every segment on the same cell
        let body = vec![Coord::new(1, 1); 3];
        let grid = OccupancyGrid::build(11, 11, &body);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_range_segments_are_ignored() {
        let body = vec![Coord::new(0, 0), Coord::new(-1, 0), Coord::new(0, 11), Coord::new(20, 3)];
        let grid = OccupancyGrid::build(11, 11, &body);

        assert_eq!(grid.occupied_count(), 1);
        assert!(!grid.is_occupied(&Coord::new(-1, 0)));
    }

    #[test]
    fn test_bounds_follow_declared_size() {
        let grid = OccupancyGrid::build(7, 19, &[]);

        assert!(grid.in_bounds(&Coord::new(6, 18)));
        assert!(!grid.in_bounds(&Coord::new(7, 0)));
        assert!(!grid.in_bounds(&Coord::new(0, 19)));
        assert!(!grid.is_safe(&Coord::new(0, -1)));
        assert!(grid.is_safe(&Coord::new(0, 0)));
    }

    #[test]
    fn test_non_positive_dimensions_give_empty_grid() {
        let grid = OccupancyGrid::build(0, -3, &[Coord::new(0, 0)]);
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.in_bounds(&Coord::new(0, 0)));
    }
}
