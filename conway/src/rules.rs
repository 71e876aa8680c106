// rules.rs - Conway's transition rule (B3/S23) on a bounded grid

use crate::grid::Grid;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts the live cells among the 8 neighbors of (x, y).
///
/// Neighbors beyond the edge of the grid count as dead; there is no
/// wraparound.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if grid.contains(nx, ny) && grid.get_cell(nx as usize, ny as usize) {
            count += 1;
        }
    }
    count
}

pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,  // Survival
        (false, 3)            => true,  // Birth
        _                     => false, // Death or stays dead
    }
}

/// Computes the next generation into a fresh grid. The input is left as is.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let neighbors = count_live_neighbors(grid, x, y);
            if next_state(grid.get_cell(x, y), neighbors) {
                next.set_cell(x, y, true);
            }
        }
    }
    next
}
