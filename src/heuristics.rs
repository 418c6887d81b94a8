//! Heuristic cost estimates for the 8-puzzle.
//!
//! Both estimates are admissible: they never overestimate the true number
//! of moves remaining, so the A* search that consumes them returns
//! optimal-length solutions. The solver drives expansion with
//! `manhattan_distance`; `misplaced_tiles` is the weaker baseline used by
//! the `heuristic_evaluator` binary and by tests as a lower bound.
use crate::engine::{CELL_COUNT, GRID_SIDE};

/// Sum of per-tile Manhattan distances between each tile's current cell and
/// its goal cell, blank excluded.
///
/// A tile one cell from home contributes 1, a tile two cells from home
/// contributes 2, and so on.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), 0);
/// assert_eq!(manhattan_distance(&[1, 0, 2, 3, 4, 5, 6, 7, 8]), 1);
/// ```
pub fn manhattan_distance(tiles: &[u8; CELL_COUNT]) -> u32 {
    let mut distance = 0usize;
    for (index, &value) in tiles.iter().enumerate() {
        // Skip the blank; it has no goal contribution.
        if value == 0 {
            continue;
        }
        let goal = usize::from(value);
        distance += (index % GRID_SIDE).abs_diff(goal % GRID_SIDE);
        distance += (index / GRID_SIDE).abs_diff(goal / GRID_SIDE);
    }
    distance as u32
}

/// Number of tiles not sitting at their goal cell, blank excluded.
///
/// Every misplaced tile needs at least one move, so this never exceeds
/// `manhattan_distance` and both never exceed the true remaining distance.
pub fn misplaced_tiles(tiles: &[u8; CELL_COUNT]) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(index, &value)| value != 0 && usize::from(value) != index)
        .count() as u32
}
