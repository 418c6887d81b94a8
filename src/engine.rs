//! Core state model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank tile can slide.
//! - `PuzzleState`: One arrangement of the nine tiles plus the move path
//!   taken to reach it, with legal-move generation, move application, and
//!   cost evaluation.
//! - `PuzzleError`: Contract violations raised by construction and by
//!   `apply_move`.
use crate::heuristics;
use std::fmt;
use thiserror::Error;

/// Width and height of the board. The puzzle is always the 3x3 variant.
pub const GRID_SIDE: usize = 3;

/// Number of cells on the board, including the blank.
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// A direction the blank tile can slide.
///
/// Directions describe the movement of the blank itself: `Up` swaps the
/// blank with the tile above it, `Left` with the tile to its left, and so
/// on. The presentation layer maps each symbol to the inverse action of
/// sliding the adjacent tile into the blank's cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All directions, in the order successors are generated during search.
    ///
    /// The order is observable: among several optimal solutions, it decides
    /// which one the solver returns.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Returns the direction that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by `PuzzleState` construction and move application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The supplied arrangement is not a permutation of 0..=8.
    #[error("invalid arrangement: {0}")]
    InvalidState(String),
    /// `apply_move` was invoked for a direction not reported by
    /// `legal_moves`. Callers must check legality first; hitting this is a
    /// programming defect, not a runtime condition to recover from.
    #[error("illegal move {mv} with blank at index {blank}")]
    IllegalMove { mv: Move, blank: usize },
}

/// One arrangement of the nine tiles plus the path taken to reach it.
///
/// `tiles` holds a permutation of 0..=8 in row-major order, where 0 denotes
/// the blank. The solved arrangement places every value at its own index,
/// blank in the top-left cell. `path` records the blank moves applied since
/// the initial arrangement, so `path.len()` is the g-cost.
///
/// States are immutable: `apply_move` returns a new state and never touches
/// its receiver, so a parent is never observed to change after a child has
/// been derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    tiles: [u8; CELL_COUNT],
    path: Vec<Move>,
}

impl PuzzleState {
    /// Creates an initial state (empty path) from a caller-supplied
    /// arrangement.
    ///
    /// # Arguments
    /// * `tiles`: Row-major tile values; 0 is the blank.
    ///
    /// # Returns
    /// * `Ok(PuzzleState)` if `tiles` is a permutation of 0..=8.
    /// * `Err(PuzzleError::InvalidState)` if any value is out of range or
    ///   appears more than once.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::engine::PuzzleState;
    ///
    /// assert!(PuzzleState::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).is_ok());
    /// assert!(PuzzleState::new([1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELL_COUNT]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELL_COUNT];
        for &value in &tiles {
            let value = usize::from(value);
            if value >= CELL_COUNT {
                return Err(PuzzleError::InvalidState(format!(
                    "tile value {} is outside 0..={}",
                    value,
                    CELL_COUNT - 1
                )));
            }
            if seen[value] {
                return Err(PuzzleError::InvalidState(format!(
                    "tile value {} appears more than once",
                    value
                )));
            }
            seen[value] = true;
        }
        Ok(PuzzleState {
            tiles,
            path: Vec::new(),
        })
    }

    /// Returns the solved arrangement: every value at its own index, blank
    /// in the top-left cell.
    pub fn solved() -> Self {
        let mut tiles = [0u8; CELL_COUNT];
        for (index, slot) in tiles.iter_mut().enumerate() {
            *slot = index as u8;
        }
        PuzzleState {
            tiles,
            path: Vec::new(),
        }
    }

    /// Returns the row-major tile values.
    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// Returns the moves applied since the initial arrangement.
    pub fn path(&self) -> &[Move] {
        &self.path
    }

    /// Returns the index of the blank cell.
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&value| value == 0)
            .expect("a permutation of 0..=8 always contains the blank")
    }

    /// Returns the directions the blank can legally slide from this
    /// arrangement, in expansion order.
    ///
    /// A corner cell yields two directions, an edge cell three, and the
    /// center cell four.
    pub fn legal_moves(&self) -> Vec<Move> {
        let blank = self.blank_index();
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| Self::move_is_legal(blank, mv))
            .collect()
    }

    fn move_is_legal(blank: usize, mv: Move) -> bool {
        let row = blank / GRID_SIDE;
        let col = blank % GRID_SIDE;
        match mv {
            Move::Up => row > 0,
            Move::Down => row < GRID_SIDE - 1,
            Move::Left => col > 0,
            Move::Right => col < GRID_SIDE - 1,
        }
    }

    /// Slides the blank in the given direction, producing a new state.
    ///
    /// The new state's tiles are a copy of this state's with the blank and
    /// its neighbour swapped, and its path is this state's path with `mv`
    /// appended. The receiver is left unmodified.
    ///
    /// # Returns
    /// * `Ok(PuzzleState)` for a direction reported by `legal_moves`.
    /// * `Err(PuzzleError::IllegalMove)` otherwise, instead of producing an
    ///   invalid state.
    pub fn apply_move(&self, mv: Move) -> Result<Self, PuzzleError> {
        let blank = self.blank_index();
        if !Self::move_is_legal(blank, mv) {
            return Err(PuzzleError::IllegalMove { mv, blank });
        }

        let neighbour = match mv {
            Move::Up => blank - GRID_SIDE,
            Move::Down => blank + GRID_SIDE,
            Move::Left => blank - 1,
            Move::Right => blank + 1,
        };

        let mut tiles = self.tiles;
        tiles.swap(blank, neighbour);

        let mut path = self.path.clone();
        path.push(mv);

        Ok(PuzzleState { tiles, path })
    }

    /// Returns `true` when every value sits at its own index.
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &value)| usize::from(value) == index)
    }

    /// Cost of the path taken to reach this state: the number of moves
    /// applied since the initial arrangement.
    pub fn g_cost(&self) -> u32 {
        self.path.len() as u32
    }

    /// Heuristic estimate of the moves remaining: the sum of per-tile
    /// Manhattan distances, blank excluded.
    ///
    /// The estimate never overestimates the true remaining distance and
    /// satisfies the triangle inequality across a single move, so the
    /// search returns an optimal-length solution.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::engine::PuzzleState;
    ///
    /// let one_away = PuzzleState::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(one_away.h_cost(), 1);
    /// assert_eq!(PuzzleState::solved().h_cost(), 0);
    /// ```
    pub fn h_cost(&self) -> u32 {
        heuristics::manhattan_distance(&self.tiles)
    }

    /// Priority used to order expansion: `g_cost() + h_cost()`.
    pub fn f_cost(&self) -> u32 {
        self.g_cost() + self.h_cost()
    }

    /// Canonical identity of the arrangement: one 4-bit nibble per cell,
    /// packed row-major into a `u64`.
    ///
    /// Two states share a packed value exactly when their tiles match,
    /// regardless of the paths taken to reach them. Used for duplicate
    /// detection during search.
    pub fn packed(&self) -> u64 {
        self.tiles
            .iter()
            .fold(0u64, |acc, &value| (acc << 4) | u64::from(value))
    }
}

impl fmt::Display for PuzzleState {
    /// Formats the board as a 3x3 grid, the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                let value = self.tiles[row * GRID_SIDE + col];
                if value == 0 {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
