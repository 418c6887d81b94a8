//! # 8-Puzzle Solver Library
//!
//! This library provides the core state model for the 3x3 sliding-tile
//! puzzle (the 8-puzzle) and an A* solver that finds a shortest sequence of
//! blank-tile moves from a scrambled arrangement to the solved arrangement.
//!
//! It is used by three binaries:
//! - `astar_solver`: Takes an initial arrangement, then outputs the move
//!   sequence together with search diagnostics.
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `heuristic_evaluator`: Compares heuristic estimates against the true
//!   optimal solution length on a batch of seeded scrambles.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`PuzzleState`), the move
//!   alphabet (`Move`), and all state mechanics (legal-move generation,
//!   move application, cost evaluation).
//! - `heuristics`: Admissible cost estimates used to guide and evaluate the
//!   search.
//! - `queue`: The cost-indexed priority queue that orders expansion by
//!   f-cost with a last-in-first-out tie-break among equal costs.
//! - `solver`: Provides the `solve` and `solve_with_limits` entry points for
//!   running the A* search.
//! - `utils`: Provides utility functions, such as parsing arrangements from
//!   strings, checking solvability, and generating seeded scrambles.

pub mod engine;
pub mod heuristics;
pub mod queue;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `eightpuzzle_solver::solver::solve()`. This keeps the
// top-level library namespace cleaner.
