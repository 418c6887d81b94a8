//! A* search driver for the 8-puzzle.
//!
//! The search pops the cheapest pending state from the cost-indexed queue,
//! tests it against the goal, expands its legal successors, and pushes the
//! ones whose arrangement has not already been expanded. Because the
//! Manhattan heuristic is admissible and consistent, the first goal state
//! popped carries an optimal-length path.
//!
//! Duplicate handling: a state's packed arrangement enters the expanded set
//! when the state is expanded, and successors already in that set are not
//! enqueued. The same arrangement can still sit in the queue more than once
//! when discovered via different paths before either copy is expanded; the
//! consistent heuristic keeps such re-expansions harmless for optimality.
use crate::engine::{Move, PuzzleState};
use crate::queue::CostIndexedQueue;
use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Diagnostics collected over one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the queue and tested against the goal, the
    /// initial state included.
    pub states_investigated: u64,
    /// Largest number of states pending in the queue at any point.
    pub peak_queue_size: usize,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} states investigated, peak queue size {}, {:.4} seconds",
            self.states_investigated,
            self.peak_queue_size,
            self.elapsed.as_secs_f64()
        )
    }
}

/// A shortest move sequence together with the diagnostics of the run that
/// produced it.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Blank moves leading from the initial arrangement to the solved
    /// arrangement. Empty when the initial arrangement was already solved.
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

/// Terminal result of a search run.
///
/// `Exhausted` is an ordinary, non-error result: it legitimately occurs for
/// arrangements whose parity makes the goal unreachable. For any solvable
/// arrangement it signals a defect, and callers should treat it as final
/// rather than retry. `Aborted` reports that the expansion cap fired first
/// and is surfaced separately so callers never mistake a cut-short run for
/// proof that no solution exists.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    Solved(Solution),
    Exhausted(SearchStats),
    Aborted(SearchStats),
}

impl SearchOutcome {
    /// Returns the solution when the search reached the goal.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Returns the diagnostics regardless of how the run ended.
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved(solution) => &solution.stats,
            SearchOutcome::Exhausted(stats) => stats,
            SearchOutcome::Aborted(stats) => stats,
        }
    }
}

/// External bounds on a search run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Maximum number of states to pop and expand before giving up with
    /// `SearchOutcome::Aborted`. `None` runs to completion.
    pub max_expansions: Option<u64>,
}

/// Runs the A* search to completion with no expansion cap.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::engine::{Move, PuzzleState};
/// use eightpuzzle_solver::solver::solve;
///
/// let initial = PuzzleState::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
/// let solution = solve(&initial).solution().unwrap().clone();
/// assert_eq!(solution.moves, vec![Move::Left]);
/// ```
pub fn solve(initial: &PuzzleState) -> SearchOutcome {
    solve_with_limits(initial, &SearchLimits::default())
}

/// Runs the A* search under the given limits.
///
/// The run is a single deterministic pass: the caller-supplied state seeds
/// the queue, and the loop below pops, goal-tests, and expands until the
/// goal is found, the queue empties, or the expansion cap fires. The cap
/// never alters the expansion order observed up to the point it triggers.
pub fn solve_with_limits(initial: &PuzzleState, limits: &SearchLimits) -> SearchOutcome {
    let start = Instant::now();
    let mut queue = CostIndexedQueue::new();
    let mut expanded: HashSet<u64> = HashSet::new();
    let mut stats = SearchStats::default();

    info!(
        "starting search, initial h-cost {}, expansion cap {:?}",
        initial.h_cost(),
        limits.max_expansions
    );

    queue.push(initial.clone());
    stats.peak_queue_size = queue.len();

    while let Some(current) = queue.pop_min() {
        stats.states_investigated += 1;

        if current.is_goal() {
            stats.elapsed = start.elapsed();
            info!(
                "solved in {} moves ({})",
                current.path().len(),
                stats
            );
            return SearchOutcome::Solved(Solution {
                moves: current.path().to_vec(),
                stats,
            });
        }

        if let Some(cap) = limits.max_expansions {
            if stats.states_investigated >= cap {
                stats.elapsed = start.elapsed();
                debug!("expansion cap {} reached ({})", cap, stats);
                return SearchOutcome::Aborted(stats);
            }
        }

        for mv in current.legal_moves() {
            let successor = current
                .apply_move(mv)
                .expect("moves reported legal always apply cleanly");
            if !expanded.contains(&successor.packed()) {
                queue.push(successor);
                stats.peak_queue_size = stats.peak_queue_size.max(queue.len());
            }
        }
        expanded.insert(current.packed());
    }

    stats.elapsed = start.elapsed();
    info!("queue exhausted without reaching the goal ({})", stats);
    SearchOutcome::Exhausted(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CELL_COUNT;
    use crate::utils::{is_solvable, scrambled_tiles};
    use std::collections::VecDeque;

    fn state(tiles: [u8; CELL_COUNT]) -> PuzzleState {
        PuzzleState::new(tiles).expect("test arrangement must be a permutation")
    }

    /// Brute-force shortest distance to the goal, the optimality oracle.
    fn bfs_distance(tiles: [u8; CELL_COUNT]) -> Option<usize> {
        let start = state(tiles);
        if start.is_goal() {
            return Some(0);
        }
        let mut seen = HashSet::new();
        seen.insert(start.packed());
        let mut frontier = VecDeque::new();
        frontier.push_back((start, 0usize));
        while let Some((current, depth)) = frontier.pop_front() {
            for mv in current.legal_moves() {
                let next = current.apply_move(mv).unwrap();
                if next.is_goal() {
                    return Some(depth + 1);
                }
                if seen.insert(next.packed()) {
                    frontier.push_back((next, depth + 1));
                }
            }
        }
        None
    }

    fn replay(tiles: [u8; CELL_COUNT], moves: &[Move]) -> PuzzleState {
        let mut current = state(tiles);
        for &mv in moves {
            current = current
                .apply_move(mv)
                .expect("solution moves must be legal in sequence");
        }
        current
    }

    #[test]
    fn test_one_move_scramble_solves_with_single_left() {
        let initial = state([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let outcome = solve(&initial);
        let solution = outcome.solution().expect("solvable arrangement");
        assert_eq!(solution.moves, vec![Move::Left]);
    }

    #[test]
    fn test_already_solved_returns_empty_path() {
        let outcome = solve(&PuzzleState::solved());
        let solution = outcome.solution().expect("goal state is trivially solvable");
        assert!(solution.moves.is_empty());
        // One pop suffices: the initial state is goal-tested immediately.
        assert_eq!(solution.stats.states_investigated, 1);
        assert_eq!(solution.stats.peak_queue_size, 1);
    }

    #[test]
    fn test_blank_in_corner_scramble_matches_bfs_length() {
        let tiles = [1, 2, 0, 3, 4, 5, 6, 7, 8];
        assert_eq!(state(tiles).legal_moves(), vec![Move::Down, Move::Left]);

        let oracle = bfs_distance(tiles).expect("arrangement is solvable");
        assert_eq!(oracle, 2);

        let outcome = solve(&state(tiles));
        let solution = outcome.solution().expect("solvable arrangement");
        assert_eq!(solution.moves.len(), oracle);
    }

    #[test]
    fn test_solution_replays_to_goal() {
        let tiles = scrambled_tiles(25, 7);
        let outcome = solve(&state(tiles));
        let solution = outcome.solution().expect("scrambles stay solvable");
        assert!(replay(tiles, &solution.moves).is_goal());
    }

    #[test]
    fn test_path_length_is_optimal_on_seeded_scrambles() {
        for seed in 0..10 {
            let tiles = scrambled_tiles(14, seed);
            let oracle = bfs_distance(tiles).expect("scrambles stay solvable");
            let outcome = solve(&state(tiles));
            let solution = outcome.solution().expect("scrambles stay solvable");
            assert_eq!(
                solution.moves.len(),
                oracle,
                "seed {} returned a non-optimal path",
                seed
            );
            assert!(replay(tiles, &solution.moves).is_goal());
        }
    }

    #[test]
    fn test_heuristic_is_admissible_on_seeded_scrambles() {
        for seed in 0..10 {
            let tiles = scrambled_tiles(12, seed);
            let oracle = bfs_distance(tiles).expect("scrambles stay solvable");
            let h = state(tiles).h_cost() as usize;
            assert!(
                h <= oracle,
                "seed {}: h-cost {} overestimates true distance {}",
                seed,
                h,
                oracle
            );
        }
    }

    #[test]
    fn test_stats_are_populated() {
        let tiles = scrambled_tiles(20, 3);
        let outcome = solve(&state(tiles));
        let stats = outcome.stats();
        assert!(stats.states_investigated >= 1);
        assert!(stats.peak_queue_size >= 1);
    }

    #[test]
    fn test_unsolvable_arrangement_exhausts() {
        // Swapping tiles 1 and 2 flips the permutation parity, so the goal
        // sits in the other half of the state space. The expanded set
        // bounds the search to that half before the queue runs dry.
        let tiles = [0, 2, 1, 3, 4, 5, 6, 7, 8];
        assert!(!is_solvable(&tiles));

        let outcome = solve(&state(tiles));
        assert!(matches!(outcome, SearchOutcome::Exhausted(_)));
        assert!(outcome.stats().states_investigated > 0);
    }

    #[test]
    fn test_expansion_cap_aborts_instead_of_exhausting() {
        // One move from the goal, but the cap fires before the second pop.
        let tiles = [1, 0, 2, 3, 4, 5, 6, 7, 8];
        let limits = SearchLimits {
            max_expansions: Some(1),
        };
        let outcome = solve_with_limits(&state(tiles), &limits);
        assert!(matches!(outcome, SearchOutcome::Aborted(_)));
        assert_eq!(outcome.stats().states_investigated, 1);
    }

    #[test]
    fn test_cap_does_not_cut_off_a_found_goal() {
        // The goal test runs before the cap check, so a cap of 1 still
        // solves the already-solved arrangement.
        let limits = SearchLimits {
            max_expansions: Some(1),
        };
        let outcome = solve_with_limits(&PuzzleState::solved(), &limits);
        assert!(outcome.solution().is_some());
    }

    #[test]
    fn test_exact_diagnostics_on_one_move_scramble() {
        // Deterministic because successors already expanded are filtered
        // out of the queue: the initial pop expands three successors, and
        // the goal among them (f-cost 1) is popped next.
        let outcome = solve(&state([1, 0, 2, 3, 4, 5, 6, 7, 8]));
        let solution = outcome.solution().unwrap();
        assert_eq!(solution.stats.states_investigated, 2);
        assert_eq!(solution.stats.peak_queue_size, 3);
    }
}
