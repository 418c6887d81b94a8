//! Utility functions shared by the binaries and tests: arrangement parsing,
//! the solvability parity check, and seeded scramble generation.
use crate::engine::{Move, PuzzleError, PuzzleState, CELL_COUNT};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Parses an arrangement from a string of nine tile values.
///
/// Values may be separated by commas, whitespace, or both, e.g.
/// `"1,0,2,3,4,5,6,7,8"` or `"1 0 2 3 4 5 6 7 8"`. Permutation validation
/// is left to `PuzzleState::new`; this only checks shape and digits.
///
/// # Returns
/// * `Ok([u8; 9])` with the parsed values in row-major order.
/// * `Err(PuzzleError::InvalidState)` when the token count is not nine or a
///   token is not a non-negative integer.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::utils::tiles_from_str;
///
/// assert_eq!(
///     tiles_from_str("1,0,2,3,4,5,6,7,8").unwrap(),
///     [1, 0, 2, 3, 4, 5, 6, 7, 8]
/// );
/// assert!(tiles_from_str("1,0,2").is_err());
/// ```
pub fn tiles_from_str(s: &str) -> Result<[u8; CELL_COUNT], PuzzleError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != CELL_COUNT {
        return Err(PuzzleError::InvalidState(format!(
            "expected {} tile values, found {}",
            CELL_COUNT,
            tokens.len()
        )));
    }

    let mut tiles = [0u8; CELL_COUNT];
    for (slot, token) in tiles.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| {
            PuzzleError::InvalidState(format!("'{}' is not a tile value", token))
        })?;
    }
    Ok(tiles)
}

/// Reports whether the arrangement can reach the solved arrangement.
///
/// On an odd-width board the blank's position is irrelevant: an arrangement
/// is solvable exactly when its inversion count (blank excluded) has the
/// same parity as the goal's, and the goal here has zero inversions. The
/// solver itself never consults this; it is a pre-flight check for callers
/// that would otherwise exhaust half the state space.
pub fn is_solvable(tiles: &[u8; CELL_COUNT]) -> bool {
    count_inversions(tiles) % 2 == 0
}

fn count_inversions(tiles: &[u8; CELL_COUNT]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(index, &value)| {
            tiles[index + 1..]
                .iter()
                .filter(|&&later| later != 0 && later < value)
                .count()
        })
        .sum()
}

/// Produces a solvable scrambled arrangement by walking `steps` random
/// legal moves away from the solved arrangement.
///
/// The walk never undoes its previous move, so scrambles do not collapse
/// back toward the goal. The same seed always yields the same arrangement,
/// which keeps evaluation runs and tests reproducible.
pub fn scrambled_tiles(steps: usize, seed: u64) -> [u8; CELL_COUNT] {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut current = PuzzleState::solved();
    let mut last_move: Option<Move> = None;

    for _ in 0..steps {
        let options: Vec<Move> = current
            .legal_moves()
            .into_iter()
            .filter(|&mv| last_move.map_or(true, |prev| mv != prev.opposite()))
            .collect();
        // Every cell leaves at least two legal directions, so excluding the
        // undo direction always leaves a choice.
        let mv = options[rng.gen_range(0..options.len())];
        current = current
            .apply_move(mv)
            .expect("moves drawn from legal_moves always apply cleanly");
        last_move = Some(mv);
    }

    *current.tiles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_from_str_comma_separated() {
        assert_eq!(
            tiles_from_str("1,0,2,3,4,5,6,7,8").unwrap(),
            [1, 0, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_tiles_from_str_whitespace_and_mixed_separators() {
        assert_eq!(
            tiles_from_str("0 1 2 3 4 5 6 7 8").unwrap(),
            [0, 1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(
            tiles_from_str("0, 1, 2, 3, 4, 5, 6, 7, 8").unwrap(),
            [0, 1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_tiles_from_str_wrong_count() {
        assert!(tiles_from_str("1,0,2").is_err());
        assert!(tiles_from_str("0,1,2,3,4,5,6,7,8,8").is_err());
        assert!(tiles_from_str("").is_err());
    }

    #[test]
    fn test_tiles_from_str_non_numeric_token() {
        assert!(tiles_from_str("a,1,2,3,4,5,6,7,8").is_err());
        assert!(tiles_from_str("-1,1,2,3,4,5,6,7,8").is_err());
    }

    #[test]
    fn test_tiles_from_str_leaves_permutation_check_to_state() {
        // Nine well-formed digits parse fine; PuzzleState::new is the
        // authority on permutation validity.
        let tiles = tiles_from_str("1,1,2,3,4,5,6,7,8").unwrap();
        assert!(PuzzleState::new(tiles).is_err());
    }

    #[test]
    fn test_solved_arrangement_is_solvable() {
        assert!(is_solvable(PuzzleState::solved().tiles()));
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        // One transposition flips parity.
        assert!(!is_solvable(&[0, 2, 1, 3, 4, 5, 6, 7, 8]));
        assert!(!is_solvable(&[1, 0, 2, 3, 4, 5, 6, 7, 8].map(|v| match v {
            7 => 8,
            8 => 7,
            other => other,
        })));
    }

    #[test]
    fn test_moves_preserve_solvability() {
        let start = PuzzleState::new([1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(is_solvable(start.tiles()));
        for mv in start.legal_moves() {
            let child = start.apply_move(mv).unwrap();
            assert!(is_solvable(child.tiles()));
        }
    }

    #[test]
    fn test_scrambled_tiles_deterministic_per_seed() {
        assert_eq!(scrambled_tiles(30, 42), scrambled_tiles(30, 42));
    }

    #[test]
    fn test_scrambled_tiles_stay_solvable_permutations() {
        for seed in 0..20 {
            let tiles = scrambled_tiles(40, seed);
            let state = PuzzleState::new(tiles).expect("scramble must stay a permutation");
            assert!(state.path().is_empty());
            assert!(is_solvable(&tiles), "seed {} produced odd parity", seed);
        }
    }

    #[test]
    fn test_zero_step_scramble_is_solved() {
        assert_eq!(scrambled_tiles(0, 5), *PuzzleState::solved().tiles());
    }
}
