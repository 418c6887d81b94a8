use clap::Parser;
use eightpuzzle_solver::engine::PuzzleState;
use eightpuzzle_solver::solver::{solve_with_limits, SearchLimits, SearchOutcome};
use eightpuzzle_solver::utils::{is_solvable, tiles_from_str};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Initial arrangement: nine values 0-8 in row-major order, 0 being
    /// the blank, e.g. "1,0,2,3,4,5,6,7,8"
    tiles: String,

    /// Give up after this many expanded states
    #[clap(short, long)]
    max_expansions: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let tiles = match tiles_from_str(&args.tiles) {
        Ok(tiles) => tiles,
        Err(e) => {
            eprintln!("Failed to parse arrangement: {}", e);
            process::exit(2);
        }
    };

    let initial = match PuzzleState::new(tiles) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Rejected arrangement: {}", e);
            process::exit(2);
        }
    };

    if !is_solvable(initial.tiles()) {
        eprintln!("Arrangement parity is odd: the solved arrangement is unreachable.");
        process::exit(1);
    }

    println!("Initial arrangement:\n{}", initial);
    println!("Searching...\n");

    let limits = SearchLimits {
        max_expansions: args.max_expansions,
    };

    match solve_with_limits(&initial, &limits) {
        SearchOutcome::Solved(solution) => {
            if solution.moves.is_empty() {
                println!("Already solved, no moves needed.");
            } else {
                let rendered: Vec<String> =
                    solution.moves.iter().map(|mv| mv.to_string()).collect();
                println!("Solution: {}", rendered.join(", "));
            }
            println!("Total moves: {}", solution.moves.len());
            println!("Diagnostics: {}\n", solution.stats);

            // Replay the path to show the reader where the moves end up.
            let mut board = initial;
            for &mv in &solution.moves {
                board = board
                    .apply_move(mv)
                    .expect("a returned solution only contains legal moves");
            }
            println!("Final arrangement:\n{}", board);
        }
        SearchOutcome::Exhausted(stats) => {
            println!("No solution found: the search space was exhausted.");
            println!("Diagnostics: {}", stats);
            process::exit(1);
        }
        SearchOutcome::Aborted(stats) => {
            println!(
                "Search aborted: expansion cap of {} reached before the goal.",
                args.max_expansions.unwrap_or(0)
            );
            println!("Diagnostics: {}", stats);
            process::exit(1);
        }
    }
}
