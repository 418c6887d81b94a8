use clap::Parser;
use eightpuzzle_solver::engine::{Move, PuzzleState};
use eightpuzzle_solver::solver::{solve, SearchOutcome};
use eightpuzzle_solver::utils::scrambled_tiles;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffled starting arrangement
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of random moves used to shuffle
    #[clap(long, default_value_t = 40)]
    shuffle_moves: usize,
}

fn shuffled(args: &Args, round: u64) -> PuzzleState {
    let tiles = scrambled_tiles(args.shuffle_moves, args.seed.wrapping_add(round));
    PuzzleState::new(tiles).expect("shuffles produce valid permutations")
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut round = 0u64;
    let mut start = shuffled(&args, round);
    let mut current = start.clone();

    println!("Welcome to the 8-puzzle!");
    println!("Slide the blank until every tile sits on its own index.");

    loop {
        println!("---------------------");
        println!("Moves taken: {}", current.path().len());
        println!("{}", current);

        if current.is_goal() {
            println!("---------------------");
            println!("🎉 SOLVED in {} moves! 🎉", current.path().len());
            println!("Enter 's' to shuffle again or 'q' to quit.");
        } else {
            print!("Move the blank (u/d/l/r), 's' shuffle, 'a' auto-solve, 'b' back to start, 'q' quit: ");
            io::stdout().flush().expect("stdout must accept a prompt");
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "s" => {
                round += 1;
                start = shuffled(&args, round);
                current = start.clone();
                println!("Shuffled.");
            }
            "b" => {
                current = start.clone();
                println!("Back to the starting arrangement.");
            }
            "a" => match solve(&current) {
                SearchOutcome::Solved(solution) => {
                    if solution.moves.is_empty() {
                        println!("Nothing to do, the board is already solved.");
                        continue;
                    }
                    let rendered: Vec<String> =
                        solution.moves.iter().map(|mv| mv.to_string()).collect();
                    println!("Solver path: {}", rendered.join(", "));
                    println!("Diagnostics: {}", solution.stats);
                    for &mv in &solution.moves {
                        current = current
                            .apply_move(mv)
                            .expect("a returned solution only contains legal moves");
                    }
                }
                // Shuffles walk legal moves from the goal, so the solver
                // cannot exhaust here; keep the arms for completeness.
                SearchOutcome::Exhausted(stats) => {
                    println!("No solution exists from here. Diagnostics: {}", stats);
                }
                SearchOutcome::Aborted(stats) => {
                    println!("Solver gave up early. Diagnostics: {}", stats);
                }
            },
            direction @ ("u" | "d" | "l" | "r") => {
                let mv = match direction {
                    "u" => Move::Up,
                    "d" => Move::Down,
                    "l" => Move::Left,
                    _ => Move::Right,
                };
                match current.apply_move(mv) {
                    Ok(next) => current = next,
                    Err(_) => {
                        println!("The blank cannot move {} from here.", mv);
                    }
                }
            }
            other => {
                println!(
                    "Unrecognized input '{}'. Use u/d/l/r, 's', 'a', 'b', or 'q'.",
                    other
                );
            }
        }
    }
}
