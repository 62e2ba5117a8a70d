//! Twisty Puzzle Scrambler
//!
//! Generates competition-style scrambles for 2×2 through 7×7 cubes and shows
//! the resulting facelet state as an unfolded text net. States are never
//! stored; a notation string plus a puzzle size reconstructs any position.

use clap::{Parser, Subcommand};

use twisty::net::format_net;
use twisty::{scramble, CubeState, PuzzleKind};

/// Generates cube scrambles and previews the scrambled state.
#[derive(Parser)]
#[command(name = "twisty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one or more scrambles for a puzzle.
    Scramble {
        /// Puzzle size, e.g. 3x3.
        #[arg(value_enum, default_value = "3x3")]
        puzzle: PuzzleKind,
        /// How many scrambles to print.
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence to a solved cube and print the net.
    Show {
        /// Puzzle size, e.g. 3x3.
        #[arg(value_enum)]
        puzzle: PuzzleKind,
        /// Move tokens, e.g. R U R' U'.
        moves: Vec<String>,
    },
    /// Print the solved net for a puzzle.
    Solved {
        #[arg(value_enum)]
        puzzle: PuzzleKind,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Scramble {
            puzzle,
            count,
            seed,
        }) => run_scramble(puzzle, count, seed),
        Some(Command::Show { puzzle, moves }) => run_show(puzzle, &moves.join(" ")),
        Some(Command::Solved { puzzle }) => {
            print!("{}", format_net(&CubeState::solved(puzzle.size())));
        }
        None => {
            // default: one 3x3 scramble plus its preview
            let sequence = scramble::generate(PuzzleKind::ThreeByThree);
            run_show(PuzzleKind::ThreeByThree, &sequence);
        }
    }
}

/// Prints `count` scrambles, one per line.
fn run_scramble(puzzle: PuzzleKind, count: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    for _ in 0..count {
        println!("{}", scramble::generate_with(puzzle, &mut rng));
    }
}

/// Applies a sequence to a solved cube and prints the sequence and net.
fn run_show(puzzle: PuzzleKind, sequence: &str) {
    let mut state = CubeState::solved(puzzle.size());
    state.apply_sequence(sequence);
    if sequence.is_empty() {
        eprintln!("No moves given; showing the solved {}", puzzle.display_name());
    } else {
        println!("{} {}", puzzle.display_name(), sequence);
    }
    print!("{}", format_net(&state));
}
