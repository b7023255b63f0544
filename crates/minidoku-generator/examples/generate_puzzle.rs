//! Example demonstrating puzzle generation for both board shapes.
//!
//! # Usage
//!
//! Generate a 9×9 puzzle with the default removal count:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Generate a 6×6 puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --shape six
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Control how many cells are carved out:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --removals 52
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use minidoku_core::GridShape;
use minidoku_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    /// 6×6 board with 3×2 boxes.
    Six,
    /// Classic 9×9 board with 3×3 boxes.
    Classic,
}

impl Shape {
    fn grid_shape(self) -> GridShape {
        match self {
            Self::Six => GridShape::SIX,
            Self::Classic => GridShape::CLASSIC,
        }
    }

    fn default_removals(self) -> usize {
        match self {
            Self::Six => 16,
            Self::Classic => 46,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board shape to generate.
    #[arg(long, value_name = "SHAPE", default_value = "classic")]
    shape: Shape,

    /// Number of cells to carve out (defaults per shape).
    #[arg(long, value_name = "COUNT")]
    removals: Option<usize>,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let shape = args.shape.grid_shape();
    let removals = args.removals.unwrap_or_else(|| args.shape.default_removals());
    let generator = PuzzleGenerator::new(shape);

    let puzzle = match &args.seed {
        Some(text) => {
            let seed = match text.parse::<PuzzleSeed>() {
                Ok(seed) => seed,
                Err(err) => {
                    eprintln!("Invalid seed: {err}");
                    process::exit(2);
                }
            };
            generator.generate_with_seed(seed, removals)
        }
        None => generator.generate(removals),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} cells removed):", puzzle.removed);
    print_grid(&puzzle.problem.to_string(), shape);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution.to_string(), shape);
}

fn print_grid(flat: &str, shape: GridShape) {
    let size = usize::from(shape.size());
    for row in 0..size {
        let line: String = flat.chars().skip(row * size).take(size).collect();
        println!("  {line}");
    }
}
