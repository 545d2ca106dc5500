//! Example demonstrating deterministic puzzle generation.
//!
//! This example shows how to:
//! - Generate the daily Sudoku or Hitori for a date and difficulty
//! - Display the puzzle, its solution, and the seed
//! - Sample many seeds in parallel to measure Hitori shading shortfalls
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind hitori --difficulty 3
//! ```
//!
//! Generate for a specific date:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind sudoku --date 2024-01-01
//! ```
//!
//! Sample consecutive seeds and report how often Hitori shading falls short of
//! its target (default: 10000 seeds):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --kind hitori --difficulty 5 --sample 10000
//! ```

use std::process;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use gridlogic_core::Difficulty;
use gridlogic_generator::{HitoriGenerator, PuzzleSeed, SudokuGenerator};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Sudoku,
    Hitori,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle kind to generate.
    #[arg(long, value_name = "KIND", default_value = "sudoku")]
    kind: Kind,

    /// Difficulty level (1-5).
    #[arg(short, long, value_name = "LEVEL", default_value_t = 1)]
    difficulty: u8,

    /// Date whose daily seed is used (YYYY-MM-DD). Defaults to 2024-01-01.
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Number of consecutive seeds to sample for shortfall statistics.
    #[arg(long, value_name = "COUNT")]
    sample: Option<i64>,
}

fn main() {
    let args = Args::parse();
    let Ok(difficulty) = Difficulty::try_from(args.difficulty) else {
        eprintln!("--difficulty must be between 1 and 5.");
        process::exit(2);
    };
    let date = args
        .date
        .or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1))
        .unwrap();

    if let Some(count) = args.sample {
        if count <= 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        sample(args.kind, difficulty, date, count);
        return;
    }

    match args.kind {
        Kind::Sudoku => {
            let puzzle = SudokuGenerator::new(difficulty).generate_for_date(date);
            println!("Seed:");
            println!("  {}", puzzle.seed);
            println!();
            println!("Problem:");
            print_indented(&puzzle.problem.to_string());
            println!();
            println!("Solution:");
            print_indented(&puzzle.solution.to_string());
        }
        Kind::Hitori => {
            let puzzle = HitoriGenerator::new(difficulty).generate_for_date(date);
            println!("Seed:");
            println!("  {}", puzzle.seed);
            println!();
            println!("Numbers:");
            print_indented(&puzzle.numbers.to_string());
            println!();
            println!("Solution mask:");
            print_indented(&puzzle.solution_mask.to_string());
            println!();
            println!("Blacks: {}/{}", puzzle.black_count(), puzzle.black_target);
        }
    }
}

fn sample(kind: Kind, difficulty: Difficulty, date: NaiveDate, count: i64) {
    let start = PuzzleSeed::for_date(date).get();
    match kind {
        Kind::Sudoku => {
            let generator = SudokuGenerator::new(difficulty);
            let removed = (start..start + count)
                .into_par_iter()
                .map(|seed| generator.generate_with_seed(PuzzleSeed::new(seed)))
                .filter(|puzzle| {
                    puzzle.problem.count_empty() == difficulty.sudoku_cells_removed()
                })
                .count();
            println!("Sampled: {count}");
            println!("  exact removal count: {removed}");
        }
        Kind::Hitori => {
            let generator = HitoriGenerator::new(difficulty);
            let shortfalls: Vec<usize> = (start..start + count)
                .into_par_iter()
                .map(|seed| generator.generate_with_seed(PuzzleSeed::new(seed)).shortfall())
                .collect();
            let short = shortfalls.iter().filter(|&&n| n > 0).count();
            let worst = shortfalls.iter().copied().max().unwrap_or(0);
            let total: usize = shortfalls.iter().sum();
            println!("Sampled: {count}");
            println!("  short of target: {short}");
            println!("  worst shortfall: {worst}");
            println!("  total missing blacks: {total}");
        }
    }
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
