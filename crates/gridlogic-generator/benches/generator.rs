//! Benchmarks for puzzle generation.
//!
//! # Benchmarks
//!
//! - **`sudoku`**: Generates a Sudoku for every difficulty. Covers solution
//!   construction, band/stack swaps and cell removal.
//! - **`hitori`**: Generates a Hitori for every difficulty. Dominated by the
//!   connectivity check run for each shading candidate, so cost grows with the
//!   grid size.
//!
//! # Test Data
//!
//! Seeds are the daily seeds of a fixed date, so each run measures the same
//! puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use chrono::NaiveDate;
use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use gridlogic_core::{Difficulty, PuzzleKind};
use gridlogic_generator::{HitoriGenerator, PuzzleSeed, SudokuGenerator};

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn bench_sudoku(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = SudokuGenerator::new(difficulty);
        let seed = PuzzleSeed::for_puzzle(bench_date(), PuzzleKind::Sudoku, difficulty);
        c.bench_with_input(
            BenchmarkId::new("sudoku", format!("difficulty_{difficulty}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_hitori(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = HitoriGenerator::new(difficulty);
        let seed = PuzzleSeed::for_puzzle(bench_date(), PuzzleKind::Hitori, difficulty);
        c.bench_with_input(
            BenchmarkId::new("hitori", format!("difficulty_{difficulty}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_sudoku,
        bench_hitori
);
criterion_main!(benches);
