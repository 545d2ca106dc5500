//! Deterministic puzzle generation.
//!
//! Every puzzle is a pure function of a [`PuzzleSeed`] and a
//! [`Difficulty`](gridlogic_core::Difficulty). Daily seeds are derived from
//! the calendar date, so every player gets the same puzzle on the same day.
//!
//! # Overview
//!
//! - [`DeterministicRandom`]: the seeded stream every generator draws from
//! - [`PuzzleSeed`], [`SeedOffset`], [`daily_lineup`]: date-derived seeds and
//!   the kinds offered each day
//! - [`SudokuGenerator`]: patterned solution, band/stack swaps, uniform cell
//!   removal
//! - [`HitoriGenerator`]: Latin square, greedy shading under adjacency and
//!   connectivity rules, duplicate injection
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use gridlogic_core::{Difficulty, rules};
//! use gridlogic_generator::{HitoriGenerator, SudokuGenerator};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let sudoku = SudokuGenerator::new(Difficulty::Easy).generate_for_date(date);
//! assert_eq!(sudoku.problem.count_empty(), 30);
//! assert!(rules::is_valid_sudoku_solution(&sudoku.solution));
//!
//! let hitori = HitoriGenerator::new(Difficulty::Easy).generate_for_date(date);
//! assert!(rules::hitori_solved(&hitori.numbers, &hitori.solution_mask));
//! ```

mod hitori;
mod random;
mod seed;
mod sudoku;

pub use self::{
    hitori::{GeneratedHitori, HitoriGenerator},
    random::DeterministicRandom,
    seed::{DEFAULT_DAILY_COUNT, PuzzleSeed, SeedOffset, SeedParseError, daily_lineup},
    sudoku::{GeneratedSudoku, SudokuGenerator},
};
