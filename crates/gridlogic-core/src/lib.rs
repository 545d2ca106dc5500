//! Core data structures for grid logic puzzles.
//!
//! This crate provides the fundamental types shared by the generators and the
//! game lifecycle: board coordinates, an owned square grid container, the
//! difficulty parameter table, and the stateless rule predicates used to
//! validate Sudoku and Hitori states.
//!
//! # Overview
//!
//! 1. **Coordinates and containers**
//!    - [`position`]: `(row, col)` coordinates and 4-neighbourhoods
//!    - [`grid`]: [`Grid<T>`], a row-major `N×N` container, plus text
//!      formatting/parsing for number grids and masks
//!
//! 2. **Puzzle parameters**
//!    - [`difficulty`]: [`Difficulty`] levels 1-5 and their fixed parameter table
//!    - [`kind`]: [`PuzzleKind`], the puzzle types known to the daily rotation
//!
//! 3. **Rules**
//!    - [`house`]: rows, columns and boxes of a 9×9 Sudoku grid
//!    - [`rules`]: predicates for duplicate-free groups, black-cell adjacency,
//!      white-cell connectivity and complete-solution checks
//!
//! # Examples
//!
//! ```
//! use gridlogic_core::{Grid, Position, rules};
//!
//! let mask: Grid<bool> = "
//!     .#.
//!     ...
//!     #.#
//! "
//! .parse()?;
//!
//! assert!(rules::has_adjacent_black(&mask, Position::new(0, 0)));
//! assert!(rules::white_cells_connected(&mask));
//! # Ok::<(), gridlogic_core::GridParseError>(())
//! ```

pub mod difficulty;
pub mod grid;
pub mod house;
pub mod kind;
pub mod position;
pub mod rules;

pub use self::{
    difficulty::{Difficulty, DifficultyError, DifficultyProfile},
    grid::{Grid, GridParseError},
    house::{House, SUDOKU_SIZE},
    kind::{PuzzleKind, PuzzleKindParseError},
    position::Position,
};
