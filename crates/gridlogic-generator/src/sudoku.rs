//! Sudoku construction by permuting a patterned base grid.

use chrono::NaiveDate;
use gridlogic_core::{Difficulty, Grid, Position, PuzzleKind, SUDOKU_SIZE};

use crate::{DeterministicRandom, PuzzleSeed};

/// A generated Sudoku puzzle with its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSudoku {
    /// Seed used to generate the puzzle.
    pub seed: PuzzleSeed,
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Puzzle grid; `0` marks a removed cell.
    pub problem: Grid<u8>,
    /// Complete solution grid.
    pub solution: Grid<u8>,
}

impl GeneratedSudoku {
    /// Returns the cells that are given in the problem.
    #[must_use]
    pub fn fixed_mask(&self) -> Grid<bool> {
        self.problem.map(|&value| value != 0)
    }
}

/// Builds Sudoku puzzles for one difficulty.
///
/// A solution is produced from a shuffled base row placed with a band/stack
/// shift pattern, then rows are swapped within each band and columns within
/// each stack. The problem blanks a fixed number of cells chosen uniformly.
/// The puzzle is not checked for a unique solution.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Difficulty, rules};
/// use gridlogic_generator::{PuzzleSeed, SudokuGenerator};
///
/// let generator = SudokuGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::new(20_241_101));
///
/// assert!(rules::is_valid_sudoku_solution(&puzzle.solution));
/// assert_eq!(puzzle.problem.count_empty(), 30);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SudokuGenerator {
    difficulty: Difficulty,
}

impl SudokuGenerator {
    /// Creates a generator for `difficulty`.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator builds for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates the daily puzzle for `date`.
    #[must_use]
    pub fn generate_for_date(&self, date: NaiveDate) -> GeneratedSudoku {
        self.generate_with_seed(PuzzleSeed::for_puzzle(
            date,
            PuzzleKind::Sudoku,
            self.difficulty,
        ))
    }

    /// Generates a puzzle from `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedSudoku {
        let mut rng = DeterministicRandom::new(seed);
        let solution = generate_solution(&mut rng);
        let problem = remove_cells(&mut rng, &solution, self.difficulty.sudoku_cells_removed());
        log::debug!(
            "generated sudoku: seed={seed}, difficulty={}, removed={}",
            self.difficulty,
            problem.count_empty()
        );
        GeneratedSudoku {
            seed,
            difficulty: self.difficulty,
            problem,
            solution,
        }
    }
}

fn generate_solution(rng: &mut DeterministicRandom) -> Grid<u8> {
    let mut base_row: Vec<u8> = (1..=9).collect();
    rng.shuffle(&mut base_row);

    // Row i is the base row shifted by i / 3 + (i % 3) * 3, which keeps every
    // row, column and box a permutation of 1-9.
    let mut grid = Grid::from_fn(SUDOKU_SIZE, |pos| {
        let shift = pos.row() / 3 + (pos.row() % 3) * 3;
        base_row[(pos.col() + shift) % SUDOKU_SIZE]
    });

    for band in 0..3 {
        for i in 0..3 {
            let j = rng.below(3);
            if i != j {
                grid.swap_rows(band * 3 + i, band * 3 + j);
            }
        }
    }
    for stack in 0..3 {
        for i in 0..3 {
            let j = rng.below(3);
            if i != j {
                grid.swap_columns(stack * 3 + i, stack * 3 + j);
            }
        }
    }
    grid
}

fn remove_cells(rng: &mut DeterministicRandom, solution: &Grid<u8>, count: usize) -> Grid<u8> {
    let mut positions: Vec<Position> = solution.positions().collect();
    rng.shuffle(&mut positions);

    let mut problem = solution.clone();
    for &pos in positions.iter().take(count) {
        problem[pos] = 0;
    }
    problem
}
