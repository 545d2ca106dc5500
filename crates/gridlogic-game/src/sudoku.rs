//! Sudoku puzzle state.

use gridlogic_core::{Difficulty, Grid, Position, PuzzleKind, rules};
use gridlogic_generator::{GeneratedSudoku, PuzzleSeed, SudokuGenerator};

use crate::PuzzleEngine;

/// Largest digit a Sudoku cell accepts.
const MAX_DIGIT: u8 = 9;

/// A Sudoku puzzle in play.
///
/// Given cells are fixed and reject input. Cells corrected by a hint become
/// fixed as well.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Difficulty, Position};
/// use gridlogic_game::{PuzzleEngine, SudokuPuzzle};
/// use gridlogic_generator::PuzzleSeed;
///
/// let mut puzzle = SudokuPuzzle::generate(PuzzleSeed::new(20_241_101), Difficulty::Easy);
/// let empty = puzzle.cells().positions().find(|&pos| !puzzle.is_fixed(pos)).unwrap();
/// let digit = puzzle.solution()[empty];
///
/// assert_eq!(puzzle.set_cell(empty, digit), Some(digit));
/// assert!(!puzzle.conflicts_at(empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuPuzzle {
    seed: PuzzleSeed,
    difficulty: Difficulty,
    cells: Grid<u8>,
    solution: Grid<u8>,
    fixed: Grid<bool>,
}

impl SudokuPuzzle {
    /// Creates a puzzle from a generated Sudoku.
    ///
    /// Every non-empty problem cell becomes fixed.
    #[must_use]
    pub fn new(puzzle: GeneratedSudoku) -> Self {
        let fixed = puzzle.fixed_mask();
        let GeneratedSudoku {
            seed,
            difficulty,
            problem,
            solution,
        } = puzzle;
        Self {
            seed,
            difficulty,
            cells: problem,
            solution,
            fixed,
        }
    }

    /// Returns the current cell values (`0` = empty).
    #[must_use]
    pub fn cells(&self) -> &Grid<u8> {
        &self.cells
    }

    /// Returns the solution.
    #[must_use]
    pub fn solution(&self) -> &Grid<u8> {
        &self.solution
    }

    /// Returns the fixed-cell mask.
    #[must_use]
    pub fn fixed(&self) -> &Grid<bool> {
        &self.fixed
    }

    /// Returns `true` if the cell at `pos` rejects input.
    ///
    /// Out-of-range positions are reported as fixed.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed.get(pos).copied().unwrap_or(true)
    }

    /// Returns `true` if the digit at `pos` repeats in one of its houses.
    #[must_use]
    pub fn conflicts_at(&self, pos: Position) -> bool {
        rules::sudoku_conflicts_at(&self.cells, pos)
    }

    /// Returns the number of cells that are still empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.count_empty()
    }
}

impl PuzzleEngine for SudokuPuzzle {
    const KIND: PuzzleKind = PuzzleKind::Sudoku;

    fn generate(seed: PuzzleSeed, difficulty: Difficulty) -> Self {
        Self::new(SudokuGenerator::new(difficulty).generate_with_seed(seed))
    }

    fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn size(&self) -> usize {
        self.cells.size()
    }

    fn values(&self) -> Grid<u8> {
        self.cells.clone()
    }

    fn mask(&self) -> Grid<bool> {
        self.fixed.clone()
    }

    fn set_cell(&mut self, pos: Position, value: u8) -> Option<u8> {
        if value > MAX_DIGIT || self.is_fixed(pos) {
            return None;
        }
        self.cells[pos] = value;
        Some(value)
    }

    fn apply_hint(&mut self) -> Option<(Position, u8)> {
        let pos = self
            .cells
            .positions()
            .find(|&pos| self.cells[pos] != self.solution[pos])?;
        let value = self.solution[pos];
        self.cells[pos] = value;
        self.fixed[pos] = true;
        Some((pos, value))
    }

    fn reset(&mut self) -> Vec<(Position, u8)> {
        let cleared: Vec<_> = self
            .cells
            .positions()
            .filter(|&pos| !self.fixed[pos])
            .map(|pos| (pos, 0))
            .collect();
        for &(pos, value) in &cleared {
            self.cells[pos] = value;
        }
        cleared
    }

    fn is_solved(&self) -> bool {
        rules::sudoku_matches_solution(&self.cells, &self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy() -> SudokuPuzzle {
        SudokuPuzzle::generate(PuzzleSeed::new(20_241_101), Difficulty::Easy)
    }

    fn first_open(puzzle: &SudokuPuzzle) -> Position {
        puzzle
            .cells()
            .positions()
            .find(|&pos| !puzzle.is_fixed(pos))
            .unwrap()
    }

    #[test]
    fn test_new_marks_givens_fixed() {
        let puzzle = easy();
        assert_eq!(puzzle.empty_count(), 30);
        assert_eq!(puzzle.fixed().count_set(), 51);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_fixed_and_invalid_writes_are_rejected() {
        let mut puzzle = easy();
        let given = puzzle.cells().positions().find(|&pos| puzzle.is_fixed(pos)).unwrap();
        let before = puzzle.clone();
        assert_eq!(puzzle.set_cell(given, 0), None);
        assert_eq!(puzzle.set_cell(Position::new(9, 0), 1), None);
        assert_eq!(puzzle.set_cell(first_open(&puzzle), 10), None);
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_filling_the_solution_solves() {
        let mut puzzle = easy();
        for pos in puzzle.cells().positions() {
            if !puzzle.is_fixed(pos) {
                let digit = puzzle.solution()[pos];
                puzzle.set_cell(pos, digit);
            }
        }
        assert!(puzzle.is_solved());
        assert!(rules::is_valid_sudoku_solution(puzzle.cells()));
    }

    #[test]
    fn test_hint_fixes_first_wrong_cell() {
        let mut puzzle = easy();
        let open = first_open(&puzzle);
        let wrong = puzzle.solution()[open] % 9 + 1;
        puzzle.set_cell(open, wrong);

        let (pos, value) = puzzle.apply_hint().unwrap();
        assert_eq!(pos, open);
        assert_eq!(value, puzzle.solution()[open]);
        assert!(puzzle.is_fixed(open));
        assert_eq!(puzzle.set_cell(open, wrong), None);
    }

    #[test]
    fn test_reset_clears_only_editable_cells() {
        let mut puzzle = easy();
        let open = first_open(&puzzle);
        puzzle.set_cell(open, 5);
        let hinted = puzzle.apply_hint().unwrap().0;

        let cleared = puzzle.reset();
        assert_eq!(cleared.len(), 29);
        assert!(cleared.iter().all(|&(pos, value)| value == 0 && !puzzle.is_fixed(pos)));
        assert_ne!(puzzle.cells()[hinted], 0);
        assert_eq!(puzzle.empty_count(), 29);
    }

    #[test]
    fn test_solved_puzzle_has_no_hint() {
        let mut puzzle = easy();
        while puzzle.apply_hint().is_some() {}
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.apply_hint(), None);
    }
}
