//! Hitori puzzle state.

use gridlogic_core::{Difficulty, Grid, Position, PuzzleKind, rules};
use gridlogic_generator::{GeneratedHitori, HitoriGenerator, PuzzleSeed};

use crate::PuzzleEngine;

/// A Hitori puzzle in play.
///
/// The numbers never change. The player edits a black/white shading that
/// starts all white. Any shading that satisfies the rules completes the
/// puzzle, not only the generated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitoriPuzzle {
    seed: PuzzleSeed,
    difficulty: Difficulty,
    numbers: Grid<u8>,
    solution_mask: Grid<bool>,
    player_mask: Grid<bool>,
}

impl HitoriPuzzle {
    /// Cell value reported for a black cell.
    pub const BLACK: u8 = 1;
    /// Cell value reported for a white cell.
    pub const WHITE: u8 = 0;

    /// Creates a puzzle from a generated Hitori with an all-white shading.
    #[must_use]
    pub fn new(puzzle: GeneratedHitori) -> Self {
        let GeneratedHitori {
            seed,
            difficulty,
            numbers,
            solution_mask,
            black_target: _,
        } = puzzle;
        let player_mask = Grid::filled(numbers.size(), false);
        Self {
            seed,
            difficulty,
            numbers,
            solution_mask,
            player_mask,
        }
    }

    /// Returns the numbers.
    #[must_use]
    pub fn numbers(&self) -> &Grid<u8> {
        &self.numbers
    }

    /// Returns the generated solution shading.
    #[must_use]
    pub fn solution_mask(&self) -> &Grid<bool> {
        &self.solution_mask
    }

    /// Returns the player's shading.
    #[must_use]
    pub fn player_mask(&self) -> &Grid<bool> {
        &self.player_mask
    }

    /// Returns `true` if the player shaded the cell at `pos`.
    #[must_use]
    pub fn is_black(&self, pos: Position) -> bool {
        self.player_mask.get(pos).copied().unwrap_or(false)
    }

    /// Returns `true` if the cell at `pos` is black next to another black cell.
    #[must_use]
    pub fn error_at(&self, pos: Position) -> bool {
        rules::hitori_error_at(&self.player_mask, pos)
    }

    /// Returns `true` if the white cell at `pos` repeats a number in its row.
    #[must_use]
    pub fn row_duplicate(&self, pos: Position) -> bool {
        rules::hitori_row_duplicate(&self.numbers, &self.player_mask, pos)
    }

    /// Returns `true` if the white cell at `pos` repeats a number in its
    /// column.
    #[must_use]
    pub fn column_duplicate(&self, pos: Position) -> bool {
        rules::hitori_column_duplicate(&self.numbers, &self.player_mask, pos)
    }
}

impl PuzzleEngine for HitoriPuzzle {
    const KIND: PuzzleKind = PuzzleKind::Hitori;

    fn generate(seed: PuzzleSeed, difficulty: Difficulty) -> Self {
        Self::new(HitoriGenerator::new(difficulty).generate_with_seed(seed))
    }

    fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn size(&self) -> usize {
        self.numbers.size()
    }

    fn values(&self) -> Grid<u8> {
        self.numbers.clone()
    }

    fn mask(&self) -> Grid<bool> {
        self.player_mask.clone()
    }

    fn set_cell(&mut self, pos: Position, value: u8) -> Option<u8> {
        let cell = self.player_mask.get_mut(pos)?;
        *cell = value == Self::BLACK;
        Some(u8::from(*cell))
    }

    fn apply_hint(&mut self) -> Option<(Position, u8)> {
        let pos = self
            .player_mask
            .positions()
            .find(|&pos| self.player_mask[pos] != self.solution_mask[pos])?;
        let black = self.solution_mask[pos];
        self.player_mask[pos] = black;
        Some((pos, u8::from(black)))
    }

    fn reset(&mut self) -> Vec<(Position, u8)> {
        self.player_mask.fill(false);
        self.player_mask.positions().map(|pos| (pos, Self::WHITE)).collect()
    }

    fn is_solved(&self) -> bool {
        rules::hitori_solved(&self.numbers, &self.player_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy() -> HitoriPuzzle {
        HitoriPuzzle::generate(PuzzleSeed::new(20_240_203), Difficulty::Easy)
    }

    #[test]
    fn test_starts_all_white() {
        let puzzle = easy();
        assert_eq!(puzzle.size(), 5);
        assert_eq!(puzzle.player_mask().count_set(), 0);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_copying_the_solution_solves() {
        let mut puzzle = easy();
        let solution = puzzle.solution_mask().clone();
        for (pos, &black) in solution.enumerate() {
            puzzle.set_cell(pos, u8::from(black));
        }
        assert!(puzzle.is_solved());
        assert!(puzzle.numbers().positions().all(|pos| {
            !puzzle.error_at(pos) && !puzzle.row_duplicate(pos) && !puzzle.column_duplicate(pos)
        }));
    }

    #[test]
    fn test_adjacent_blacks_are_errors() {
        let mut puzzle = easy();
        puzzle.set_cell(Position::new(2, 2), HitoriPuzzle::BLACK);
        puzzle.set_cell(Position::new(2, 3), HitoriPuzzle::BLACK);
        assert!(puzzle.error_at(Position::new(2, 2)));
        assert!(puzzle.error_at(Position::new(2, 3)));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_set_cell_value_mapping() {
        let mut puzzle = easy();
        let pos = Position::new(0, 0);
        assert_eq!(puzzle.set_cell(pos, HitoriPuzzle::BLACK), Some(HitoriPuzzle::BLACK));
        assert!(puzzle.is_black(pos));
        assert_eq!(puzzle.set_cell(pos, 7), Some(HitoriPuzzle::WHITE));
        assert!(!puzzle.is_black(pos));
        assert_eq!(puzzle.set_cell(Position::new(5, 0), HitoriPuzzle::BLACK), None);
    }

    #[test]
    fn test_hints_converge_to_the_solution() {
        let mut puzzle = easy();
        let wrong = puzzle.solution_mask().count_set();
        for _ in 0..wrong {
            assert!(puzzle.apply_hint().is_some());
        }
        assert_eq!(puzzle.player_mask(), puzzle.solution_mask());
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.apply_hint(), None);
    }

    #[test]
    fn test_reset_whitens_every_cell() {
        let mut puzzle = easy();
        puzzle.set_cell(Position::new(1, 1), HitoriPuzzle::BLACK);
        let cleared = puzzle.reset();
        assert_eq!(cleared.len(), 25);
        assert!(cleared.iter().all(|&(_, value)| value == HitoriPuzzle::WHITE));
        assert_eq!(puzzle.player_mask().count_set(), 0);
    }
}
