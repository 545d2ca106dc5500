//! Hitori construction from a Latin square.
//!
//! Generation runs in three passes over one random stream:
//!
//! 1. build a Latin square by cyclically shifting a shuffled first row
//! 2. shade cells greedily in random order, skipping any cell that would
//!    touch another black cell or split the white region
//! 3. overwrite every black cell with a number copied from a white cell of
//!    the same row, so each black cell hides a duplicate
//!
//! The shaded cells form the solution mask. The whites keep their Latin
//! square values, so the mask always solves the generated numbers.

use chrono::NaiveDate;
use gridlogic_core::{Difficulty, Grid, Position, PuzzleKind, rules};

use crate::{DeterministicRandom, PuzzleSeed};

/// A generated Hitori puzzle with its solution mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHitori {
    /// Seed used to generate the puzzle.
    pub seed: PuzzleSeed,
    /// Difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Numbers shown to the player.
    pub numbers: Grid<u8>,
    /// Cells to shade (`true` = black).
    pub solution_mask: Grid<bool>,
    /// Number of black cells the placement pass aimed for.
    pub black_target: usize,
}

impl GeneratedHitori {
    /// Returns the number of black cells in the solution.
    #[must_use]
    pub fn black_count(&self) -> usize {
        self.solution_mask.count_set()
    }

    /// Returns how many black cells the placement pass failed to place.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.black_target.saturating_sub(self.black_count())
    }
}

/// Builds Hitori puzzles for one difficulty.
///
/// # Examples
///
/// ```
/// use gridlogic_core::{Difficulty, rules};
/// use gridlogic_generator::{HitoriGenerator, PuzzleSeed};
///
/// let generator = HitoriGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::new(20_240_203));
///
/// assert_eq!(puzzle.numbers.size(), 5);
/// assert!(rules::hitori_solved(&puzzle.numbers, &puzzle.solution_mask));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HitoriGenerator {
    difficulty: Difficulty,
}

impl HitoriGenerator {
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
    pub fn generate_for_date(&self, date: NaiveDate) -> GeneratedHitori {
        self.generate_with_seed(PuzzleSeed::for_puzzle(
            date,
            PuzzleKind::Hitori,
            self.difficulty,
        ))
    }

    /// Generates a puzzle from `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedHitori {
        let size = self.difficulty.hitori_grid_size();
        let mut rng = DeterministicRandom::new(seed);

        let mut numbers = latin_square(&mut rng, size);
        let black_target = black_target(&mut rng, size);
        let solution_mask = place_blacks(&mut rng, size, black_target);
        inject_duplicates(&mut rng, &mut numbers, &solution_mask);

        let puzzle = GeneratedHitori {
            seed,
            difficulty: self.difficulty,
            numbers,
            solution_mask,
            black_target,
        };
        log::debug!(
            "generated hitori: seed={seed}, size={size}, blacks={}/{black_target}",
            puzzle.black_count()
        );
        if puzzle.shortfall() > 0 {
            log::debug!("hitori black placement fell short by {}", puzzle.shortfall());
        }
        puzzle
    }
}

fn latin_square(rng: &mut DeterministicRandom, size: usize) -> Grid<u8> {
    let mut first_row: Vec<u8> = (1..=size).filter_map(|n| u8::try_from(n).ok()).collect();
    rng.shuffle(&mut first_row);

    // Row 0 keeps shift 0; rows 1.. take a permutation of 1..size so that no
    // two rows share a shift. A shift of `(below(size - 1) + 1) * row % size`
    // can repeat across rows and duplicate a whole row.
    let mut shifts: Vec<usize> = (1..size).collect();
    rng.shuffle(&mut shifts);

    Grid::from_fn(size, |pos| {
        let shift = match pos.row() {
            0 => 0,
            row => shifts[row - 1],
        };
        first_row[(pos.col() + shift) % size]
    })
}

fn black_target(rng: &mut DeterministicRandom, size: usize) -> usize {
    let target = size * size / 4 + rng.below(size);
    target.min(size * size / 3).max(size)
}

fn place_blacks(rng: &mut DeterministicRandom, size: usize, target: usize) -> Grid<bool> {
    let mut mask = Grid::filled(size, false);
    let mut candidates: Vec<Position> = mask.positions().collect();
    rng.shuffle(&mut candidates);

    let mut placed = 0;
    for pos in candidates {
        if placed == target {
            break;
        }
        if rules::has_adjacent_black(&mask, pos) {
            continue;
        }
        mask[pos] = true;
        if rules::white_cells_connected(&mask) {
            placed += 1;
        } else {
            mask[pos] = false;
        }
    }
    mask
}

fn inject_duplicates(rng: &mut DeterministicRandom, numbers: &mut Grid<u8>, mask: &Grid<bool>) {
    let size = numbers.size();
    for pos in mask.positions().filter(|&pos| mask[pos]) {
        let whites: Vec<Position> = (0..size)
            .map(|col| Position::new(pos.row(), col))
            .filter(|&other| other != pos && !mask[other])
            .collect();
        if whites.is_empty() {
            continue;
        }
        let source = whites[rng.below(whites.len())];
        numbers[pos] = numbers[source];
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn is_latin(grid: &Grid<u8>) -> bool {
        let size = grid.size();
        let full = |mut values: Vec<u8>| {
            values.sort_unstable();
            values.into_iter().eq((1..=size).filter_map(|n| u8::try_from(n).ok()))
        };
        (0..size).all(|i| full(grid.row(i).to_vec()) && full(grid.column(i).copied().collect()))
    }

    #[test]
    fn test_latin_square_for_every_size() {
        for size in 5..=9 {
            for seed in 0..20 {
                let mut rng = DeterministicRandom::new(PuzzleSeed::new(seed));
                let grid = latin_square(&mut rng, size);
                assert!(is_latin(&grid), "size {size}, seed {seed}:\n{grid}");
            }
        }
    }

    #[test]
    fn test_black_target_is_clamped() {
        for size in 5..=9 {
            let mut rng = DeterministicRandom::new(PuzzleSeed::new(3));
            for _ in 0..50 {
                let target = black_target(&mut rng, size);
                assert!(target >= size);
                assert!(target <= size * size / 3);
            }
        }
    }

    #[test]
    fn test_black_placement_respects_target() {
        let mut rng = DeterministicRandom::new(PuzzleSeed::new(11));
        let mask = place_blacks(&mut rng, 6, 4);
        assert_eq!(mask.count_set(), 4);
        assert!(!rules::has_adjacent_black_pair(&mask));
        assert!(rules::white_cells_connected(&mask));
    }

    #[test]
    fn test_injection_only_touches_black_cells() {
        let mut rng = DeterministicRandom::new(PuzzleSeed::new(5));
        let original = latin_square(&mut rng, 5);
        let mask: Grid<bool> = "#.#.. ..... .#... ....# #....".parse().unwrap();
        let mut numbers = original.clone();
        inject_duplicates(&mut rng, &mut numbers, &mask);
        for pos in numbers.positions() {
            if mask[pos] {
                assert!(rules::hitori_row_duplicate(&numbers, &mask.map(|_| false), pos));
            } else {
                assert_eq!(numbers[pos], original[pos]);
            }
        }
    }

    #[test]
    fn test_new_year_easy_puzzle() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let puzzle = HitoriGenerator::new(Difficulty::Easy).generate_for_date(day);
        assert_eq!(puzzle.seed, PuzzleSeed::new(20_240_203));
        assert_eq!(puzzle.numbers.size(), 5);
        assert!(puzzle.black_count() > 0);
        assert!(rules::hitori_solved(&puzzle.numbers, &puzzle.solution_mask));
        assert!(!rules::hitori_solved(&puzzle.numbers, &Grid::filled(5, false)));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let generator = HitoriGenerator::new(Difficulty::Expert);
        let seed = PuzzleSeed::new(20_240_402);
        assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
    }

    fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
        prop::sample::select(Difficulty::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_any_seed_yields_a_solvable_puzzle(
            seed in any::<i64>(),
            difficulty in difficulty_strategy(),
        ) {
            let puzzle = HitoriGenerator::new(difficulty).generate_with_seed(PuzzleSeed::new(seed));
            let size = difficulty.hitori_grid_size();
            prop_assert_eq!(puzzle.numbers.size(), size);
            prop_assert!(!rules::has_adjacent_black_pair(&puzzle.solution_mask));
            prop_assert!(rules::white_cells_connected(&puzzle.solution_mask));
            prop_assert!(rules::hitori_solved(&puzzle.numbers, &puzzle.solution_mask));
            prop_assert!(puzzle.black_count() <= puzzle.black_target);
            prop_assert!(puzzle.numbers.iter().all(|&n| n >= 1 && usize::from(n) <= size));
        }
    }
}
