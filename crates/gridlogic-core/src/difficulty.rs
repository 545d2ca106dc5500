//! Difficulty levels and their fixed parameter table.

use std::fmt::{self, Display};

/// A puzzle difficulty level (1-5).
///
/// Every level maps to one row of a fixed parameter table
/// ([`DifficultyProfile`]) shared by all puzzle types.
///
/// # Examples
///
/// ```
/// use gridlogic_core::Difficulty;
///
/// let difficulty = Difficulty::try_from(3)?;
/// assert_eq!(difficulty, Difficulty::Hard);
/// assert_eq!(difficulty.sudoku_cells_removed(), 50);
/// assert_eq!(difficulty.hitori_grid_size(), 7);
/// assert_eq!(difficulty.time_limit(), 180.0);
///
/// assert!(Difficulty::try_from(0).is_err());
/// # Ok::<(), gridlogic_core::DifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Difficulty {
    /// Level 1.
    Easy = 1,
    /// Level 2.
    Medium = 2,
    /// Level 3.
    Hard = 3,
    /// Level 4.
    Expert = 4,
    /// Level 5.
    Master = 5,
}

/// Parameters derived from a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Number of solution cells blanked out of a Sudoku puzzle.
    pub sudoku_cells_removed: usize,
    /// Side length of a Hitori grid.
    pub hitori_grid_size: usize,
    /// Countdown length in seconds. Sudoku and Hitori share the same limits.
    pub time_limit: f64,
}

const PROFILES: [DifficultyProfile; 5] = [
    DifficultyProfile {
        sudoku_cells_removed: 30,
        hitori_grid_size: 5,
        time_limit: 300.0,
    },
    DifficultyProfile {
        sudoku_cells_removed: 40,
        hitori_grid_size: 6,
        time_limit: 240.0,
    },
    DifficultyProfile {
        sudoku_cells_removed: 50,
        hitori_grid_size: 7,
        time_limit: 180.0,
    },
    DifficultyProfile {
        sudoku_cells_removed: 55,
        hitori_grid_size: 8,
        time_limit: 120.0,
    },
    DifficultyProfile {
        sudoku_cells_removed: 60,
        hitori_grid_size: 9,
        time_limit: 90.0,
    },
];

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Master,
    ];

    /// Returns the numeric level (1-5).
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Returns the parameter row for this level.
    #[must_use]
    pub const fn profile(self) -> &'static DifficultyProfile {
        &PROFILES[self as usize - 1]
    }

    /// Returns how many cells are removed from a generated Sudoku.
    #[must_use]
    pub const fn sudoku_cells_removed(self) -> usize {
        self.profile().sudoku_cells_removed
    }

    /// Returns the Hitori grid side length.
    #[must_use]
    pub const fn hitori_grid_size(self) -> usize {
        self.profile().hitori_grid_size
    }

    /// Returns the countdown length in seconds.
    #[must_use]
    pub const fn time_limit(self) -> f64 {
        self.profile().time_limit
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.level(), f)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.level()
    }
}

/// Error returned for a difficulty level outside 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("difficulty level must be 1-5, got {level}")]
pub struct DifficultyError {
    /// The rejected level.
    pub level: u8,
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            4 => Ok(Self::Expert),
            5 => Ok(Self::Master),
            _ => Err(DifficultyError { level }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parameter_table_matches_levels() {
        let table = [
            (1, 30, 5, 300.0),
            (2, 40, 6, 240.0),
            (3, 50, 7, 180.0),
            (4, 55, 8, 120.0),
            (5, 60, 9, 90.0),
        ];
        for (level, removed, size, limit) in table {
            let difficulty = Difficulty::try_from(level).unwrap();
            assert_eq!(difficulty.level(), level);
            assert_eq!(difficulty.sudoku_cells_removed(), removed);
            assert_eq!(difficulty.hitori_grid_size(), size);
            assert_eq!(difficulty.time_limit(), limit);
        }
    }

    #[test]
    fn test_out_of_range_levels_are_rejected() {
        assert_eq!(Difficulty::try_from(0), Err(DifficultyError { level: 0 }));
        assert_eq!(Difficulty::try_from(6), Err(DifficultyError { level: 6 }));
        assert_eq!(
            DifficultyError { level: 9 }.to_string(),
            "difficulty level must be 1-5, got 9"
        );
    }

    #[test]
    fn test_all_is_ordered_by_level() {
        for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(difficulty.level()), i + 1);
        }
    }
}
