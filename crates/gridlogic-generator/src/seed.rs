//! Date-derived puzzle seeds and the daily line-up.

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use chrono::{Datelike as _, NaiveDate};
use gridlogic_core::{Difficulty, PuzzleKind};

use crate::DeterministicRandom;

/// Number of puzzle kinds offered per day unless the caller asks otherwise.
pub const DEFAULT_DAILY_COUNT: usize = 3;

/// A seed for puzzle generation.
///
/// Seeds are plain integers so that every player computing the seed for the
/// same date, kind and difficulty gets the same puzzle.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gridlogic_core::{Difficulty, PuzzleKind};
/// use gridlogic_generator::PuzzleSeed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let seed = PuzzleSeed::for_puzzle(date, PuzzleKind::Hitori, Difficulty::Medium);
/// assert_eq!(seed.get(), 20_240_101 + 2 * 100 + 2);
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleSeed(i64);

impl PuzzleSeed {
    /// Wraps a raw seed value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the date component `year * 10000 + month * 100 + day`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let year = i64::from(date.year());
        let month = i64::from(date.month());
        let day = i64::from(date.day());
        Self(year * 10_000 + month * 100 + day)
    }

    /// Returns the seed of the puzzle of `kind` at `difficulty` for `date`.
    #[must_use]
    pub fn for_puzzle(date: NaiveDate, kind: PuzzleKind, difficulty: Difficulty) -> Self {
        let Self(base) = Self::for_date(date);
        Self(base + SeedOffset::for_kind(kind).apply(difficulty))
    }
}

impl From<i64> for PuzzleSeed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SeedParseError {
    /// The text is not a decimal integer.
    #[display("invalid puzzle seed: {_0}")]
    InvalidInteger(#[from] ParseIntError),
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Per-kind adjustment added to the date seed.
///
/// The offset is `difficulty * multiplier + constant`. Distinct constants keep
/// two kinds from sharing a seed at the same difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOffset {
    /// Factor applied to the difficulty level.
    pub multiplier: i64,
    /// Constant identifying the puzzle kind.
    pub constant: i64,
}

impl SeedOffset {
    /// Returns the offset used for `kind`.
    #[must_use]
    pub const fn for_kind(kind: PuzzleKind) -> Self {
        let (multiplier, constant) = match kind {
            PuzzleKind::Sudoku => (1000, 0),
            PuzzleKind::Streams => (100, 1),
            PuzzleKind::Hitori => (100, 2),
            PuzzleKind::Nurikabe => (100, 3),
        };
        Self {
            multiplier,
            constant,
        }
    }

    /// Returns the offset for `difficulty`.
    #[must_use]
    pub fn apply(self, difficulty: Difficulty) -> i64 {
        i64::from(difficulty.level()) * self.multiplier + self.constant
    }
}

/// Picks the puzzle kinds offered on `date`.
///
/// The pick is seeded by the date alone, so everyone sees the same line-up.
/// At most `count` distinct kinds are returned, in pick order.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use gridlogic_generator::{DEFAULT_DAILY_COUNT, daily_lineup};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let lineup = daily_lineup(date, DEFAULT_DAILY_COUNT);
/// assert_eq!(lineup.len(), 3);
/// assert_eq!(lineup, daily_lineup(date, DEFAULT_DAILY_COUNT));
/// ```
#[must_use]
pub fn daily_lineup(date: NaiveDate, count: usize) -> Vec<PuzzleKind> {
    let mut rng = DeterministicRandom::new(PuzzleSeed::for_date(date));
    let mut remaining = PuzzleKind::ALL.to_vec();
    let mut lineup = Vec::with_capacity(count.min(remaining.len()));
    while lineup.len() < count && !remaining.is_empty() {
        let index = rng.below(remaining.len());
        lineup.push(remaining.remove(index));
    }
    lineup
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_component() {
        assert_eq!(PuzzleSeed::for_date(date(2024, 1, 1)).get(), 20_240_101);
        assert_eq!(PuzzleSeed::for_date(date(1999, 12, 31)).get(), 19_991_231);
    }

    #[test]
    fn test_offsets_per_kind() {
        let day = date(2024, 1, 1);
        let cases = [
            (PuzzleKind::Sudoku, Difficulty::Easy, 20_241_101),
            (PuzzleKind::Sudoku, Difficulty::Master, 20_245_101),
            (PuzzleKind::Streams, Difficulty::Hard, 20_240_402),
            (PuzzleKind::Hitori, Difficulty::Easy, 20_240_203),
            (PuzzleKind::Nurikabe, Difficulty::Expert, 20_240_504),
        ];
        for (kind, difficulty, expected) in cases {
            assert_eq!(
                PuzzleSeed::for_puzzle(day, kind, difficulty).get(),
                expected,
                "{kind} {difficulty}"
            );
        }
    }

    #[test]
    fn test_kinds_do_not_collide_on_the_same_day() {
        let day = date(2025, 6, 30);
        let seeds: HashSet<_> = PuzzleKind::ALL
            .into_iter()
            .flat_map(|kind| {
                Difficulty::ALL
                    .into_iter()
                    .map(move |difficulty| PuzzleSeed::for_puzzle(day, kind, difficulty))
            })
            .collect();
        assert_eq!(seeds.len(), PuzzleKind::ALL.len() * Difficulty::ALL.len());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(" 123 ".parse::<PuzzleSeed>(), Ok(PuzzleSeed::new(123)));
        assert_eq!("-5".parse::<PuzzleSeed>(), Ok(PuzzleSeed::new(-5)));
        let err = "abc".parse::<PuzzleSeed>().unwrap_err();
        assert!(err.to_string().starts_with("invalid puzzle seed"));
    }

    #[test]
    fn test_lineup_is_distinct_and_bounded() {
        for day in 1..=28 {
            let day = date(2024, 2, day);
            let lineup = daily_lineup(day, DEFAULT_DAILY_COUNT);
            assert_eq!(lineup.len(), DEFAULT_DAILY_COUNT);
            let distinct: HashSet<_> = lineup.iter().collect();
            assert_eq!(distinct.len(), lineup.len());
        }
        assert_eq!(daily_lineup(date(2024, 1, 1), 10).len(), PuzzleKind::ALL.len());
        assert!(daily_lineup(date(2024, 1, 1), 0).is_empty());
    }

    #[test]
    fn test_lineup_prefix_is_stable() {
        let day = date(2024, 7, 4);
        let full = daily_lineup(day, PuzzleKind::ALL.len());
        assert_eq!(daily_lineup(day, 2), &full[..2]);
    }
}
