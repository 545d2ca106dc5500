//! Puzzle types known to the daily rotation.

use std::str::FromStr;

/// A grid puzzle type.
///
/// All four kinds take part in seed derivation and the daily line-up; the
/// engine crate ships playable implementations for [`PuzzleKind::Sudoku`] and
/// [`PuzzleKind::Hitori`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PuzzleKind {
    /// Classic 9×9 number place.
    #[display("sudoku")]
    Sudoku,
    /// Path-connecting puzzle.
    #[display("streams")]
    Streams,
    /// Shade duplicates so that no number repeats in a row or column.
    #[display("hitori")]
    Hitori,
    /// Island/sea partition puzzle.
    #[display("nurikabe")]
    Nurikabe,
}

impl PuzzleKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 4] = [Self::Sudoku, Self::Streams, Self::Hitori, Self::Nurikabe];
}

/// Error returned when a puzzle kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown puzzle kind {name:?}")]
pub struct PuzzleKindParseError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for PuzzleKind {
    type Err = PuzzleKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| PuzzleKindParseError { name: s.to_owned() })
    }
}
