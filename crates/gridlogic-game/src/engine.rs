//! The per-puzzle-type seam driven by [`PuzzleLifecycle`](crate::PuzzleLifecycle).

use gridlogic_core::{Difficulty, Grid, Position, PuzzleKind};
use gridlogic_generator::PuzzleSeed;

/// Puzzle-specific state and rules behind a lifecycle.
///
/// An engine owns its grids. It generates itself from a seed, applies single
/// cell writes, locates hints, and answers whether the current state is a
/// complete solution. State transitions, services and events are handled by
/// the lifecycle.
pub trait PuzzleEngine {
    /// The puzzle kind, used to derive daily seeds.
    const KIND: PuzzleKind;

    /// Builds a new puzzle from `seed`.
    fn generate(seed: PuzzleSeed, difficulty: Difficulty) -> Self;

    /// Returns the seed the puzzle was built from.
    fn seed(&self) -> PuzzleSeed;

    /// Returns the difficulty the puzzle was built for.
    fn difficulty(&self) -> Difficulty;

    /// Returns the grid side length.
    fn size(&self) -> usize;

    /// Returns the cell values published with the generated puzzle.
    fn values(&self) -> Grid<u8>;

    /// Returns the per-cell mask published with the generated puzzle.
    fn mask(&self) -> Grid<bool>;

    /// Writes `value` at `pos`.
    ///
    /// Returns the value now stored, or `None` if the write was rejected
    /// (position out of range, fixed cell, or invalid value).
    fn set_cell(&mut self, pos: Position, value: u8) -> Option<u8>;

    /// Corrects the first cell, in row-major order, that disagrees with the
    /// solution. Returns the corrected cell and its new value.
    fn apply_hint(&mut self) -> Option<(Position, u8)>;

    /// Clears every player-editable cell and returns the cleared cells with
    /// their new values, in row-major order.
    fn reset(&mut self) -> Vec<(Position, u8)>;

    /// Returns `true` if the current state is a complete valid solution.
    fn is_solved(&self) -> bool;
}
