//! Notifications emitted by a lifecycle.

use std::mem;

use gridlogic_core::{Grid, Position};

/// Final result of a completed puzzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionReport {
    /// Score returned by the score service, or 0 without one.
    pub score: i64,
    /// Seconds left on the timer, or 0 without one.
    pub time_remaining: f64,
}

/// A change observed by the host.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum PuzzleEvent {
    /// A new puzzle is ready.
    ///
    /// For Sudoku `values` is the problem grid and `mask` marks the given
    /// cells. For Hitori `values` holds the numbers and `mask` is the (empty)
    /// player shading.
    Generated {
        /// Cell values shown to the player.
        values: Grid<u8>,
        /// Per-cell flags, see above.
        mask: Grid<bool>,
    },
    /// The selection moved to this cell.
    CellSelected(Position),
    /// A cell changed. Hitori reports 1 for black and 0 for white.
    CellChanged {
        /// The changed cell.
        pos: Position,
        /// Its new value.
        value: u8,
    },
    /// The puzzle was solved.
    Completed(CompletionReport),
    /// Time ran out before the puzzle was solved.
    Failed,
}

/// Events waiting to be drained by the host, in firing order.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    events: Vec<PuzzleEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: PuzzleEvent) {
        self.events.push(event);
    }

    pub(crate) fn take_all(&mut self) -> Vec<PuzzleEvent> {
        mem::take(&mut self.events)
    }
}
