//! Puzzle sessions for Sudoku and Hitori.
//!
//! [`PuzzleLifecycle`] runs one puzzle through generation, play, hints,
//! completion or failure, and reset. The puzzle-specific rules live behind
//! the [`PuzzleEngine`] trait, implemented by [`SudokuPuzzle`] and
//! [`HitoriPuzzle`].
//!
//! Timing and scoring are delegated to a [`TimerService`] and a
//! [`ScoreService`] supplied by the host. [`CountdownTimer`] and
//! [`ScoreBoard`] are ready-made implementations.
//!
//! # Examples
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use gridlogic_core::{Difficulty, Position};
//! use gridlogic_game::{
//!     CountdownTimer, HitoriPuzzle, LifecycleSettings, PuzzleEvent, PuzzleLifecycle,
//!     ScoreBoard, Services,
//! };
//! use gridlogic_generator::PuzzleSeed;
//!
//! let timer = Rc::new(RefCell::new(CountdownTimer::default()));
//! let services = Services::new()
//!     .with_timer(timer.clone())
//!     .with_score(Rc::new(RefCell::new(ScoreBoard::default())));
//!
//! let mut lifecycle = PuzzleLifecycle::<HitoriPuzzle>::new(services, LifecycleSettings::default());
//! lifecycle.initialize_with_seed(PuzzleSeed::new(20_240_203), Difficulty::Easy);
//! lifecycle.toggle_black(Position::new(0, 0));
//!
//! let events = lifecycle.take_events();
//! assert!(events[0].is_generated());
//! assert!(matches!(
//!     events[1],
//!     PuzzleEvent::CellChanged { pos, value: 1 } if pos == Position::new(0, 0)
//! ));
//! ```

mod engine;
mod event;
mod hitori;
mod lifecycle;
mod score;
mod services;
mod settings;
mod sudoku;
mod timer;

pub use self::{
    engine::PuzzleEngine,
    event::{CompletionReport, PuzzleEvent},
    hitori::HitoriPuzzle,
    lifecycle::{LifecycleState, PuzzleLifecycle},
    score::{MIN_FINAL_SCORE, ScoreBoard},
    services::{ScoreService, Services, SharedScore, SharedTimer, TimerService, TimerSignal},
    settings::{EngineSettings, LifecycleSettings, ScoreSettings, TimerSettings},
    sudoku::SudokuPuzzle,
    timer::{CountdownTimer, TimerEvent},
};
