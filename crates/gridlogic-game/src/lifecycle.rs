//! The generate, play, complete/fail, reset state machine.

use chrono::Local;
use gridlogic_core::{Difficulty, Position};
use gridlogic_generator::PuzzleSeed;

use crate::{
    CompletionReport, HitoriPuzzle, LifecycleSettings, PuzzleEngine, PuzzleEvent, Services,
    SudokuPuzzle, event::EventQueue,
};

/// State of a [`PuzzleLifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum LifecycleState {
    /// No puzzle has been generated yet.
    #[display("uninitialized")]
    Uninitialized,
    /// A puzzle is being generated.
    #[display("generating")]
    Generating,
    /// The puzzle accepts input.
    #[display("playing")]
    Playing,
    /// The puzzle was solved.
    #[display("completed")]
    Completed,
    /// Time ran out.
    #[display("failed")]
    Failed,
}

/// Drives one puzzle of type `E` through its lifecycle.
///
/// The lifecycle owns the puzzle state and reports every observable change as
/// a [`PuzzleEvent`]. Hosts drain events with [`take_events`](Self::take_events)
/// after each call. Input, hints and time-up are only honoured while
/// [`Playing`](LifecycleState::Playing), so completion and failure are each
/// reported at most once per play-through.
///
/// # Examples
///
/// ```
/// use gridlogic_core::Difficulty;
/// use gridlogic_game::{LifecycleState, PuzzleEvent, PuzzleLifecycle, SudokuPuzzle};
/// use gridlogic_generator::PuzzleSeed;
///
/// let mut lifecycle = PuzzleLifecycle::<SudokuPuzzle>::default();
/// lifecycle.initialize_with_seed(PuzzleSeed::new(20_241_101), Difficulty::Easy);
/// assert_eq!(lifecycle.state(), LifecycleState::Playing);
///
/// while !lifecycle.validate_solution() {
///     lifecycle.provide_hint();
/// }
/// assert_eq!(lifecycle.state(), LifecycleState::Completed);
///
/// let events = lifecycle.take_events();
/// assert!(events.first().is_some_and(PuzzleEvent::is_generated));
/// assert!(events.last().is_some_and(PuzzleEvent::is_completed));
/// ```
#[derive(Debug)]
pub struct PuzzleLifecycle<E> {
    state: LifecycleState,
    puzzle: Option<E>,
    selection: Option<Position>,
    services: Services,
    settings: LifecycleSettings,
    events: EventQueue,
}

impl<E> Default for PuzzleLifecycle<E> {
    fn default() -> Self {
        Self::new(Services::default(), LifecycleSettings::default())
    }
}

impl<E> PuzzleLifecycle<E> {
    /// Creates an uninitialized lifecycle.
    #[must_use]
    pub fn new(services: Services, settings: LifecycleSettings) -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            puzzle: None,
            selection: None,
            services,
            settings,
            events: EventQueue::default(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Returns the puzzle, once generated.
    #[must_use]
    pub fn puzzle(&self) -> Option<&E> {
        self.puzzle.as_ref()
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Returns the injected services.
    #[must_use]
    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Returns the lifecycle settings.
    #[must_use]
    pub fn settings(&self) -> &LifecycleSettings {
        &self.settings
    }

    /// Drains the events emitted since the last call, in firing order.
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        self.events.take_all()
    }

    /// Pauses the timer.
    pub fn pause(&self) {
        self.services.pause_timer();
    }

    /// Resumes the timer.
    pub fn resume(&self) {
        self.services.resume_timer();
    }

    /// Fails the puzzle because the timer ran out.
    ///
    /// Ignored unless the puzzle is being played.
    pub fn handle_time_up(&mut self) {
        if self.state.is_playing() {
            self.fail();
        }
    }

    fn fail(&mut self) {
        self.state = LifecycleState::Failed;
        log::info!("puzzle failed: time up");
        self.events.push(PuzzleEvent::Failed);
    }
}

impl<E: PuzzleEngine> PuzzleLifecycle<E> {
    /// Generates the daily puzzle for `difficulty` and starts play.
    ///
    /// The date comes from [`LifecycleSettings::seed_date`], or the local date
    /// when unset.
    pub fn initialize(&mut self, difficulty: Difficulty) {
        let date = self
            .settings
            .seed_date
            .unwrap_or_else(|| Local::now().date_naive());
        self.initialize_with_seed(PuzzleSeed::for_puzzle(date, E::KIND, difficulty), difficulty);
    }

    /// Generates a puzzle from `seed` and starts play.
    ///
    /// Any previous puzzle is discarded. The timer is started with the
    /// difficulty's time limit and the score is reset.
    pub fn initialize_with_seed(&mut self, seed: PuzzleSeed, difficulty: Difficulty) {
        self.state = LifecycleState::Generating;
        self.selection = None;
        let puzzle = E::generate(seed, difficulty);

        self.services.start_timer(difficulty.time_limit());
        self.services.reset_score();
        self.events.push(PuzzleEvent::Generated {
            values: puzzle.values(),
            mask: puzzle.mask(),
        });
        log::info!(
            "{} puzzle ready: seed={seed}, difficulty={difficulty}, size={}",
            E::KIND,
            puzzle.size()
        );
        self.puzzle = Some(puzzle);
        self.state = LifecycleState::Playing;
    }

    /// Selects the cell at `pos`. Out-of-range positions are ignored.
    pub fn select_cell(&mut self, pos: Position) {
        if !self.state.is_playing() {
            return;
        }
        let Some(puzzle) = &self.puzzle else {
            return;
        };
        if pos.is_within(puzzle.size()) {
            self.selection = Some(pos);
            self.events.push(PuzzleEvent::CellSelected(pos));
        }
    }

    /// Writes `value` at `pos` and checks for completion.
    ///
    /// Rejected writes (fixed cell, out of range, invalid value) change
    /// nothing and emit nothing.
    pub fn set_cell_value(&mut self, pos: Position, value: u8) {
        if !self.state.is_playing() {
            return;
        }
        let Some(puzzle) = &mut self.puzzle else {
            return;
        };
        if let Some(value) = puzzle.set_cell(pos, value) {
            self.events.push(PuzzleEvent::CellChanged { pos, value });
            self.check_completion();
        }
    }

    /// Corrects the first wrong cell and charges a hint.
    ///
    /// The hint costs one hint on the score service and
    /// [`hint_time_penalty`](LifecycleSettings::hint_time_penalty) seconds on
    /// the timer. If the penalty exhausts the timer the puzzle fails, even
    /// when the hint completed the grid: failure takes precedence over
    /// completion. Nothing happens when no cell is wrong.
    pub fn provide_hint(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let Some(puzzle) = &mut self.puzzle else {
            return;
        };
        let Some((pos, value)) = puzzle.apply_hint() else {
            return;
        };
        log::debug!("hint applied at {pos}: {value}");
        self.events.push(PuzzleEvent::CellChanged { pos, value });

        self.services.use_hint();
        let signal = self.services.reduce_time(self.settings.hint_time_penalty);
        if signal.is_time_up() {
            self.fail();
            return;
        }
        self.check_completion();
    }

    /// Clears every player-editable cell and returns to play.
    ///
    /// Accepted once a puzzle has been generated; the puzzle is not
    /// regenerated and the timer and score are left untouched. A puzzle that
    /// is still solved after clearing (a Sudoku whose every cell came from a
    /// hint) keeps its `Completed` or `Failed` state.
    pub fn reset(&mut self) {
        if !matches!(
            self.state,
            LifecycleState::Playing | LifecycleState::Completed | LifecycleState::Failed
        ) {
            return;
        }
        let Some(puzzle) = &mut self.puzzle else {
            return;
        };
        let cleared = puzzle.reset();
        log::debug!("puzzle reset: {} cells cleared", cleared.len());
        for (pos, value) in cleared {
            self.events.push(PuzzleEvent::CellChanged { pos, value });
        }
        if !puzzle.is_solved() {
            self.state = LifecycleState::Playing;
        }
    }

    /// Returns `true` if the current state is a complete valid solution.
    #[must_use]
    pub fn validate_solution(&self) -> bool {
        self.puzzle.as_ref().is_some_and(PuzzleEngine::is_solved)
    }

    fn check_completion(&mut self) {
        if !self.state.is_playing() || !self.validate_solution() {
            return;
        }
        let Some(difficulty) = self.puzzle.as_ref().map(PuzzleEngine::difficulty) else {
            return;
        };
        self.state = LifecycleState::Completed;
        let time_remaining = self.services.current_time();
        let score = self.services.final_score(time_remaining, difficulty);
        log::info!("puzzle completed: score={score}, time_remaining={time_remaining}");
        self.events.push(PuzzleEvent::Completed(CompletionReport {
            score,
            time_remaining,
        }));
    }
}

impl PuzzleLifecycle<SudokuPuzzle> {
    /// Writes `digit` into the selected cell (`0` clears it).
    pub fn input_number(&mut self, digit: u8) {
        if let Some(pos) = self.selection {
            self.set_cell_value(pos, digit);
        }
    }
}

impl PuzzleLifecycle<HitoriPuzzle> {
    /// Flips the cell at `pos` between black and white.
    pub fn toggle_black(&mut self, pos: Position) {
        let Some(puzzle) = &self.puzzle else {
            return;
        };
        let value = if puzzle.is_black(pos) {
            HitoriPuzzle::WHITE
        } else {
            HitoriPuzzle::BLACK
        };
        self.set_cell_value(pos, value);
    }

    /// Flips the selected cell between black and white.
    pub fn toggle_selected(&mut self) {
        if let Some(pos) = self.selection {
            self.toggle_black(pos);
        }
    }
}
