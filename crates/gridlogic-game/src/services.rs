//! Timer and score collaborators consumed by the lifecycle.
//!
//! The lifecycle only talks to these traits. Hosts own the concrete services
//! and share them with the lifecycle through [`SharedTimer`] and
//! [`SharedScore`] handles, so the host can keep ticking the timer and reading
//! the score while a puzzle is in play.

use std::{cell::RefCell, fmt, rc::Rc};

use gridlogic_core::Difficulty;

/// Result of an operation that may have exhausted the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TimerSignal {
    /// Time is left, or the timer does not count down.
    Running,
    /// The operation drove the remaining time to zero.
    TimeUp,
}

/// A puzzle timer.
pub trait TimerService {
    /// Starts a new run of `duration` seconds.
    fn start_timer(&mut self, duration: f64);

    /// Pauses the run.
    fn pause_timer(&mut self);

    /// Resumes a paused run.
    fn resume_timer(&mut self);

    /// Takes `seconds` off the remaining time, clamping at zero.
    ///
    /// Returns [`TimerSignal::TimeUp`] if this call exhausted the timer.
    fn reduce_time(&mut self, seconds: f64) -> TimerSignal;

    /// Returns the current time in seconds (remaining time when counting
    /// down).
    fn current_time(&self) -> f64;
}

/// A puzzle score keeper.
pub trait ScoreService {
    /// Clears the score and hint count for a new puzzle.
    fn reset_score(&mut self);

    /// Records one hint.
    fn use_hint(&mut self);

    /// Computes, stores and returns the final score.
    fn calculate_final_score(&mut self, time_remaining: f64, difficulty: Difficulty) -> i64;

    /// Returns the current score.
    fn current_score(&self) -> i64;
}

/// Timer handle shared between the host and a lifecycle.
pub type SharedTimer = Rc<RefCell<dyn TimerService>>;

/// Score handle shared between the host and a lifecycle.
pub type SharedScore = Rc<RefCell<dyn ScoreService>>;

/// Optional collaborators injected into a lifecycle.
///
/// A missing service turns every call to it into a no-op; queries to a
/// missing service return zero.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use gridlogic_game::{CountdownTimer, ScoreBoard, Services};
///
/// let timer = Rc::new(RefCell::new(CountdownTimer::default()));
/// let services = Services::new()
///     .with_timer(timer.clone())
///     .with_score(Rc::new(RefCell::new(ScoreBoard::default())));
///
/// assert!(services.timer().is_some());
/// assert!(Services::new().score().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Services {
    timer: Option<SharedTimer>,
    score: Option<SharedScore>,
}

impl Services {
    /// Creates an empty set of services.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timer.
    #[must_use]
    pub fn with_timer(mut self, timer: SharedTimer) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Sets the score keeper.
    #[must_use]
    pub fn with_score(mut self, score: SharedScore) -> Self {
        self.score = Some(score);
        self
    }

    /// Returns the timer handle, if any.
    #[must_use]
    pub fn timer(&self) -> Option<&SharedTimer> {
        self.timer.as_ref()
    }

    /// Returns the score handle, if any.
    #[must_use]
    pub fn score(&self) -> Option<&SharedScore> {
        self.score.as_ref()
    }

    pub(crate) fn start_timer(&self, duration: f64) {
        if let Some(timer) = &self.timer {
            timer.borrow_mut().start_timer(duration);
        }
    }

    pub(crate) fn pause_timer(&self) {
        if let Some(timer) = &self.timer {
            timer.borrow_mut().pause_timer();
        }
    }

    pub(crate) fn resume_timer(&self) {
        if let Some(timer) = &self.timer {
            timer.borrow_mut().resume_timer();
        }
    }

    pub(crate) fn reduce_time(&self, seconds: f64) -> TimerSignal {
        self.timer.as_ref().map_or(TimerSignal::Running, |timer| {
            timer.borrow_mut().reduce_time(seconds)
        })
    }

    pub(crate) fn current_time(&self) -> f64 {
        self.timer
            .as_ref()
            .map_or(0.0, |timer| timer.borrow().current_time())
    }

    pub(crate) fn reset_score(&self) {
        if let Some(score) = &self.score {
            score.borrow_mut().reset_score();
        }
    }

    pub(crate) fn use_hint(&self) {
        if let Some(score) = &self.score {
            score.borrow_mut().use_hint();
        }
    }

    pub(crate) fn final_score(&self, time_remaining: f64, difficulty: Difficulty) -> i64 {
        self.score.as_ref().map_or(0, |score| {
            score
                .borrow_mut()
                .calculate_final_score(time_remaining, difficulty)
        })
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("timer", &self.timer.is_some())
            .field("score", &self.score.is_some())
            .finish()
    }
}
