//! Reference [`TimerService`] driven by host ticks.

use crate::{TimerService, TimerSettings, TimerSignal};

/// A notification produced by [`CountdownTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum TimerEvent {
    /// The remaining time crossed a warning threshold (seconds).
    Warning(f64),
    /// The remaining time reached zero. The timer has stopped.
    TimeUp,
    /// The displayed time changed to this value (seconds).
    Changed(f64),
}

/// A countdown (or count-up) timer advanced explicitly by the host.
///
/// The timer has no clock of its own. Each [`tick`](Self::tick) advances it by
/// the given delta and reports what happened, which keeps runs reproducible.
///
/// # Examples
///
/// ```
/// use gridlogic_game::{CountdownTimer, TimerEvent, TimerService};
///
/// let mut timer = CountdownTimer::default();
/// timer.start_timer(35.0);
///
/// assert_eq!(timer.tick(10.0), [TimerEvent::Warning(30.0), TimerEvent::Changed(25.0)]);
/// assert_eq!(timer.formatted(), "00:25");
/// ```
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    count_down: bool,
    thresholds: Vec<f64>,
    warned: Vec<bool>,
    total: f64,
    time: f64,
    running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(&TimerSettings::default())
    }
}

impl CountdownTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            count_down: settings.count_down,
            thresholds: settings.warning_thresholds.clone(),
            warned: vec![false; settings.warning_thresholds.len()],
            total: 0.0,
            time: 0.0,
            running: false,
        }
    }

    /// Returns `true` while the timer is advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `true` if the timer counts down.
    #[must_use]
    pub fn counts_down(&self) -> bool {
        self.count_down
    }

    /// Returns the duration of the current run.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.total
    }

    /// Returns the fraction of the run that is left, or 0 before any run.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total > 0.0 {
            self.time / self.total
        } else {
            0.0
        }
    }

    /// Returns the current time as `mm:ss`, rounded down to whole seconds.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn formatted(&self) -> String {
        let seconds = self.time.max(0.0).floor() as u64;
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }

    /// Stops the run. A stopped timer ignores ticks until restarted.
    pub fn stop_timer(&mut self) {
        self.running = false;
    }

    /// Adds `seconds` to the remaining time, clamping at zero.
    pub fn add_time(&mut self, seconds: f64) {
        if self.count_down {
            self.time = (self.time + seconds).max(0.0);
        }
        log::debug!("timer: added {seconds}s, now {}", self.time);
    }

    /// Advances a running timer by `delta` seconds.
    ///
    /// Events are returned in firing order: warnings, then time-up, then the
    /// change notification.
    pub fn tick(&mut self, delta: f64) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running || delta <= 0.0 {
            return events;
        }

        if self.count_down {
            self.time = (self.time - delta).max(0.0);
            for (threshold, warned) in self.thresholds.iter().zip(&mut self.warned) {
                if !*warned && self.time <= *threshold {
                    *warned = true;
                    events.push(TimerEvent::Warning(*threshold));
                }
            }
            if self.time <= 0.0 {
                self.running = false;
                events.push(TimerEvent::TimeUp);
            }
        } else {
            self.time += delta;
        }

        events.push(TimerEvent::Changed(self.time));
        events
    }
}

impl TimerService for CountdownTimer {
    fn start_timer(&mut self, duration: f64) {
        self.total = duration;
        self.time = if self.count_down { duration } else { 0.0 };
        self.running = true;
        self.warned.fill(false);
        log::debug!("timer: started for {duration}s");
    }

    fn pause_timer(&mut self) {
        self.running = false;
    }

    fn resume_timer(&mut self) {
        if !self.count_down || self.time > 0.0 {
            self.running = true;
        }
    }

    fn reduce_time(&mut self, seconds: f64) -> TimerSignal {
        if !self.count_down {
            return TimerSignal::Running;
        }
        let was_left = self.time > 0.0;
        self.time = (self.time - seconds).max(0.0);
        log::debug!("timer: reduced by {seconds}s, now {}", self.time);
        if was_left && self.time <= 0.0 {
            self.running = false;
            TimerSignal::TimeUp
        } else {
            TimerSignal::Running
        }
    }

    fn current_time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_fire_once_in_order() {
        let mut timer = CountdownTimer::default();
        timer.start_timer(40.0);
        assert_eq!(timer.tick(5.0), [TimerEvent::Changed(35.0)]);
        assert_eq!(
            timer.tick(26.0),
            [
                TimerEvent::Warning(30.0),
                TimerEvent::Warning(10.0),
                TimerEvent::Changed(9.0)
            ]
        );
        assert_eq!(timer.tick(1.0), [TimerEvent::Changed(8.0)]);
    }

    #[test]
    fn test_time_up_stops_the_timer() {
        let mut timer = CountdownTimer::default();
        timer.start_timer(5.0);
        let events = timer.tick(7.5);
        assert_eq!(
            events,
            [
                TimerEvent::Warning(30.0),
                TimerEvent::Warning(10.0),
                TimerEvent::TimeUp,
                TimerEvent::Changed(0.0)
            ]
        );
        assert!(!timer.is_running());
        assert!(timer.tick(1.0).is_empty());
        assert_eq!(timer.current_time(), 0.0);
    }

    #[test]
    fn test_restart_rearms_warnings() {
        let mut timer = CountdownTimer::default();
        timer.start_timer(31.0);
        assert!(timer.tick(2.0).iter().any(|e| e.is_warning()));
        timer.start_timer(31.0);
        assert!(timer.tick(2.0).iter().any(|e| e.is_warning()));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut timer = CountdownTimer::default();
        timer.start_timer(100.0);
        timer.pause_timer();
        assert!(timer.tick(10.0).is_empty());
        assert_eq!(timer.current_time(), 100.0);
        timer.resume_timer();
        timer.tick(10.0);
        assert_eq!(timer.current_time(), 90.0);
    }

    #[test]
    fn test_reduce_time_signals_once() {
        let mut timer = CountdownTimer::default();
        timer.start_timer(15.0);
        assert_eq!(timer.reduce_time(10.0), TimerSignal::Running);
        assert_eq!(timer.reduce_time(10.0), TimerSignal::TimeUp);
        assert_eq!(timer.current_time(), 0.0);
        assert_eq!(timer.reduce_time(10.0), TimerSignal::Running);
        timer.resume_timer();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_add_time_and_progress() {
        let mut timer = CountdownTimer::default();
        assert_eq!(timer.progress(), 0.0);
        timer.start_timer(200.0);
        timer.tick(150.0);
        assert_eq!(timer.progress(), 0.25);
        timer.add_time(-100.0);
        assert_eq!(timer.current_time(), 0.0);
        timer.add_time(61.9);
        assert_eq!(timer.formatted(), "01:01");
    }

    #[test]
    fn test_count_up_mode() {
        let mut timer = CountdownTimer::new(&TimerSettings {
            count_down: false,
            ..TimerSettings::default()
        });
        timer.start_timer(60.0);
        assert_eq!(timer.current_time(), 0.0);
        assert_eq!(timer.tick(75.0), [TimerEvent::Changed(75.0)]);
        assert_eq!(timer.reduce_time(10.0), TimerSignal::Running);
        assert_eq!(timer.formatted(), "01:15");
        assert!(timer.is_running());
    }
}
