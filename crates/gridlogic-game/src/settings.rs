//! Tunable parameters for the lifecycle and the reference services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All engine settings, grouped by consumer.
///
/// Every field falls back to its default when missing from a serialized
/// form, so a settings file only needs to name the values it overrides.
///
/// # Examples
///
/// ```
/// use gridlogic_game::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.score.base_score, 1000);
/// assert_eq!(settings.lifecycle.hint_time_penalty, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Scoring parameters.
    pub score: ScoreSettings,
    /// Timer parameters.
    pub timer: TimerSettings,
    /// Lifecycle parameters.
    pub lifecycle: LifecycleSettings,
}

/// Parameters of [`ScoreBoard`](crate::ScoreBoard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSettings {
    /// Points per difficulty level.
    pub base_score: i64,
    /// Points deducted per hint.
    pub hint_penalty: i64,
    /// Points per remaining second.
    pub time_multiplier: f64,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            base_score: 1000,
            hint_penalty: 100,
            time_multiplier: 10.0,
        }
    }
}

/// Parameters of [`CountdownTimer`](crate::CountdownTimer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Count down from the time limit (`true`) or up from zero (`false`).
    pub count_down: bool,
    /// Remaining times (seconds) that raise a warning once per run.
    pub warning_thresholds: Vec<f64>,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            count_down: true,
            warning_thresholds: vec![30.0, 10.0],
        }
    }
}

/// Parameters of [`PuzzleLifecycle`](crate::PuzzleLifecycle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleSettings {
    /// Seconds taken off the timer for each hint.
    pub hint_time_penalty: f64,
    /// Date whose daily seed is used. `None` means the local date.
    pub seed_date: Option<NaiveDate>,
}

impl Default for LifecycleSettings {
    fn default() -> Self {
        Self {
            hint_time_penalty: 10.0,
            seed_date: None,
        }
    }
}
