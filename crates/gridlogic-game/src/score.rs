//! Reference [`ScoreService`].

use gridlogic_core::Difficulty;

use crate::{ScoreService, ScoreSettings};

/// Lowest final score a completed puzzle can earn.
pub const MIN_FINAL_SCORE: i64 = 100;

/// Score keeper implementing the standard completion formula.
///
/// The final score is
/// `max(100, base * difficulty - hints * penalty + round(time * multiplier))`,
/// rounding half to even.
///
/// # Examples
///
/// ```
/// use gridlogic_core::Difficulty;
/// use gridlogic_game::{ScoreBoard, ScoreService};
///
/// let mut score = ScoreBoard::default();
/// score.use_hint();
/// assert_eq!(score.calculate_final_score(12.5, Difficulty::Medium), 2000 - 100 + 125);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    settings: ScoreSettings,
    hints_used: u32,
    score: i64,
}

impl ScoreBoard {
    /// Creates an empty score board.
    #[must_use]
    pub fn new(settings: ScoreSettings) -> Self {
        Self {
            settings,
            hints_used: 0,
            score: 0,
        }
    }

    /// Returns the number of hints recorded since the last reset.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Adds `bonus` points to the current score.
    pub fn add_bonus(&mut self, bonus: i64) {
        self.score += bonus;
        log::debug!("score: bonus {bonus}, total {}", self.score);
    }
}

impl ScoreService for ScoreBoard {
    fn reset_score(&mut self) {
        self.score = 0;
        self.hints_used = 0;
    }

    fn use_hint(&mut self) {
        self.hints_used += 1;
        log::debug!("score: hint used, total hints {}", self.hints_used);
    }

    #[expect(clippy::cast_possible_truncation)]
    fn calculate_final_score(&mut self, time_remaining: f64, difficulty: Difficulty) -> i64 {
        let ScoreSettings {
            base_score,
            hint_penalty,
            time_multiplier,
        } = self.settings;
        let base = base_score * i64::from(difficulty.level());
        let penalty = i64::from(self.hints_used) * hint_penalty;
        let time_bonus = (time_remaining * time_multiplier).round_ties_even() as i64;

        self.score = (base - penalty + time_bonus).max(MIN_FINAL_SCORE);
        log::debug!(
            "score: final {} (base {base}, hints -{penalty}, time +{time_bonus})",
            self.score
        );
        self.score
    }

    fn current_score(&self) -> i64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_without_hints() {
        let mut score = ScoreBoard::default();
        assert_eq!(score.calculate_final_score(300.0, Difficulty::Easy), 1000 + 3000);
        assert_eq!(score.current_score(), 4000);
        assert_eq!(score.calculate_final_score(0.0, Difficulty::Master), 5000);
    }

    #[test]
    fn test_minimum_score_applies() {
        let mut score = ScoreBoard::default();
        for _ in 0..15 {
            score.use_hint();
        }
        assert_eq!(score.hints_used(), 15);
        assert_eq!(score.calculate_final_score(0.0, Difficulty::Easy), MIN_FINAL_SCORE);
    }

    #[test]
    fn test_time_bonus_rounds_half_to_even() {
        let mut score = ScoreBoard::default();
        assert_eq!(score.calculate_final_score(0.25, Difficulty::Easy), 1002);
        assert_eq!(score.calculate_final_score(0.75, Difficulty::Easy), 1008);
    }

    #[test]
    fn test_reset_clears_hints_and_score() {
        let mut score = ScoreBoard::new(ScoreSettings {
            hint_penalty: 50,
            ..ScoreSettings::default()
        });
        score.use_hint();
        score.add_bonus(30);
        assert_eq!(score.current_score(), 30);
        score.reset_score();
        assert_eq!(score.hints_used(), 0);
        assert_eq!(score.current_score(), 0);
        score.use_hint();
        assert_eq!(score.calculate_final_score(0.0, Difficulty::Hard), 3000 - 50);
    }
}
