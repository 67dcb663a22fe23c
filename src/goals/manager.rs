//! Daily goal bookkeeping.
//!
//! Applies one finished session to the day's goals and clears them when a new
//! calendar day starts.

use super::types::{DailyGoal, GoalType};

/// What one finished session contributes to the daily goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalContribution {
    /// XP earned in the session
    pub xp: u32,
    /// Questions answered correctly
    pub correct_answers: u32,
}

/// Manager for a profile's daily goals.
pub struct GoalManager<'a> {
    goals: &'a mut Vec<DailyGoal>,
}

impl<'a> GoalManager<'a> {
    /// Wrap the goals of a profile.
    pub fn new(goals: &'a mut Vec<DailyGoal>) -> Self {
        Self { goals }
    }

    /// True when nothing has been recorded today.
    pub fn is_untouched(&self) -> bool {
        self.goals.iter().all(|g| g.current == 0)
    }

    /// Apply a finished session to every goal.
    ///
    /// Each session counts as one lesson, practice included. Returns the ids of
    /// goals completed by this call.
    pub fn record_session(&mut self, contribution: GoalContribution) -> Vec<String> {
        let mut completed = Vec::new();

        for goal in self.goals.iter_mut() {
            let amount = match goal.goal_type {
                GoalType::Xp => contribution.xp,
                GoalType::Lessons => 1,
                GoalType::CorrectAnswers => contribution.correct_answers,
            };

            if goal.add_progress(amount) {
                tracing::debug!("Daily goal {} completed", goal.id);
                completed.push(goal.id.clone());
            }
        }

        completed
    }

    /// Reset every goal to zero progress.
    pub fn reset_all(&mut self) {
        for goal in self.goals.iter_mut() {
            goal.reset();
        }
    }

    /// Number of completed goals.
    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }
}
