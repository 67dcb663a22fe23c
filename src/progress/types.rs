//! Inputs and outputs of lesson reconciliation.

use serde::{Deserialize, Serialize};

use crate::profile::types::UserProfile;

/// Flat XP awarded for finishing any lesson.
pub const XP_PER_LESSON: u32 = 15;

/// Bonus XP per correct answer.
pub const XP_PER_CORRECT: u32 = 5;

/// XP earned by a lesson with `correct` right answers.
pub fn lesson_xp(correct: u32) -> u32 {
    XP_PER_LESSON + correct * XP_PER_CORRECT
}

/// Result of one finished lesson, as reported by the lesson runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOutcome {
    pub language_code: String,
    pub xp_gained: u32,
    pub questions_total: u32,
    pub questions_correct: u32,
    /// Topics answered incorrectly (or skipped)
    pub weak_topics: Vec<String>,
    /// Topics answered correctly
    pub strong_topics: Vec<String>,
    /// Practice sessions do not count towards lessons completed
    pub is_practice: bool,
}

impl LessonOutcome {
    /// Outcome with XP computed from the correct count.
    pub fn scored(
        language_code: &str,
        questions_total: u32,
        questions_correct: u32,
        weak_topics: Vec<String>,
        strong_topics: Vec<String>,
        is_practice: bool,
    ) -> Self {
        Self {
            language_code: language_code.to_string(),
            xp_gained: lesson_xp(questions_correct),
            questions_total,
            questions_correct,
            weak_topics,
            strong_topics,
            is_practice,
        }
    }

    /// Share of questions answered correctly (0-100).
    pub fn accuracy_percent(&self) -> u32 {
        if self.questions_total == 0 {
            return 0;
        }
        ((self.questions_correct as f64 / self.questions_total as f64) * 100.0).round() as u32
    }
}

/// What reconciliation produced.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    /// The updated profile
    pub profile: UserProfile,
    /// Achievement ids unlocked by this lesson
    pub new_achievements: Vec<String>,
    /// Daily goal ids completed by this lesson
    pub completed_goals: Vec<String>,
    /// The language level went up
    pub leveled_up: bool,
    /// This was the first activity of the day and extended the streak
    pub streak_extended: bool,
}
