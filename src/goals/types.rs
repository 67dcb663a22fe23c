//! Daily goal type definitions.

use serde::{Deserialize, Serialize};

/// A goal the learner works towards during one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    /// Stable identifier (e.g. "g1")
    pub id: String,
    /// Display title
    pub title: String,
    /// Amount required to complete the goal
    pub target: u32,
    /// Amount accumulated today
    #[serde(default)]
    pub current: u32,
    /// Whether `current` has reached `target`
    #[serde(default)]
    pub completed: bool,
    /// What the goal counts
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// XP shown as the completion reward
    #[serde(default)]
    pub reward_xp: u32,
}

impl DailyGoal {
    /// Create a fresh, untouched goal.
    pub fn new(id: &str, title: &str, goal_type: GoalType, target: u32, reward_xp: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            target,
            current: 0,
            completed: false,
            goal_type,
            reward_xp,
        }
    }

    /// Add progress and refresh the completed flag.
    ///
    /// Returns true when this call moved the goal from incomplete to complete.
    pub fn add_progress(&mut self, amount: u32) -> bool {
        let was_completed = self.completed;
        self.current = self.current.saturating_add(amount);
        self.completed = self.current >= self.target;
        self.completed && !was_completed
    }

    /// Clear progress for a new day.
    pub fn reset(&mut self) {
        self.current = 0;
        self.completed = false;
    }

    /// Progress percentage (0-100).
    pub fn progress_percent(&self) -> f32 {
        if self.target == 0 {
            return 100.0;
        }
        (self.current as f32 / self.target as f32 * 100.0).min(100.0)
    }
}

/// What a daily goal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    /// XP earned
    Xp,
    /// Lessons finished, practice included
    Lessons,
    /// Questions answered correctly
    CorrectAnswers,
}

impl GoalType {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Xp => "XP",
            GoalType::Lessons => "Lessons",
            GoalType::CorrectAnswers => "Correct Answers",
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The default set of daily goals.
///
/// `daily_goal_xp` sets the target of the XP goal.
pub fn default_goals(daily_goal_xp: u32) -> Vec<DailyGoal> {
    vec![
        DailyGoal::new("g1", "Complete 2 Lessons", GoalType::Lessons, 2, 20),
        DailyGoal::new(
            "g2",
            &format!("Earn {} XP", daily_goal_xp),
            GoalType::Xp,
            daily_goal_xp,
            30,
        ),
        DailyGoal::new("g3", "15 Correct Answers", GoalType::CorrectAnswers, 15, 25),
    ]
}
