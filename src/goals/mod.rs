//! Daily goals module.
//!
//! Tracks the learner's per-day objectives:
//! - XP earned today
//! - Lessons finished today (practice included)
//! - Correct answers today

pub mod manager;
pub mod types;

// Re-exports for convenience
pub use manager::{GoalContribution, GoalManager};
pub use types::{default_goals, DailyGoal, GoalType};
