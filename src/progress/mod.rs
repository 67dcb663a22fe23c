//! Lesson completion bookkeeping.
//!
//! Turns the outcome of one lesson into profile updates:
//! - Per-language XP, level, lesson count and weak areas
//! - Streak continuation on the first activity of the day
//! - Daily goal progress
//! - Achievement unlocks

pub mod reconciler;
pub mod types;

// Re-exports for convenience
pub use reconciler::SessionReconciler;
pub use types::{lesson_xp, LessonOutcome, ReconcileOutcome, XP_PER_CORRECT, XP_PER_LESSON};
