//! Lessons: content generation, offline queue and answer checking.
//!
//! This module provides:
//! - A `ContentProvider` seam with a Generative Language API client
//! - Adaptive prompt construction from level, weak areas and difficulty
//! - An offline lesson queue and fallback loading
//! - Lesson sessions that grade answers and produce a `LessonOutcome`

pub mod client;
pub mod difficulty;
pub mod offline;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use client::GeminiClient;
pub use difficulty::{auto_difficulty, choose_difficulty};
pub use offline::OfflineLessonCache;
pub use provider::{load_lesson, ContentProvider, LessonSource, LoadedLesson};
pub use session::{AnswerFeedback, LessonSession};
pub use types::{Lesson, LessonError, LessonRequest, OfflineLesson, QuestionType, QuizQuestion};
