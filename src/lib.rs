//! LingoQuest - Language Learning Core
//!
//! A local-first language-learning engine. Provides AI-generated lessons with
//! offline fallback, answer checking, and progress tracking with XP, levels,
//! streaks, energy, daily goals and achievements persisted in a local
//! key-value store.

pub mod achievements;
pub mod catalog;
pub mod goals;
pub mod leagues;
pub mod lessons;
pub mod profile;
pub mod progress;
pub mod storage;

// Re-export commonly used types
pub use lessons::{ContentProvider, GeminiClient, LessonSession};
pub use profile::{ProfileStore, UserProfile};
pub use progress::{LessonOutcome, ReconcileOutcome, SessionReconciler};
pub use storage::{AppConfig, Database, KeyValueStore, MemoryStore};
