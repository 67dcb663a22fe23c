//! Content provider seam and lesson loading with offline fallback.

use async_trait::async_trait;

use super::offline::OfflineLessonCache;
use super::types::{Lesson, LessonError, LessonRequest};
use crate::storage::KeyValueStore;

/// Source of generated lesson content.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generate a lesson for the request.
    async fn generate_lesson(&self, request: &LessonRequest) -> Result<Lesson, LessonError>;

    /// Ask whether `answer` is an acceptable translation of `original`.
    ///
    /// `expected` is the reference answer.
    async fn validate_translation(
        &self,
        original: &str,
        answer: &str,
        expected: &str,
    ) -> Result<bool, LessonError>;

    /// Whether the provider believes it can reach its service.
    fn is_online(&self) -> bool {
        true
    }
}

/// Where a loaded lesson came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonSource {
    /// Freshly generated
    Generated,
    /// Taken from the offline cache
    Offline,
    /// Built-in fallback lesson
    Fallback,
}

impl LessonSource {
    /// Answers should be graded without calling the provider.
    pub fn is_offline(&self) -> bool {
        !matches!(self, LessonSource::Generated)
    }
}

/// A lesson ready to be taken.
#[derive(Debug, Clone)]
pub struct LoadedLesson {
    pub lesson: Lesson,
    pub source: LessonSource,
}

/// Load a lesson, falling back to the offline cache and then to the built-in
/// lesson.
///
/// Character drills never use the offline cache.
pub async fn load_lesson<P, S>(
    provider: &P,
    cache: &mut OfflineLessonCache<'_, S>,
    request: &LessonRequest,
    language_code: &str,
) -> LoadedLesson
where
    P: ContentProvider + ?Sized,
    S: KeyValueStore,
{
    if provider.is_online() {
        match provider.generate_lesson(request).await {
            Ok(lesson) if !lesson.is_empty() => {
                return LoadedLesson {
                    lesson,
                    source: LessonSource::Generated,
                };
            }
            Ok(_) => tracing::warn!("Generated lesson has no questions"),
            Err(e) => tracing::warn!("Lesson generation failed: {}", e),
        }
    } else {
        tracing::info!("Content provider offline");
    }

    if !request.is_character_drill() {
        match cache.pop(language_code) {
            Ok(Some(offline)) => {
                tracing::info!("Using offline lesson saved at {}", offline.saved_at);
                return LoadedLesson {
                    lesson: offline.lesson,
                    source: LessonSource::Offline,
                };
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Offline lesson cache unavailable: {}", e),
        }
    }

    LoadedLesson {
        lesson: Lesson::fallback(&request.language_name),
        source: LessonSource::Fallback,
    }
}
