//! Offline lesson queue.
//!
//! Lessons downloaded ahead of time are kept as one JSON array under a single
//! key. The queue is capped; saving into a full queue drops the oldest entry.

use super::types::{LessonError, OfflineLesson};
use crate::storage::kv::OFFLINE_LESSONS_KEY;
use crate::storage::KeyValueStore;

/// Default queue capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// Offline lesson queue over a key-value store.
pub struct OfflineLessonCache<'a, S: KeyValueStore> {
    store: &'a mut S,
    capacity: usize,
}

impl<'a, S: KeyValueStore> OfflineLessonCache<'a, S> {
    /// Create a cache with the default capacity.
    pub fn new(store: &'a mut S) -> Self {
        Self::with_capacity(store, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(store: &'a mut S, capacity: usize) -> Self {
        Self {
            store,
            capacity: capacity.max(1),
        }
    }

    /// All saved lessons, oldest first.
    pub fn all(&self) -> Result<Vec<OfflineLesson>, LessonError> {
        Ok(self
            .store
            .get_json::<Vec<OfflineLesson>>(OFFLINE_LESSONS_KEY)?
            .unwrap_or_default())
    }

    /// Append a lesson, evicting the oldest when full.
    pub fn save(&mut self, lesson: OfflineLesson) -> Result<(), LessonError> {
        let mut lessons = self.all()?;

        while lessons.len() >= self.capacity {
            let evicted = lessons.remove(0);
            tracing::debug!("Evicting offline lesson {} ({})", evicted.lesson.id, evicted.language_code);
        }
        lessons.push(lesson);

        self.store.set_json(OFFLINE_LESSONS_KEY, &lessons)?;
        Ok(())
    }

    /// Number of saved lessons for a language.
    pub fn count(&self, language_code: &str) -> Result<usize, LessonError> {
        Ok(self
            .all()?
            .iter()
            .filter(|l| l.language_code == language_code)
            .count())
    }

    /// Remove and return the oldest saved lesson for a language.
    pub fn pop(&mut self, language_code: &str) -> Result<Option<OfflineLesson>, LessonError> {
        let mut lessons = self.all()?;

        let Some(index) = lessons.iter().position(|l| l.language_code == language_code) else {
            return Ok(None);
        };

        let lesson = lessons.remove(index);
        self.store.set_json(OFFLINE_LESSONS_KEY, &lessons)?;
        Ok(Some(lesson))
    }

    /// Total saved lessons.
    pub fn len(&self) -> Result<usize, LessonError> {
        Ok(self.all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LessonError> {
        Ok(self.len()? == 0)
    }
}
