//! Lesson difficulty selection.

use crate::profile::types::{Difficulty, Preferences};

/// Level at which auto difficulty moves to Medium.
pub const MEDIUM_FROM_LEVEL: u32 = 25;
/// Level at which auto difficulty moves to Hard.
pub const HARD_FROM_LEVEL: u32 = 50;

/// Difficulty implied by a language level.
pub fn auto_difficulty(level: u32) -> Difficulty {
    if level < MEDIUM_FROM_LEVEL {
        Difficulty::Easy
    } else if level < HARD_FROM_LEVEL {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Pick the difficulty for the next lesson.
///
/// Character drills are always Easy. With auto difficulty enabled the level
/// decides; otherwise the requested difficulty is used, Medium if none.
pub fn choose_difficulty(
    preferences: &Preferences,
    level: u32,
    character_drill: bool,
    requested: Option<Difficulty>,
) -> Difficulty {
    if character_drill {
        return Difficulty::Easy;
    }
    if preferences.auto_difficulty {
        return auto_difficulty(level);
    }
    requested.unwrap_or_default()
}
