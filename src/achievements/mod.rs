//! Achievement catalog and unlock checking.
//!
//! Achievements are static definitions; a profile only stores the ids it has
//! unlocked. The unlocked set only grows.

pub mod definitions;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::types::LanguageProgress;

pub use definitions::{all_achievements, find_achievement};

/// Aggregate a condition is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    /// Current streak in days
    Streak,
    /// XP summed over all languages
    Xp,
    /// Lessons summed over all languages
    Lessons,
    /// Number of languages started
    Languages,
    /// Derived language score
    Score,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::Streak => "STREAK",
            ConditionType::Xp => "XP",
            ConditionType::Lessons => "LESSONS",
            ConditionType::Languages => "LANGUAGES",
            ConditionType::Score => "SCORE",
        }
    }
}

/// Achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Description
    pub description: String,
    /// Emoji icon
    pub icon: String,
    /// Aggregate the threshold applies to
    pub condition: ConditionType,
    /// Value the aggregate must reach
    pub threshold: u64,
}

impl Achievement {
    /// Create new achievement
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        condition: ConditionType,
        threshold: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            condition,
            threshold,
        }
    }

    /// Whether the given stats satisfy this achievement.
    pub fn is_met_by(&self, stats: &AggregateStats) -> bool {
        stats.value_for(self.condition) >= self.threshold
    }

    /// Progress towards the threshold (0..100).
    pub fn percentage(&self, stats: &AggregateStats) -> f32 {
        if self.threshold == 0 {
            return 100.0;
        }
        ((stats.value_for(self.condition) as f64 / self.threshold as f64) * 100.0).min(100.0)
            as f32
    }
}

/// Totals across every language a learner has started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub total_xp: u64,
    pub total_lessons: u64,
    pub language_count: u64,
    pub streak: u64,
}

impl AggregateStats {
    /// Sum the per-language progress records.
    pub fn from_progress(progress: &BTreeMap<String, LanguageProgress>, streak: u32) -> Self {
        Self {
            total_xp: progress.values().map(|p| p.xp as u64).sum(),
            total_lessons: progress.values().map(|p| p.lessons_completed as u64).sum(),
            language_count: progress.len() as u64,
            streak: streak as u64,
        }
    }

    /// floor(0.5 * xp + 10 * lessons + 50 * languages)
    pub fn language_score(&self) -> u64 {
        self.total_xp / 2 + self.total_lessons * 10 + self.language_count * 50
    }

    /// Value of the aggregate a condition refers to.
    pub fn value_for(&self, condition: ConditionType) -> u64 {
        match condition {
            ConditionType::Streak => self.streak,
            ConditionType::Xp => self.total_xp,
            ConditionType::Lessons => self.total_lessons,
            ConditionType::Languages => self.language_count,
            ConditionType::Score => self.language_score(),
        }
    }
}

/// Check every locked achievement against `stats`.
///
/// Appends newly satisfied ids to `unlocked` in catalog order and returns them.
pub fn unlock_new(
    catalog: &[Achievement],
    unlocked: &mut Vec<String>,
    stats: &AggregateStats,
) -> Vec<String> {
    let mut newly_unlocked = Vec::new();

    for achievement in catalog {
        if unlocked.iter().any(|id| id == &achievement.id) {
            continue;
        }

        if achievement.is_met_by(stats) {
            tracing::info!("Achievement unlocked: {}", achievement.id);
            newly_unlocked.push(achievement.id.clone());
        }
    }

    unlocked.extend(newly_unlocked.iter().cloned());
    newly_unlocked
}
