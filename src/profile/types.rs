//! User profile, per-language progress and preferences.
//!
//! Records are persisted as JSON. Every struct carries `#[serde(default)]` so
//! records written by older versions are backfilled on load, and
//! [`UserProfile::fill_defaults`] repairs derived fields afterwards.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::goals::{default_goals, DailyGoal};
use crate::leagues::League;
use crate::storage::config::DEFAULT_MAX_ENERGY;

/// Identifier used for the guest record.
pub const GUEST_ID: &str = "guest";

/// XP needed per level.
pub const XP_PER_LEVEL: u32 = 100;

/// Current preferences schema version.
pub const PREFERENCES_VERSION: u32 = 1;

/// Level for a given XP total: floor(xp / 100) + 1.
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Progress in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageProgress {
    pub language_code: String,
    pub xp: u32,
    /// Always `level_for_xp(xp)`
    pub level: u32,
    /// Scored lessons; practice sessions are not counted
    pub lessons_completed: u32,
    /// Topics answered incorrectly recently, oldest first
    pub weak_areas: Vec<String>,
    pub last_played: Option<DateTime<Utc>>,
    pub proficiency: Option<String>,
}

impl Default for LanguageProgress {
    fn default() -> Self {
        Self {
            language_code: String::new(),
            xp: 0,
            level: 1,
            lessons_completed: 0,
            weak_areas: Vec::new(),
            last_played: None,
            proficiency: None,
        }
    }
}

impl LanguageProgress {
    /// Zero-valued progress for a language.
    pub fn new(language_code: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            ..Default::default()
        }
    }

    /// Add XP and recompute the level.
    ///
    /// Returns true if the level went up.
    pub fn add_xp(&mut self, xp: u32) -> bool {
        let before = self.level;
        self.xp = self.xp.saturating_add(xp);
        self.level = level_for_xp(self.xp);
        self.level > before
    }

    /// XP still needed to reach the next level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.level.saturating_mul(XP_PER_LEVEL).saturating_sub(self.xp)
    }

    /// Fold one session's topics into the weak areas.
    ///
    /// New weak topics are appended, then every strong topic is removed, so a
    /// topic answered both ways in one session ends up not weak.
    pub fn merge_topics(&mut self, weak: &[String], strong: &[String]) {
        for topic in weak {
            if !topic.is_empty() && !self.weak_areas.contains(topic) {
                self.weak_areas.push(topic.clone());
            }
        }
        self.weak_areas.retain(|topic| !strong.contains(topic));
    }
}

/// Lesson difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Learner preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub version: u32,
    /// Pick lesson difficulty from the current level
    pub auto_difficulty: bool,
    pub enable_sound_effects: bool,
    /// Forgive a single skipped day
    pub enable_streak_freeze: bool,
    pub show_characters: bool,
    /// Target of the daily XP goal
    pub daily_goal_xp: u32,
    /// Questions per lesson
    pub lesson_duration: u32,
    pub dark_mode: bool,
    pub disable_animations: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            auto_difficulty: true,
            enable_sound_effects: true,
            enable_streak_freeze: true,
            show_characters: true,
            daily_goal_xp: 50,
            lesson_duration: 5,
            dark_mode: false,
            disable_animations: false,
        }
    }
}

impl Preferences {
    /// Repair out-of-range values and stamp the current version.
    pub fn fill_defaults(&mut self) {
        let defaults = Preferences::default();
        if self.daily_goal_xp == 0 {
            self.daily_goal_xp = defaults.daily_goal_xp;
        }
        if self.lesson_duration == 0 {
            self.lesson_duration = defaults.lesson_duration;
        }
        self.lesson_duration = self.lesson_duration.min(20);
        self.version = PREFERENCES_VERSION;
    }
}

/// The learner's single persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    /// PHC-formatted argon2 hash
    pub password_hash: Option<String>,
    pub username: Option<String>,
    pub name: String,
    /// Emoji or image data URI
    pub avatar: String,
    pub native_language_code: String,
    pub join_date: DateTime<Utc>,
    pub last_active_date: NaiveDate,
    /// Consecutive active days
    pub streak: u32,
    pub energy: u32,
    pub last_energy_refill: DateTime<Utc>,
    pub current_language_code: Option<String>,
    pub current_league: League,
    pub progress: BTreeMap<String, LanguageProgress>,
    /// Unlocked achievement ids, in unlock order
    pub achievements: Vec<String>,
    pub daily_goals: Vec<DailyGoal>,
    pub is_guest: bool,
    pub has_completed_onboarding: bool,
    pub preferences: Preferences,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::guest(Utc::now(), DEFAULT_MAX_ENERGY)
    }
}

impl UserProfile {
    /// A fresh guest record.
    pub fn guest(now: DateTime<Utc>, max_energy: u32) -> Self {
        let preferences = Preferences::default();
        Self {
            id: GUEST_ID.to_string(),
            email: None,
            password_hash: None,
            username: None,
            name: String::new(),
            avatar: "🧑".to_string(),
            native_language_code: "en-US".to_string(),
            join_date: now,
            last_active_date: now.date_naive(),
            streak: 0,
            energy: max_energy,
            last_energy_refill: now,
            current_language_code: None,
            current_league: League::Bronze,
            progress: BTreeMap::new(),
            achievements: Vec::new(),
            daily_goals: default_goals(preferences.daily_goal_xp),
            is_guest: true,
            has_completed_onboarding: false,
            preferences,
        }
    }

    /// Progress for the current language, if one is selected.
    pub fn current_progress(&self) -> Option<&LanguageProgress> {
        self.current_language_code
            .as_ref()
            .and_then(|code| self.progress.get(code))
    }

    /// Whether the achievement is unlocked.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    /// XP summed over all languages.
    pub fn total_xp(&self) -> u64 {
        self.progress.values().map(|p| p.xp as u64).sum()
    }

    /// Repair a freshly loaded record.
    ///
    /// Recomputes levels from XP, restores the progress map keys, clamps
    /// energy, drops duplicate achievement ids and backfills goals.
    pub fn fill_defaults(&mut self, max_energy: u32) {
        self.preferences.fill_defaults();

        for (code, progress) in self.progress.iter_mut() {
            if progress.language_code.is_empty() {
                progress.language_code = code.clone();
            }
            progress.level = level_for_xp(progress.xp);
        }

        self.energy = self.energy.min(max_energy);

        let mut seen = std::collections::HashSet::new();
        self.achievements.retain(|id| seen.insert(id.clone()));

        if self.daily_goals.is_empty() {
            self.daily_goals = default_goals(self.preferences.daily_goal_xp);
        }

        if self.id.is_empty() {
            self.id = GUEST_ID.to_string();
        }
    }
}
