//! Session reconciliation.
//!
//! Folds one finished lesson into the profile: per-language XP and weak areas,
//! streak, daily goals and achievement unlocks. Pure; persistence is the
//! caller's job.

use chrono::{DateTime, Utc};

use super::types::{LessonOutcome, ReconcileOutcome};
use crate::achievements::{self, Achievement, AggregateStats};
use crate::goals::{GoalContribution, GoalManager};
use crate::profile::types::{LanguageProgress, UserProfile};

/// Applies lesson outcomes against an achievement catalog.
pub struct SessionReconciler {
    catalog: Vec<Achievement>,
}

impl Default for SessionReconciler {
    fn default() -> Self {
        Self::new(achievements::all_achievements())
    }
}

impl SessionReconciler {
    /// Create a reconciler with a specific catalog.
    pub fn new(catalog: Vec<Achievement>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[Achievement] {
        &self.catalog
    }

    /// Fold `outcome` into `profile`.
    pub fn reconcile(
        &self,
        mut profile: UserProfile,
        outcome: &LessonOutcome,
        now: DateTime<Utc>,
    ) -> ReconcileOutcome {
        let code = outcome.language_code.as_str();

        // Per-language progress
        let mut progress = profile
            .progress
            .remove(code)
            .unwrap_or_else(|| LanguageProgress::new(code));

        progress.merge_topics(&outcome.weak_topics, &outcome.strong_topics);
        let leveled_up = progress.add_xp(outcome.xp_gained);
        if !outcome.is_practice {
            progress.lessons_completed += 1;
        }
        progress.last_played = Some(now);
        profile.progress.insert(code.to_string(), progress);

        // Streak: first activity of the day
        let mut goals = GoalManager::new(&mut profile.daily_goals);
        let streak_extended = goals.is_untouched();

        // Daily goals
        let completed_goals = goals.record_session(GoalContribution {
            xp: outcome.xp_gained,
            correct_answers: outcome.questions_correct,
        });

        if streak_extended {
            profile.streak += 1;
        }

        // Achievements
        let stats = AggregateStats::from_progress(&profile.progress, profile.streak);
        let new_achievements =
            achievements::unlock_new(&self.catalog, &mut profile.achievements, &stats);

        tracing::info!(
            "Lesson reconciled for {}: +{} XP, streak {}, {} new achievements",
            code,
            outcome.xp_gained,
            profile.streak,
            new_achievements.len()
        );

        ReconcileOutcome {
            profile,
            new_achievements,
            completed_goals,
            leveled_up,
            streak_extended,
        }
    }
}
