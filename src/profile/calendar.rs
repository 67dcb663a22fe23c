//! Calendar-day rollover.
//!
//! Days are UTC calendar dates. The first read on a new day checks streak
//! continuity and clears the daily goals exactly once.

use chrono::NaiveDate;

use super::types::UserProfile;
use crate::goals::GoalManager;

/// What happened during a day rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollover {
    /// Days between the last active date and today
    pub days_elapsed: i64,
    /// Streak was broken and reset to zero
    pub streak_reset: bool,
    /// A single skipped day was forgiven
    pub freeze_used: bool,
}

/// Apply a new-day rollover if `today` is after the last active date.
///
/// A gap of one day keeps the streak. A larger gap resets it, except that
/// with the streak freeze enabled exactly one skipped day is forgiven. A date
/// earlier than the last active date (clock moved back) is ignored.
pub fn roll_over(profile: &mut UserProfile, today: NaiveDate) -> Option<Rollover> {
    if today <= profile.last_active_date {
        return None;
    }

    let days_elapsed = (today - profile.last_active_date).num_days();
    let mut streak_reset = false;
    let mut freeze_used = false;

    if days_elapsed > 1 {
        if profile.preferences.enable_streak_freeze && days_elapsed == 2 {
            freeze_used = profile.streak > 0;
        } else {
            streak_reset = profile.streak > 0;
            profile.streak = 0;
        }
    }

    GoalManager::new(&mut profile.daily_goals).reset_all();
    profile.last_active_date = today;

    if streak_reset {
        tracing::info!("Streak broken after {} days away", days_elapsed);
    } else if freeze_used {
        tracing::info!("Streak freeze covered one missed day");
    }

    Some(Rollover {
        days_elapsed,
        streak_reset,
        freeze_used,
    })
}
