//! Energy regeneration and consumption.
//!
//! Energy caps how many lessons can be started. One point regenerates per
//! interval while below the maximum; the refill timestamp advances by whole
//! intervals so a partial interval is never lost.

use chrono::{DateTime, Duration, Utc};

use super::types::UserProfile;
use crate::storage::config::EnergySettings;

/// Restore energy earned since the last refill.
///
/// Returns true if the profile changed.
pub fn regenerate(profile: &mut UserProfile, settings: &EnergySettings, now: DateTime<Utc>) -> bool {
    if profile.energy >= settings.max_energy {
        return false;
    }

    let interval = settings.regen_interval();
    let elapsed = now - profile.last_energy_refill;
    if elapsed < interval {
        return false;
    }

    let intervals = elapsed.num_seconds() / interval.num_seconds();
    let missing = (settings.max_energy - profile.energy) as i64;
    let restored = intervals.min(missing);

    profile.energy += restored as u32;
    profile.last_energy_refill += interval * intervals as i32;

    tracing::debug!(
        "Regenerated {} energy ({} intervals elapsed), now {}",
        restored,
        intervals,
        profile.energy
    );

    true
}

/// Spend one energy point.
///
/// Returns false without touching the profile when energy is empty. Leaving
/// the full state restarts the regeneration clock.
pub fn spend(profile: &mut UserProfile, settings: &EnergySettings, now: DateTime<Utc>) -> bool {
    if profile.energy == 0 {
        return false;
    }

    if profile.energy >= settings.max_energy {
        profile.last_energy_refill = now;
    }
    profile.energy = profile.energy.min(settings.max_energy) - 1;

    true
}

/// Time until the next point regenerates, or None when full.
pub fn time_until_next_point(
    profile: &UserProfile,
    settings: &EnergySettings,
    now: DateTime<Utc>,
) -> Option<Duration> {
    if profile.energy >= settings.max_energy {
        return None;
    }

    let interval = settings.regen_interval();
    let elapsed = (now - profile.last_energy_refill).max(Duration::zero());
    let into_interval = Duration::seconds(elapsed.num_seconds() % interval.num_seconds());

    Some(interval - into_interval)
}
