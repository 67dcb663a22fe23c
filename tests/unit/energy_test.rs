//! Unit tests for energy regeneration and spending.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lingoquest::profile::energy::{regenerate, spend, time_until_next_point};
use lingoquest::storage::EnergySettings;
use lingoquest::UserProfile;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap()
}

fn profile_with(energy: u32, refill: DateTime<Utc>) -> UserProfile {
    let mut profile = UserProfile::guest(t0(), 5);
    profile.energy = energy;
    profile.last_energy_refill = refill;
    profile
}

#[test]
fn test_forty_minutes_restores_one_point() {
    let settings = EnergySettings::default();
    let mut profile = profile_with(3, t0());

    assert!(regenerate(&mut profile, &settings, t0() + Duration::minutes(40)));
    assert_eq!(profile.energy, 4);
    assert_eq!(profile.last_energy_refill, t0() + Duration::minutes(30));

    let wait = time_until_next_point(&profile, &settings, t0() + Duration::minutes(40)).unwrap();
    assert_eq!(wait, Duration::minutes(20));
}

#[test]
fn test_long_absence_caps_at_max() {
    let settings = EnergySettings::default();
    let mut profile = profile_with(1, t0());

    regenerate(&mut profile, &settings, t0() + Duration::hours(10));
    assert_eq!(profile.energy, 5);
    assert!(time_until_next_point(&profile, &settings, t0() + Duration::hours(10)).is_none());
}

#[test]
fn test_partial_interval_changes_nothing() {
    let settings = EnergySettings::default();
    let mut profile = profile_with(2, t0());

    assert!(!regenerate(&mut profile, &settings, t0() + Duration::minutes(29)));
    assert_eq!(profile.energy, 2);
    assert_eq!(profile.last_energy_refill, t0());
}

#[test]
fn test_custom_interval() {
    let settings = EnergySettings {
        max_energy: 10,
        regen_minutes: 5,
    };
    let mut profile = profile_with(0, t0());

    regenerate(&mut profile, &settings, t0() + Duration::minutes(17));
    assert_eq!(profile.energy, 3);
    assert_eq!(profile.last_energy_refill, t0() + Duration::minutes(15));
}

#[test]
fn test_spend_from_full_restarts_clock() {
    let settings = EnergySettings::default();
    let mut profile = profile_with(5, t0() - Duration::days(3));

    assert!(spend(&mut profile, &settings, t0()));
    assert_eq!(profile.energy, 4);
    assert_eq!(profile.last_energy_refill, t0());
}

#[test]
fn test_spend_at_zero_fails() {
    let settings = EnergySettings::default();
    let mut profile = profile_with(0, t0());
    let before = profile.clone();

    assert!(!spend(&mut profile, &settings, t0() + Duration::minutes(1)));
    assert_eq!(profile, before);
}
