//! Unit tests for the calendar-day rollover.

use chrono::{NaiveDate, TimeZone, Utc};
use lingoquest::goals::{GoalContribution, GoalManager};
use lingoquest::profile::calendar::roll_over;
use lingoquest::UserProfile;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

fn profile(last_active: NaiveDate, streak: u32) -> UserProfile {
    let mut profile = UserProfile::guest(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(), 5);
    profile.last_active_date = last_active;
    profile.streak = streak;
    GoalManager::new(&mut profile.daily_goals).record_session(GoalContribution {
        xp: 100,
        correct_answers: 20,
    });
    profile
}

#[test]
fn test_three_day_gap_resets_streak() {
    let mut p = profile(day(10), 7);

    let rollover = roll_over(&mut p, day(13)).unwrap();

    assert_eq!(rollover.days_elapsed, 3);
    assert!(rollover.streak_reset);
    assert_eq!(p.streak, 0);
    assert_eq!(p.last_active_date, day(13));
    assert!(p.daily_goals.iter().all(|g| g.current == 0 && !g.completed));
}

#[test]
fn test_next_day_keeps_streak_and_clears_goals() {
    let mut p = profile(day(10), 7);

    let rollover = roll_over(&mut p, day(11)).unwrap();

    assert!(!rollover.streak_reset);
    assert_eq!(p.streak, 7);
    assert!(p.daily_goals.iter().all(|g| g.current == 0));
}

#[test]
fn test_same_day_is_noop() {
    let mut p = profile(day(10), 7);
    let before = p.clone();

    assert!(roll_over(&mut p, day(10)).is_none());
    assert_eq!(p, before);
}

#[test]
fn test_clock_moved_back_is_ignored() {
    let mut p = profile(day(10), 7);

    assert!(roll_over(&mut p, day(8)).is_none());
    assert_eq!(p.streak, 7);
    assert_eq!(p.last_active_date, day(10));
}

#[test]
fn test_streak_freeze_forgives_single_missed_day() {
    let mut p = profile(day(10), 7);
    p.preferences.enable_streak_freeze = true;

    let rollover = roll_over(&mut p, day(12)).unwrap();
    assert!(rollover.freeze_used);
    assert_eq!(p.streak, 7);

    let mut q = profile(day(10), 7);
    q.preferences.enable_streak_freeze = true;
    roll_over(&mut q, day(13)).unwrap();
    assert_eq!(q.streak, 0);
}
