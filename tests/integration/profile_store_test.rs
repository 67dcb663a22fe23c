//! Integration tests for the profile store on SQLite.

use chrono::{DateTime, Duration, TimeZone, Utc};
use lingoquest::profile::{AuthError, Preferences, Registration, StoreError};
use lingoquest::progress::LessonOutcome;
use lingoquest::storage::kv::{GUEST_PROFILE_KEY, SESSION_KEY, USERS_KEY};
use lingoquest::storage::EnergySettings;
use lingoquest::{Database, KeyValueStore, MemoryStore, ProfileStore, UserProfile};
use tempfile::tempdir;

fn registration(email: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "correct horse".to_string(),
        name: "Ana".to_string(),
        username: "ana_l".to_string(),
        avatar: Some("🦊".to_string()),
    }
}

#[test]
fn test_guest_profile_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lq.db");
    let now = Utc::now();

    {
        let mut store = ProfileStore::new(Database::open(&path).unwrap(), EnergySettings::default());
        let outcome = LessonOutcome::scored("es", 5, 4, Vec::new(), Vec::new(), false);
        store.consume_energy_at(now).unwrap();
        store.complete_lesson_at(&outcome, now);
    }

    let mut store = ProfileStore::new(Database::open(&path).unwrap(), EnergySettings::default());
    let profile = store.read_at(now);

    assert!(profile.is_guest);
    assert_eq!(profile.energy, 4);
    assert_eq!(profile.streak, 1);
    assert_eq!(profile.progress["es"].xp, 35);
    assert!(profile.has_achievement("first_step"));
}

#[test]
fn test_energy_runs_out_and_regenerates() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let now = Utc::now();

    for _ in 0..5 {
        store.consume_energy_at(now).unwrap();
    }
    assert!(matches!(store.consume_energy_at(now), Err(StoreError::OutOfEnergy)));

    let later = now + Duration::minutes(65);
    let profile = store.read_at(later);
    assert_eq!(profile.energy, 2);
    assert_eq!(profile.last_energy_refill, now + Duration::minutes(60));
}

#[test]
fn test_register_moves_guest_progress_into_account() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let now = Utc::now();
    let outcome = LessonOutcome::scored("fr", 5, 5, Vec::new(), Vec::new(), false);
    store.complete_lesson_at(&outcome, now);

    let account = store.register_at(registration(" Ana@Example.com "), now).unwrap();

    assert!(!account.is_guest);
    assert_eq!(account.email.as_deref(), Some("ana@example.com"));
    assert_eq!(account.avatar, "🦊");
    assert_ne!(account.password_hash.as_deref(), Some("correct horse"));
    assert_eq!(account.progress["fr"].xp, 40);
    assert!(store.is_signed_in());

    let backend = store.backend();
    assert!(backend.get(GUEST_PROFILE_KEY).unwrap().is_none());
    assert_eq!(backend.get(SESSION_KEY).unwrap().as_deref(), Some("ana@example.com"));
    assert!(backend.get(USERS_KEY).unwrap().unwrap().contains("ana@example.com"));
}

#[test]
fn test_duplicate_email_rejected() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let now = Utc::now();
    store.register_at(registration("ana@example.com"), now).unwrap();
    store.logout().unwrap();

    let err = store.register_at(registration("ANA@example.com"), now).unwrap_err();
    assert!(matches!(err, StoreError::Auth(AuthError::EmailTaken)));
}

#[test]
fn test_logout_then_login_restores_account() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let now = Utc::now();
    store.register_at(registration("ana@example.com"), now).unwrap();

    let outcome = LessonOutcome::scored("de", 5, 3, Vec::new(), Vec::new(), false);
    store.complete_lesson_at(&outcome, now);
    store.logout().unwrap();

    let guest = store.read_at(now);
    assert!(guest.is_guest);
    assert!(guest.progress.is_empty());

    let bad = store.login_at("ana@example.com", "wrong", now);
    assert!(matches!(bad, Err(StoreError::Auth(AuthError::InvalidCredentials))));

    let account = store.login_at("ANA@example.com", "correct horse", now).unwrap();
    assert_eq!(account.progress["de"].xp, 30);
    assert_eq!(account.name, "Ana");
}

#[test]
fn test_unknown_account_login_fails() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let result = store.login("nobody@example.com", "pw");
    assert!(matches!(result, Err(StoreError::Auth(AuthError::InvalidCredentials))));
    assert!(!store.is_signed_in());
}

#[test]
fn test_preferences_retarget_xp_goal() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());

    let preferences = Preferences {
        daily_goal_xp: 120,
        ..Default::default()
    };
    let profile = store.update_preferences(preferences).unwrap();

    let xp_goal = profile.daily_goals.iter().find(|g| g.id == "g2").unwrap();
    assert_eq!(xp_goal.target, 120);
    assert_eq!(xp_goal.title, "Earn 120 XP");
    assert_eq!(store.read().preferences.daily_goal_xp, 120);
}

#[test]
fn test_onboarding_and_language_selection() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());

    store.complete_onboarding("Kim", Some("🐼"), Some("ko-KR")).unwrap();
    let profile = store.select_language("ja").unwrap();

    assert!(profile.has_completed_onboarding);
    assert_eq!(profile.name, "Kim");
    assert_eq!(profile.native_language_code, "ko-KR");
    assert_eq!(profile.current_language_code.as_deref(), Some("ja"));
    assert_eq!(profile.current_progress().unwrap().xp, 0);
}

#[test]
fn test_corrupt_guest_record_falls_back_to_fresh_profile() {
    let mut db = Database::open_in_memory().unwrap();
    db.set(GUEST_PROFILE_KEY, "{not json").unwrap();

    let mut store = ProfileStore::new(db, EnergySettings::default());
    let profile = store.read();

    assert!(profile.is_guest);
    assert_eq!(profile.energy, 5);
}

#[test]
fn test_register_while_signed_in_keeps_guest_slot() {
    let mut store = ProfileStore::new(Database::open_in_memory().unwrap(), EnergySettings::default());
    let now = Utc::now();
    store.register_at(registration("first@example.com"), now).unwrap();
    store.logout().unwrap();

    let outcome = LessonOutcome::scored("es", 5, 5, Vec::new(), Vec::new(), false);
    store.complete_lesson_at(&outcome, now);
    store.login_at("first@example.com", "correct horse", now).unwrap();

    let second = store.register_at(registration("second@example.com"), now).unwrap();
    assert!(second.progress.is_empty());

    store.logout().unwrap();
    let guest = store.read_at(now);
    assert!(guest.is_guest);
    assert_eq!(guest.progress["es"].xp, 40);
}

#[test]
fn test_register_with_stale_session_keeps_guest_slot() {
    let mut store = ProfileStore::new(MemoryStore::new(), EnergySettings::default());
    let now = Utc::now();
    let outcome = LessonOutcome::scored("it", 5, 1, Vec::new(), Vec::new(), false);
    store.complete_lesson_at(&outcome, now);
    store.backend_mut().set(SESSION_KEY, "gone@example.com").unwrap();

    store.register_at(registration("new@example.com"), now).unwrap();

    let guest: UserProfile = store.backend().get_json(GUEST_PROFILE_KEY).unwrap().unwrap();
    assert_eq!(guest.progress["it"].xp, 20);
}

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap() + Duration::days(n)
}

fn stored_guest(store: &ProfileStore<MemoryStore>) -> UserProfile {
    store.backend().get_json(GUEST_PROFILE_KEY).unwrap().unwrap()
}

/// Guest active on day 0 with a streak and touched goals.
fn active_store(streak: u32, freeze: bool) -> ProfileStore<MemoryStore> {
    let mut store = ProfileStore::new(MemoryStore::new(), EnergySettings::default());
    let outcome = LessonOutcome::scored("es", 5, 5, Vec::new(), Vec::new(), false);
    let mut profile = store.complete_lesson_at(&outcome, day(0)).profile;

    profile.streak = streak;
    profile.preferences.enable_streak_freeze = freeze;
    store.write(&profile).unwrap();
    store
}

#[test]
fn test_goals_reset_once_per_day() {
    let mut store = active_store(1, true);
    let outcome = LessonOutcome::scored("es", 5, 5, Vec::new(), Vec::new(), false);

    let next_day = store.read_at(day(1));
    assert_eq!(next_day.streak, 1);
    assert!(next_day.daily_goals.iter().all(|g| g.current == 0));

    store.complete_lesson_at(&outcome, day(1));
    let later = store.read_at(day(1) + Duration::hours(3));

    assert_eq!(later.streak, 2);
    let g1 = later.daily_goals.iter().find(|g| g.id == "g1").unwrap();
    let g2 = later.daily_goals.iter().find(|g| g.id == "g2").unwrap();
    assert_eq!(g1.current, 1);
    assert_eq!(g2.current, 40);
}

#[test]
fn test_three_day_gap_resets_stored_streak() {
    let mut store = active_store(7, false);

    let profile = store.read_at(day(3));
    assert_eq!(profile.streak, 0);
    assert!(profile.daily_goals.iter().all(|g| g.current == 0 && !g.completed));

    let stored = stored_guest(&store);
    assert_eq!(stored.streak, 0);
    assert_eq!(stored.last_active_date, day(3).date_naive());
    assert!(stored.daily_goals.iter().all(|g| g.current == 0));
}

#[test]
fn test_streak_freeze_covers_two_day_gap() {
    let mut store = active_store(7, true);

    let profile = store.read_at(day(2));
    assert_eq!(profile.streak, 7);
    assert!(profile.daily_goals.iter().all(|g| g.current == 0));
    assert_eq!(stored_guest(&store).streak, 7);
}

#[test]
fn test_recorded_lesson_spends_energy() {
    let mut store = ProfileStore::new(MemoryStore::new(), EnergySettings::default());
    let now = Utc::now();
    let lesson = LessonOutcome::scored("fr", 5, 2, Vec::new(), Vec::new(), false);
    let practice = LessonOutcome::scored("fr", 5, 2, Vec::new(), Vec::new(), true);

    for _ in 0..5 {
        store.record_lesson_at(&lesson, now).unwrap();
    }
    assert!(matches!(store.record_lesson_at(&lesson, now), Err(StoreError::OutOfEnergy)));
    assert_eq!(store.read_at(now).progress["fr"].lessons_completed, 5);

    let result = store.record_lesson_at(&practice, now).unwrap();
    assert_eq!(result.profile.energy, 0);
    assert_eq!(result.profile.progress["fr"].lessons_completed, 5);
}
