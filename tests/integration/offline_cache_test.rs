//! Integration tests for the offline lesson queue on SQLite.

use chrono::Utc;
use lingoquest::lessons::{Lesson, OfflineLesson, OfflineLessonCache};
use lingoquest::storage::kv::OFFLINE_LESSONS_KEY;
use lingoquest::{Database, KeyValueStore};
use tempfile::tempdir;

fn saved(title: &str, code: &str) -> OfflineLesson {
    let mut lesson = Lesson::fallback("Spanish");
    lesson.id = title.to_lowercase();
    lesson.title = title.to_string();
    OfflineLesson::new(lesson, code, Utc::now())
}

#[test]
fn test_queue_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lq.db");

    {
        let mut db = Database::open(&path).unwrap();
        let mut cache = OfflineLessonCache::new(&mut db);
        cache.save(saved("One", "es")).unwrap();
        cache.save(saved("Two", "fr")).unwrap();
    }

    let mut db = Database::open(&path).unwrap();
    let mut cache = OfflineLessonCache::new(&mut db);
    assert_eq!(cache.len().unwrap(), 2);

    let popped = cache.pop("fr").unwrap().unwrap();
    assert_eq!(popped.lesson.title, "Two");
    assert_eq!(cache.count("fr").unwrap(), 0);
    assert_eq!(cache.count("es").unwrap(), 1);
}

#[test]
fn test_capacity_evicts_oldest() {
    let mut db = Database::open_in_memory().unwrap();
    let mut cache = OfflineLessonCache::with_capacity(&mut db, 3);

    for title in ["A", "B", "C", "D"] {
        cache.save(saved(title, "es")).unwrap();
    }

    let titles: Vec<String> = cache
        .all()
        .unwrap()
        .into_iter()
        .map(|l| l.lesson.title)
        .collect();
    assert_eq!(titles, vec!["B", "C", "D"]);
}

#[test]
fn test_stored_json_is_flat_camel_case() {
    let mut db = Database::open_in_memory().unwrap();
    OfflineLessonCache::new(&mut db).save(saved("Flat", "de")).unwrap();

    let raw = db.get(OFFLINE_LESSONS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let first = &value[0];
    assert_eq!(first["title"], "Flat");
    assert_eq!(first["languageCode"], "de");
    assert!(first["savedAt"].is_string());
    assert_eq!(first["questions"][0]["type"], "MULTIPLE_CHOICE");
}
