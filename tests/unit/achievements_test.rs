//! Unit tests for achievement unlocking and the language score.

use std::collections::BTreeMap;

use lingoquest::achievements::{all_achievements, unlock_new, AggregateStats, ConditionType};
use lingoquest::profile::LanguageProgress;

fn progress(code: &str, xp: u32, lessons: u32) -> (String, LanguageProgress) {
    let mut p = LanguageProgress::new(code);
    p.add_xp(xp);
    p.lessons_completed = lessons;
    (code.to_string(), p)
}

#[test]
fn test_language_score_two_languages() {
    let map: BTreeMap<_, _> = [progress("es", 200, 3), progress("fr", 150, 2)].into_iter().collect();
    let stats = AggregateStats::from_progress(&map, 0);

    // 0.5 * 350 + 10 * 5 + 50 * 2
    assert_eq!(stats.language_score(), 325);
    assert_eq!(stats.value_for(ConditionType::Languages), 2);
}

#[test]
fn test_language_score_rounds_down() {
    let map: BTreeMap<_, _> = [progress("de", 15, 1)].into_iter().collect();
    let stats = AggregateStats::from_progress(&map, 0);
    assert_eq!(stats.language_score(), 7 + 10 + 50);
}

#[test]
fn test_unlock_new_only_reports_newly_met() {
    let catalog = all_achievements();
    let map: BTreeMap<_, _> = [
        progress("es", 600, 10),
        progress("fr", 300, 4),
        progress("it", 200, 2),
    ]
    .into_iter()
    .collect();
    let stats = AggregateStats::from_progress(&map, 7);
    let mut unlocked = vec!["first_step".to_string()];

    let new = unlock_new(&catalog, &mut unlocked, &stats);

    assert!(new.contains(&"streak_3".to_string()));
    assert!(new.contains(&"streak_7".to_string()));
    assert!(new.contains(&"xp_1000".to_string()));
    assert!(new.contains(&"polyglot_3".to_string()));
    assert!(new.contains(&"score_500".to_string()));
    assert!(!new.contains(&"first_step".to_string()));
    assert!(!new.contains(&"streak_14".to_string()));

    // Second pass finds nothing new
    assert!(unlock_new(&catalog, &mut unlocked, &stats).is_empty());
    assert_eq!(unlocked.len(), new.len() + 1);
}

#[test]
fn test_percentage_caps_at_hundred() {
    let streak_3 = all_achievements()
        .into_iter()
        .find(|a| a.id == "streak_3")
        .unwrap();

    let halfway = AggregateStats {
        streak: 1,
        ..Default::default()
    };
    let beyond = AggregateStats {
        streak: 10,
        ..Default::default()
    };

    assert!((streak_3.percentage(&halfway) - 33.33).abs() < 0.1);
    assert_eq!(streak_3.percentage(&beyond), 100.0);
}
