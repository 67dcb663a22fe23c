//! Unit tests for lesson prompt construction.

use lingoquest::lessons::prompt::{lesson_prompt, lesson_schema, validation_prompt};
use lingoquest::lessons::LessonRequest;
use lingoquest::profile::Difficulty;

fn weak(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("topic{:02}", i)).collect()
}

#[test]
fn test_lesson_prompt_reviews_five_most_recent_weak_areas() {
    let mut request = LessonRequest::new("Spanish", "English", 3);
    request.weak_areas = weak(8);
    request.difficulty = Difficulty::Easy;

    let prompt = lesson_prompt(&request);

    assert!(prompt.contains("Create a Easy dynamic lesson for learning Spanish from English (Level 3)"));
    assert!(prompt.contains("topic04, topic05, topic06, topic07, topic08"));
    assert!(!prompt.contains("topic03"));
    assert!(prompt.contains("Difficulty: EASY"));
    assert!(prompt.contains("Generate exactly 5 questions"));
}

#[test]
fn test_practice_prompt_targets_fifteen_weak_areas() {
    let mut request = LessonRequest::new("French", "English", 7);
    request.weak_areas = weak(20);
    request.is_practice = true;

    let prompt = lesson_prompt(&request);

    assert!(prompt.contains("practice review"));
    assert!(prompt.contains("TARGETED PRACTICE"));
    assert!(prompt.contains("topic06"));
    assert!(!prompt.contains("topic05,"));
    assert!(prompt.contains("topic20"));
}

#[test]
fn test_practice_prompt_without_weak_areas() {
    let mut request = LessonRequest::new("French", "English", 2);
    request.is_practice = true;

    let prompt = lesson_prompt(&request);
    assert!(prompt.contains("general PRACTICE session"));
    assert!(prompt.contains("Level 2"));
}

#[test]
fn test_character_drill_prompt_overrides_difficulty() {
    let mut request = LessonRequest::new("Japanese", "English", 1);
    request.focus_characters = vec!["あ (a)".to_string(), "い (i)".to_string()];
    request.difficulty = Difficulty::Hard;

    let prompt = lesson_prompt(&request);

    assert!(prompt.contains("CHARACTER focused lesson"));
    assert!(prompt.contains("あ (a), い (i)"));
    assert!(prompt.contains("Difficulty: BEGINNER"));
    assert!(!prompt.contains("Difficulty: HARD"));
}

#[test]
fn test_validation_prompt_embeds_all_three_texts() {
    let prompt = validation_prompt("Buenos días", "Good morning", "Morning!");
    assert!(prompt.contains("Translate \"Buenos días\""));
    assert!(prompt.contains("Expected answer: \"Good morning\""));
    assert!(prompt.contains("Student answer: \"Morning!\""));
}

#[test]
fn test_lesson_schema_requires_questions() {
    let schema = lesson_schema();
    let required = schema["required"].as_array().unwrap();
    assert!(required.iter().any(|v| v == "questions"));
}
