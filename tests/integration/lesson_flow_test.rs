//! Integration tests for a lesson from loading to reconciliation.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use lingoquest::lessons::{
    load_lesson, Lesson, LessonError, LessonRequest, LessonSource, OfflineLesson, OfflineLessonCache,
    QuestionType, QuizQuestion,
};
use lingoquest::storage::EnergySettings;
use lingoquest::{ContentProvider, LessonSession, MemoryStore, ProfileStore};

struct ScriptedProvider {
    lesson: Option<Lesson>,
    accept_translations: bool,
    validations: AtomicUsize,
}

impl ScriptedProvider {
    fn serving(lesson: Lesson) -> Self {
        Self {
            lesson: Some(lesson),
            accept_translations: true,
            validations: AtomicUsize::new(0),
        }
    }

    fn broken() -> Self {
        Self {
            lesson: None,
            accept_translations: false,
            validations: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
    async fn generate_lesson(&self, _request: &LessonRequest) -> Result<Lesson, LessonError> {
        self.lesson.clone().ok_or(LessonError::Offline)
    }

    async fn validate_translation(&self, _: &str, _: &str, _: &str) -> Result<bool, LessonError> {
        self.validations.fetch_add(1, Ordering::SeqCst);
        Ok(self.accept_translations)
    }
}

fn question(id: u32, question_type: QuestionType, answer: &str, topic: &str) -> QuizQuestion {
    QuizQuestion {
        id,
        question_type,
        question_text: format!("Question {}", id),
        options: Vec::new(),
        correct_answer: answer.to_string(),
        explanation: String::new(),
        topic: Some(topic.to_string()),
    }
}

fn spanish_lesson() -> Lesson {
    Lesson {
        id: "es-1".to_string(),
        title: "Café".to_string(),
        description: String::new(),
        questions: vec![
            question(1, QuestionType::MultipleChoice, "Hola", "Greetings"),
            question(2, QuestionType::Translate, "I want a coffee", "Food"),
            question(3, QuestionType::SentenceTranslate, "The bill, please", "Food"),
            question(4, QuestionType::Speaking, "Buenos días", "Greetings"),
            question(5, QuestionType::FillBlank, "soy", "Verbs"),
        ],
    }
}

#[tokio::test]
async fn test_full_lesson_updates_profile() {
    let provider = ScriptedProvider::serving(spanish_lesson());
    let mut store = ProfileStore::new(MemoryStore::new(), EnergySettings::default());
    let now = Utc::now();
    store.consume_energy_at(now).unwrap();

    let request = LessonRequest::new("Spanish", "English", 1);
    let loaded = {
        let mut cache = OfflineLessonCache::new(store.backend_mut());
        load_lesson(&provider, &mut cache, &request, "es").await
    };
    assert_eq!(loaded.source, LessonSource::Generated);

    let mut session = LessonSession::new(loaded.lesson, "es", false, loaded.source.is_offline());
    assert!(session.answer("Hola", &provider).await.unwrap().correct);
    // Exact match after normalization, no provider call
    assert!(session.answer("i want a coffee!", &provider).await.unwrap().correct);
    // Paraphrase accepted by the provider
    assert!(session.answer("Check please", &provider).await.unwrap().correct);
    assert!(session.answer("buenos días", &provider).await.unwrap().correct);
    let wrong = session.answer("eres", &provider).await.unwrap();
    assert!(!wrong.correct);
    assert_eq!(wrong.correct_answer, "soy");
    assert!(session.is_finished());
    assert_eq!(provider.validations.load(Ordering::SeqCst), 1);

    let outcome = session.finish();
    assert_eq!(outcome.questions_correct, 4);
    assert_eq!(outcome.xp_gained, 35);
    assert_eq!(outcome.weak_topics, vec!["Verbs".to_string()]);
    assert_eq!(outcome.strong_topics, vec!["Greetings".to_string(), "Food".to_string()]);

    let result = store.complete_lesson_at(&outcome, now);
    let es = &result.profile.progress["es"];
    assert_eq!(es.xp, 35);
    assert_eq!(es.lessons_completed, 1);
    assert_eq!(es.weak_areas, vec!["Verbs".to_string()]);
    assert_eq!(result.profile.energy, 4);
    assert!(result.streak_extended);
    assert!(result.new_achievements.contains(&"first_step".to_string()));
}

#[tokio::test]
async fn test_offline_lesson_grades_locally() {
    let provider = ScriptedProvider::broken();
    let mut store = MemoryStore::new();

    let mut cached = spanish_lesson();
    cached.questions.truncate(3);
    let mut cache = OfflineLessonCache::new(&mut store);
    cache.save(OfflineLesson::new(cached, "es", Utc::now())).unwrap();

    let request = LessonRequest::new("Spanish", "English", 1);
    let loaded = load_lesson(&provider, &mut cache, &request, "es").await;
    assert_eq!(loaded.source, LessonSource::Offline);
    assert_eq!(cache.count("es").unwrap(), 0);

    let mut session = LessonSession::new(loaded.lesson, "es", true, loaded.source.is_offline());
    session.answer("Hola", &provider).await.unwrap();
    session.answer("I want coffee", &provider).await.unwrap();
    session.skip();

    assert_eq!(provider.validations.load(Ordering::SeqCst), 0);
    let outcome = session.finish();
    assert!(outcome.is_practice);
    assert_eq!(outcome.questions_correct, 1);
    assert_eq!(outcome.weak_topics, vec!["Food".to_string()]);
}

#[tokio::test]
async fn test_nothing_available_serves_fallback() {
    let provider = ScriptedProvider::broken();
    let mut store = MemoryStore::new();
    let mut cache = OfflineLessonCache::new(&mut store);

    let request = LessonRequest::new("Italian", "English", 1);
    let loaded = load_lesson(&provider, &mut cache, &request, "it").await;

    assert_eq!(loaded.source, LessonSource::Fallback);
    assert_eq!(loaded.lesson.id, "fallback-1");
    assert_eq!(loaded.lesson.title, "Basic Italian");
}

#[tokio::test]
async fn test_answer_after_finish_is_an_error() {
    let provider = ScriptedProvider::broken();
    let mut session = LessonSession::new(Lesson::fallback("Spanish"), "es", false, true);

    session.answer("Hello", &provider).await.unwrap();
    let err = session.answer("Hello", &provider).await.unwrap_err();
    assert!(matches!(err, LessonError::Finished));
}
