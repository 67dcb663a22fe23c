//! Lesson content types and errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::types::Difficulty;
use crate::storage::DatabaseError;

/// Topic used when a question carries none.
pub const DEFAULT_TOPIC: &str = "General";

/// Fewest questions a generated lesson asks for.
pub const MIN_QUESTIONS: u32 = 3;

/// Kind of quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    MultipleChoice,
    FillBlank,
    Translate,
    SentenceTranslate,
    Listening,
    Speaking,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::MultipleChoice,
        QuestionType::FillBlank,
        QuestionType::Translate,
        QuestionType::SentenceTranslate,
        QuestionType::Listening,
        QuestionType::Speaking,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::FillBlank => "FILL_BLANK",
            QuestionType::Translate => "TRANSLATE",
            QuestionType::SentenceTranslate => "SENTENCE_TRANSLATE",
            QuestionType::Listening => "LISTENING",
            QuestionType::Speaking => "SPEAKING",
        }
    }

    /// Free-text answer checked as a translation.
    pub fn is_translation(&self) -> bool {
        matches!(self, QuestionType::Translate | QuestionType::SentenceTranslate)
    }

    /// Answer is picked from `options`.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::FillBlank | QuestionType::Listening
        )
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Prompt shown, or for listening the phrase that is spoken
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// For speaking, the phrase the learner must say
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub topic: Option<String>,
}

impl QuizQuestion {
    /// Topic, defaulting to "General".
    pub fn topic(&self) -> &str {
        self.topic
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TOPIC)
    }
}

/// A lesson: an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<QuizQuestion>,
}

impl Lesson {
    /// Built-in lesson used when nothing else is available.
    pub fn fallback(language_name: &str) -> Self {
        Self {
            id: "fallback-1".to_string(),
            title: format!("Basic {}", language_name),
            description: "A built-in lesson used while lesson generation is unavailable.".to_string(),
            questions: vec![QuizQuestion {
                id: 1,
                question_type: QuestionType::MultipleChoice,
                question_text: format!("What is \"Hello\" in {}?", language_name),
                options: vec![
                    "Hello".to_string(),
                    "Hola".to_string(),
                    "Bonjour".to_string(),
                    "Ciao".to_string(),
                ],
                correct_answer: "Hello".to_string(),
                explanation: "This is a fallback lesson.".to_string(),
                topic: Some("Greetings".to_string()),
            }],
        }
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A lesson saved for use without connectivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineLesson {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub saved_at: DateTime<Utc>,
    pub language_code: String,
}

impl OfflineLesson {
    pub fn new(lesson: Lesson, language_code: &str, saved_at: DateTime<Utc>) -> Self {
        Self {
            lesson,
            saved_at,
            language_code: language_code.to_string(),
        }
    }
}

/// Parameters for generating a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRequest {
    /// Target language display name
    pub language_name: String,
    pub native_language_name: String,
    pub level: u32,
    /// Weak areas, oldest first
    pub weak_areas: Vec<String>,
    pub is_practice: bool,
    /// Non-empty for a writing-system drill
    pub focus_characters: Vec<String>,
    pub difficulty: Difficulty,
    pub question_count: u32,
}

impl LessonRequest {
    /// A normal lesson request with defaults.
    pub fn new(language_name: &str, native_language_name: &str, level: u32) -> Self {
        Self {
            language_name: language_name.to_string(),
            native_language_name: native_language_name.to_string(),
            level,
            weak_areas: Vec::new(),
            is_practice: false,
            focus_characters: Vec::new(),
            difficulty: Difficulty::Medium,
            question_count: 5,
        }
    }

    pub fn is_character_drill(&self) -> bool {
        !self.focus_characters.is_empty()
    }

    /// Question count for a preferred lesson duration.
    pub fn question_count_for(lesson_duration: u32) -> u32 {
        lesson_duration.max(MIN_QUESTIONS)
    }
}

/// Lesson content errors
#[derive(Debug, Error)]
pub enum LessonError {
    /// No API key configured
    #[error("No API key configured for lesson generation")]
    MissingApiKey,

    /// Network unavailable
    #[error("Network unavailable")]
    Offline,

    /// Rate limited by the content service
    #[error("Rate limited - try again later")]
    RateLimited,

    /// Content service error
    #[error("Content service error: {0}")]
    ApiError(String),

    /// The service answered without usable content
    #[error("Content service returned no content")]
    EmptyResponse,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Every question has been answered
    #[error("Lesson already finished")]
    Finished,

    /// Offline cache error
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<serde_json::Error> for LessonError {
    fn from(e: serde_json::Error) -> Self {
        LessonError::SerializationError(e.to_string())
    }
}

impl From<DatabaseError> for LessonError {
    fn from(e: DatabaseError) -> Self {
        LessonError::CacheError(e.to_string())
    }
}
