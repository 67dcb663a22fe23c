//! Taking a lesson: answer checking and outcome collection.

use super::provider::ContentProvider;
use super::types::{Lesson, LessonError, QuestionType, QuizQuestion};
use crate::progress::LessonOutcome;

/// Lower-case, strip `.,!?` and trim.
pub fn normalize_answer(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// A spoken utterance matches when it equals or contains the target phrase.
pub fn speaking_matches(spoken: &str, target: &str) -> bool {
    let spoken = normalize_answer(spoken);
    if spoken.is_empty() {
        return false;
    }
    let target = normalize_answer(target);
    spoken == target || spoken.contains(&target)
}

/// A typed translation matches the reference exactly after normalization.
pub fn translation_matches(typed: &str, expected: &str) -> bool {
    normalize_answer(typed) == normalize_answer(expected)
}

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// State of a lesson in progress.
pub struct LessonSession {
    lesson: Lesson,
    language_code: String,
    is_practice: bool,
    offline: bool,
    index: usize,
    correct: u32,
    weak_topics: Vec<String>,
    strong_topics: Vec<String>,
}

impl LessonSession {
    /// Start a lesson. `offline` disables provider-backed grading.
    pub fn new(lesson: Lesson, language_code: &str, is_practice: bool, offline: bool) -> Self {
        Self {
            lesson,
            language_code: language_code.to_string(),
            is_practice,
            offline,
            index: 0,
            correct: 0,
            weak_topics: Vec::new(),
            strong_topics: Vec::new(),
        }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// The question awaiting an answer.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.lesson.questions.get(self.index)
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.lesson.questions.len()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Check an answer to the current question and move on.
    pub async fn answer<P>(&mut self, answer: &str, provider: &P) -> Result<AnswerFeedback, LessonError>
    where
        P: ContentProvider + ?Sized,
    {
        let question = self
            .current()
            .cloned()
            .ok_or(LessonError::Finished)?;

        let correct = match question.question_type {
            QuestionType::Speaking => speaking_matches(answer, &question.correct_answer),
            t if t.is_translation() => self.check_translation(&question, answer, provider).await,
            _ => answer == question.correct_answer,
        };

        let topic = question.topic().to_string();
        if correct {
            self.correct += 1;
            self.strong_topics.push(topic);
        } else {
            self.weak_topics.push(topic);
        }
        self.index += 1;

        Ok(AnswerFeedback {
            correct,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        })
    }

    /// Skip the current question. Its topic counts as weak.
    pub fn skip(&mut self) {
        if let Some(question) = self.current() {
            let topic = question.topic().to_string();
            tracing::debug!("Skipped question {} ({})", question.id, topic);
            self.weak_topics.push(topic);
            self.index += 1;
        }
    }

    /// Outcome to hand to the reconciler.
    pub fn finish(self) -> LessonOutcome {
        LessonOutcome::scored(
            &self.language_code,
            self.lesson.questions.len() as u32,
            self.correct,
            dedup(self.weak_topics),
            dedup(self.strong_topics),
            self.is_practice,
        )
    }

    async fn check_translation<P>(&self, question: &QuizQuestion, answer: &str, provider: &P) -> bool
    where
        P: ContentProvider + ?Sized,
    {
        if translation_matches(answer, &question.correct_answer) {
            return true;
        }
        if self.offline || !provider.is_online() {
            return false;
        }

        match provider
            .validate_translation(&question.question_text, answer, &question.correct_answer)
            .await
        {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Translation check failed, marking incorrect: {}", e);
                false
            }
        }
    }
}

/// Drop repeats, keeping first occurrences.
fn dedup(topics: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    topics.into_iter().filter(|t| seen.insert(t.clone())).collect()
}
