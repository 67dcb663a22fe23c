//! Prompt and response schema construction for lesson generation.

use serde_json::{json, Value};

use super::types::{LessonRequest, QuestionType};
use crate::profile::types::Difficulty;

/// Weak areas considered for targeted practice.
pub const PRACTICE_WEAK_AREAS: usize = 15;

/// Weak areas reviewed in a normal lesson.
pub const REVIEW_WEAK_AREAS: usize = 5;

/// The most recent `n` entries.
fn most_recent(items: &[String], n: usize) -> &[String] {
    &items[items.len().saturating_sub(n)..]
}

/// Adaptive context paragraph.
fn adaptive_context(request: &LessonRequest) -> String {
    if request.is_character_drill() {
        return format!(
            "This is a CHARACTER focused lesson. The learner is studying these symbols: {}.\n\
             Only test these characters, for example \"Which character is [sound]?\" with characters \
             as options, or \"What sound does [character] make?\" with romanizations as options.\n\
             Do not ask for sentence translations and do not use FILL_BLANK with sentences. \
             Use MULTIPLE_CHOICE and LISTENING for recognition and sound association.",
            request.focus_characters.join(", ")
        );
    }

    if request.is_practice {
        let topics = most_recent(&request.weak_areas, PRACTICE_WEAK_AREAS);
        if topics.is_empty() {
            return format!(
                "This is a general PRACTICE session and the learner is doing well. \
                 Review fundamental concepts appropriate for Level {} to reinforce retention.",
                request.level
            );
        }
        return format!(
            "This is a TARGETED PRACTICE session. The learner has struggled with: {}.\n\
             Focus heavily on these weak areas. Use vocabulary items inside sentences and build \
             questions that exercise the specific grammar rules. Reinforce these concepts rather \
             than introducing new ones.",
            topics.join(", ")
        );
    }

    let review = most_recent(&request.weak_areas, REVIEW_WEAK_AREAS);
    if review.is_empty() {
        format!(
            "The learner is doing well. Introduce a mix of vocabulary and grammar appropriate for Level {}.",
            request.level
        )
    } else {
        format!(
            "The learner has some weak areas: {}. Include a few questions reviewing them, \
             but focus mainly on new content for Level {}.",
            review.join(", "),
            request.level
        )
    }
}

/// Difficulty instruction line.
fn difficulty_instruction(request: &LessonRequest) -> &'static str {
    if request.is_character_drill() {
        return "Difficulty: BEGINNER. Only identify these characters and their sounds. No complex grammar.";
    }
    match request.difficulty {
        Difficulty::Easy => {
            "Difficulty: EASY. Simple vocabulary, clear context, short sentences, no complex grammar exceptions."
        }
        Difficulty::Medium => {
            "Difficulty: MEDIUM. Standard complexity for this level, mixing common and slightly challenging concepts."
        }
        Difficulty::Hard => {
            "Difficulty: HARD. Complex sentence structures, advanced vocabulary and tricky distractors."
        }
    }
}

/// Build the lesson generation prompt.
pub fn lesson_prompt(request: &LessonRequest) -> String {
    let kind = if request.is_practice {
        "practice review"
    } else {
        "dynamic lesson"
    };
    let target = &request.language_name;
    let native = &request.native_language_name;

    format!(
        "Create a {difficulty} {kind} for learning {target} from {native} (Level {level}).\n\
         {context}\n\
         {instruction}\n\n\
         Generate exactly {count} questions using a mix of these types:\n\
         1. MULTIPLE_CHOICE: a grammar or vocabulary question.\n\
         2. FILL_BLANK: a sentence with the missing word shown as '____'; options are candidate words.\n\
         3. TRANSLATE: a short phrase in {native} (or {target}) to translate.\n\
         4. SENTENCE_TRANSLATE: a longer sentence in {target} to translate to {native}, or the reverse.\n\
         5. LISTENING: 'questionText' is the {target} phrase that will be spoken; options are transcriptions or translations.\n\
         6. SPEAKING: 'questionText' is the {target} phrase to read aloud; 'correctAnswer' is the text to say; options may be empty.\n\n\
         Every question needs a clear 'questionText' and a 'topic'. Respond with valid JSON.",
        difficulty = request.difficulty,
        kind = kind,
        target = target,
        native = native,
        level = request.level,
        context = adaptive_context(request),
        instruction = difficulty_instruction(request),
        count = request.question_count,
    )
}

/// Build the translation grading prompt.
pub fn validation_prompt(original: &str, expected: &str, answer: &str) -> String {
    format!(
        "You are a language teacher.\n\
         Question: Translate \"{}\".\n\
         Expected answer: \"{}\"\n\
         Student answer: \"{}\"\n\n\
         Is the student answer a correct translation? Synonyms and slightly different phrasing \
         that keep the meaning are correct.\n\
         Respond with JSON: {{ \"isCorrect\": boolean }}",
        original, expected, answer
    )
}

/// Response schema for a generated lesson.
pub fn lesson_schema() -> Value {
    let types: Vec<&str> = QuestionType::ALL.iter().map(|t| t.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "STRING" },
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "type": { "type": "STRING", "enum": types },
                        "questionText": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswer": { "type": "STRING" },
                        "explanation": { "type": "STRING" },
                        "topic": { "type": "STRING" }
                    },
                    "required": ["id", "type", "questionText", "options", "correctAnswer", "explanation", "topic"]
                }
            }
        },
        "required": ["id", "title", "description", "questions"]
    })
}

/// Response schema for a translation verdict.
pub fn validation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": { "isCorrect": { "type": "BOOLEAN" } },
        "required": ["isCorrect"]
    })
}
