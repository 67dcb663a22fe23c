//! Generative Language API client.
//!
//! Sends prompts to `models/{model}:generateContent` with a JSON response
//! schema and decodes the returned text as JSON. Connection failures and
//! server errors flip the client offline until the next successful call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt;
use super::provider::ContentProvider;
use super::session::translation_matches;
use super::types::{Lesson, LessonError, LessonRequest};
use crate::storage::config::AiSettings;

/// Lesson generation client.
pub struct GeminiClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL for the API
    base_url: String,
    /// Model name
    model: String,
    /// API key, requests fail fast without one
    api_key: Option<String>,
    /// Whether the service is currently reachable
    online: Arc<AtomicBool>,
}

impl GeminiClient {
    /// Create a client from settings.
    pub fn new(settings: &AiSettings) -> Result<Self, LessonError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .map_err(|e| LessonError::ApiError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.resolve_api_key(),
            online: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Set online status.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Run a prompt and decode the JSON answer.
    pub async fn generate<R: DeserializeOwned>(&self, prompt: &str, schema: Value) -> Result<R, LessonError> {
        let api_key = self.api_key.as_deref().ok_or(LessonError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    self.set_online(false);
                    LessonError::Offline
                } else {
                    LessonError::ApiError(e.to_string())
                }
            })?;

        let status = response.status();

        if status.is_success() {
            self.set_online(true);
            let decoded: GenerateResponse = response
                .json()
                .await
                .map_err(|e| LessonError::SerializationError(e.to_string()))?;

            let text = decoded.text().ok_or(LessonError::EmptyResponse)?;
            Ok(serde_json::from_str(&text)?)
        } else if status.as_u16() == 429 {
            Err(LessonError::RateLimited)
        } else if status.is_server_error() {
            self.set_online(false);
            Err(LessonError::Offline)
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_default();
            Err(LessonError::ApiError(format!("API returned status {}: {}", status, message)))
        }
    }
}

#[async_trait]
impl ContentProvider for GeminiClient {
    async fn generate_lesson(&self, request: &LessonRequest) -> Result<Lesson, LessonError> {
        let text = prompt::lesson_prompt(request);
        tracing::debug!(
            "Requesting {} lesson in {} ({} questions)",
            request.difficulty,
            request.language_name,
            request.question_count
        );

        let mut lesson: Lesson = self.generate(&text, prompt::lesson_schema()).await?;
        if lesson.id.is_empty() {
            lesson.id = uuid::Uuid::new_v4().to_string();
        }

        tracing::info!("Generated lesson '{}' with {} questions", lesson.title, lesson.len());
        Ok(lesson)
    }

    async fn validate_translation(
        &self,
        original: &str,
        answer: &str,
        expected: &str,
    ) -> Result<bool, LessonError> {
        if translation_matches(answer, expected) {
            return Ok(true);
        }

        let text = prompt::validation_prompt(original, expected, answer);
        let verdict: TranslationVerdict = self.generate(&text, prompt::validation_schema()).await?;
        Ok(verdict.is_correct)
    }

    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate.content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: ErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationVerdict {
    is_correct: bool,
}
