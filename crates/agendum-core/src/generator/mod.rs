//! Agenda content generation through an OpenAI-compatible endpoint.
//!
//! The generator fills in precomputed slots; it never decides scheduling.
//! Failures on this path are converted into a well-formed fallback JSON
//! payload so downstream rendering keeps working when the model endpoint
//! is down.

mod prompt;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::{CoreError, Result};
use crate::slots::Schedule;

pub use prompt::{build_agenda_prompt, build_refine_prompt, SYSTEM_PROMPT};

/// Output language for generated agenda content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "DE")]
    #[default]
    German,
    #[serde(rename = "EN")]
    English,
}

impl Language {
    /// Phrase spliced into prompts ("in German" / "in English").
    pub fn instruction(self) -> &'static str {
        match self {
            Language::German => "in German",
            Language::English => "in English",
        }
    }
}

/// Everything needed to generate content for one agenda.
#[derive(Debug, Clone)]
pub struct AgendaRequest {
    pub topic: String,
    pub schedule: Schedule,
    pub language: Language,
    pub email_content: Option<String>,
    /// Attachment texts, already decoded by the caller.
    pub attachments: Vec<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct AgendaGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl AgendaGenerator {
    /// Build a client from configuration. The configured timeout bounds
    /// every request; generation is the only long-latency step in the flow.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Custom(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// Generate agenda content for precomputed slots.
    ///
    /// Always returns a string that is nominally JSON: on any transport or
    /// API failure the error is folded into a fallback payload instead of
    /// being propagated.
    pub async fn generate(&self, request: &AgendaRequest) -> String {
        let prompt = build_agenda_prompt(
            &request.topic,
            &request.schedule,
            request.language,
            request.email_content.as_deref(),
            &request.attachments,
        );
        debug!(topic = %request.topic, prompt_len = prompt.len(), "requesting agenda content");

        match self.chat(SYSTEM_PROMPT, &prompt).await {
            Ok(content) => strip_code_fences(&content).to_string(),
            Err(e) => {
                warn!(error = %e, "agenda generation failed, returning fallback payload");
                json!({
                    "title": "Error Generating Agenda",
                    "summary": format!("Could not generate structured agenda. Error: {e}"),
                    "items": [],
                })
                .to_string()
            }
        }
    }

    /// Refine free text according to an instruction.
    ///
    /// Returns the input unchanged when the endpoint fails, so a refine
    /// round-trip can never lose the user's text.
    pub async fn refine(&self, text: &str, instruction: &str) -> String {
        let prompt = build_refine_prompt(text, instruction);
        match self.chat(SYSTEM_PROMPT, &prompt).await {
            Ok(refined) => strip_code_fences(&refined).to_string(),
            Err(e) => {
                warn!(error = %e, "text refinement failed, returning original text");
                text.to_string()
            }
        }
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": self.temperature,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Custom(format!("chat request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Custom(format!(
                "chat endpoint returned HTTP {status}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CoreError::Custom(format!("invalid chat response: {e}")))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| CoreError::Custom("chat response missing message content".to_string()))
    }
}

/// Strip markdown code-fence markers the model may wrap its output in.
pub fn strip_code_fences(content: &str) -> &str {
    let mut text = content.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::compute_schedule;

    fn test_config(base_url: String) -> GeneratorConfig {
        GeneratorConfig {
            base_url,
            api_key: "test-key".to_string(),
            model: "local-model".to_string(),
            temperature: 0.7,
            timeout_secs: 5,
        }
    }

    fn test_request() -> AgendaRequest {
        AgendaRequest {
            topic: "Dev Sync".to_string(),
            schedule: compute_schedule("2024-05-01T09:00:00", "2024-05-01T09:45:00").unwrap(),
            language: Language::English,
            email_content: None,
            attachments: Vec::new(),
        }
    }

    fn chat_response(content: &str) -> String {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[test]
    fn fences_are_stripped() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  ```json\n{}\n```  "), "{}");
    }

    #[test]
    fn language_wire_values() {
        assert_eq!(serde_json::to_string(&Language::German).unwrap(), "\"DE\"");
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"EN\"");
        let lang: Language = serde_json::from_str("\"EN\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[tokio::test]
    async fn generate_returns_model_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_response("{\"title\": \"Dev Sync\"}"))
            .create_async()
            .await;

        let generator = AgendaGenerator::new(&test_config(format!("{}/v1", server.url()))).unwrap();
        let content = generator.generate(&test_request()).await;

        mock.assert_async().await;
        assert_eq!(content, "{\"title\": \"Dev Sync\"}");
    }

    #[tokio::test]
    async fn generate_strips_code_fences_from_model_output() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_response("```json\n{\"title\": \"Dev Sync\"}\n```"))
            .create_async()
            .await;

        let generator = AgendaGenerator::new(&test_config(format!("{}/v1", server.url()))).unwrap();
        let content = generator.generate(&test_request()).await;
        assert_eq!(content, "{\"title\": \"Dev Sync\"}");
    }

    #[tokio::test]
    async fn generate_falls_back_to_error_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let generator = AgendaGenerator::new(&test_config(format!("{}/v1", server.url()))).unwrap();
        let content = generator.generate(&test_request()).await;

        let payload: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(payload["title"], "Error Generating Agenda");
        assert!(payload["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn refine_returns_input_on_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .create_async()
            .await;

        let generator = AgendaGenerator::new(&test_config(format!("{}/v1", server.url()))).unwrap();
        let refined = generator.refine("original text", "Keep the text in English.").await;
        assert_eq!(refined, "original text");
    }
}
