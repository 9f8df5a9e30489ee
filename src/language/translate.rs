use crate::language::detect::split_sentences;
use crate::utils::{ApiConfig, LangProcError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

pub struct TranslationClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_retries: usize,
    max_chars_per_request: usize,
}

#[derive(Debug, Serialize)]
struct TranslateRequest {
    model: String,
    max_tokens: usize,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

impl TranslationClient {
    pub fn new(api: &ApiConfig, max_chars_per_request: usize) -> Result<Self> {
        let api_key = api
            .api_key
            .clone()
            .ok_or_else(|| LangProcError::ConfigError("no API key configured".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            model: api.model.clone(),
            api_key,
            max_retries: api.max_retries,
            max_chars_per_request,
        })
    }

    /// Translates `text` from `source_lang` into `target_lang`.
    ///
    /// Texts over the per-request character budget are split on sentence
    /// boundaries and translated segment by segment, in order.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        if source_lang == target_lang {
            return Ok(text.to_string());
        }

        let segments = segment_text(text, source_lang, self.max_chars_per_request);
        let mut translated = Vec::with_capacity(segments.len());

        for segment in &segments {
            translated.push(
                self.translate_segment(segment, source_lang, target_lang)
                    .await?,
            );
        }

        Ok(translated.join(" "))
    }

    async fn translate_segment(
        &self,
        segment: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        let prompt = build_translation_prompt(segment, source_lang, target_lang);

        let mut last_error = None;
        for attempt in 0..self.max_retries {
            match self.call_api(&prompt).await {
                Ok(response) => return Ok(response.trim().to_string()),
                Err(e) => {
                    warn!(attempt = attempt, error = %e, "Translation API call failed");
                    last_error = Some(e);

                    if attempt < self.max_retries - 1 {
                        let delay = Duration::from_secs(2u64.pow(attempt as u32));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            LangProcError::TranslationFailed("unknown error".to_string())
        }))
    }

    async fn call_api(&self, prompt: &str) -> Result<String> {
        let request = TranslateRequest {
            model: self.model.clone(),
            max_tokens: 8192,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LangProcError::ApiError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let api_response: TranslateResponse = response.json().await?;

        api_response
            .content
            .into_iter()
            .find_map(|block| {
                if block.content_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .ok_or_else(|| LangProcError::ApiError("No text content in response".to_string()))
    }
}

fn build_translation_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a professional translator. Translate the following text from {} to {}.\n\n",
        source_lang, target_lang
    ));
    prompt.push_str("Preserve the meaning, register and any numbers or codes exactly.\n");
    prompt.push_str("Output ONLY the translated text, no explanations or markdown formatting.\n\n");
    prompt.push_str(text);

    prompt
}

/// Splits text into request-sized segments on sentence boundaries.
/// A single sentence over the budget becomes its own segment.
pub fn segment_text(text: &str, language: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut segments = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text, language) {
        let fits = current.chars().count() + sentence.chars().count() < max_chars;
        if !current.is_empty() && !fits {
            segments.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&sentence);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}
