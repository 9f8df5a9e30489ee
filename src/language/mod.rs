pub mod detect;
pub mod filter;
pub mod translate;

pub use detect::{detect_language, split_sentences};
pub use filter::filter_english_sentences;
pub use translate::TranslationClient;

use crate::utils::{ProcessingConfig, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Processing strategy applied to each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Detect the language, translate only when it differs from the target.
    Auto,
    /// Always translate into the target language.
    Translate,
    /// Keep only English sentences.
    Filter,
    /// Detect the language, leave the text untouched.
    #[value(name = "detect_only", alias = "detect-only")]
    DetectOnly,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Auto => write!(f, "auto"),
            Mode::Translate => write!(f, "translate"),
            Mode::Filter => write!(f, "filter"),
            Mode::DetectOnly => write!(f, "detect_only"),
        }
    }
}

/// Output of a single transform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Transformed text; `None` when the transform legitimately produced
    /// nothing (e.g. filtering a fully non-English document).
    pub text: Option<String>,
    /// ISO 639-1 code of the detected source language.
    pub language: String,
}

/// The per-row transform the pipeline drives. Implementations may call
/// rate-limited network APIs; every failure is treated as row-local upstream.
#[async_trait]
pub trait TextProcessor: Send + Sync {
    async fn process(&self, text: &str, mode: Mode) -> Result<Processed>;
}

/// Production transform: whatlang detection plus sentence-level filtering and
/// LLM translation, selected by [`Mode`].
pub struct LanguageProcessor {
    config: ProcessingConfig,
    translator: Option<TranslationClient>,
}

impl LanguageProcessor {
    pub fn new(config: ProcessingConfig, translator: Option<TranslationClient>) -> Self {
        Self { config, translator }
    }

    async fn translate(&self, text: &str, language: &str) -> Result<Processed> {
        let Some(translator) = &self.translator else {
            warn!("translation requested but no API key configured, returning original text");
            return Ok(Processed {
                text: Some(text.to_string()),
                language: language.to_string(),
            });
        };

        let translated = translator
            .translate(text, language, &self.config.target_language)
            .await?;

        Ok(Processed {
            text: Some(translated),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl TextProcessor for LanguageProcessor {
    async fn process(&self, text: &str, mode: Mode) -> Result<Processed> {
        let language = detect_language(text, self.config.detection_sample_chars)?;

        match mode {
            Mode::DetectOnly => Ok(Processed {
                text: Some(text.to_string()),
                language,
            }),
            Mode::Filter => Ok(Processed {
                text: filter_english_sentences(text, self.config.min_sentence_chars),
                language,
            }),
            Mode::Translate => self.translate(text, &language).await,
            Mode::Auto if language != self.config.target_language => {
                self.translate(text, &language).await
            }
            Mode::Auto => Ok(Processed {
                text: Some(text.to_string()),
                language,
            }),
        }
    }
}
