use super::error::TranslationServiceError;
use super::model::{TargetLanguage, TranslationRecord};
use crate::domain::batch::{self, BatchPolicy};
use crate::infrastructure::repositories::TranslationRepository;
use std::sync::Arc;
use std::time::Duration;

/// Translations go out three at a time with a pause between batches to stay
/// under the provider's rate limits
const BATCH_POLICY: BatchPolicy = BatchPolicy::new(3, Duration::from_millis(1000));

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }

    /// Translate `text` into a single target language.
    ///
    /// Fails before any network call when no API key was supplied. The
    /// provider response is trimmed and one layer of wrapping quotes is
    /// removed when present.
    pub async fn translate_one(
        &self,
        text: &str,
        language: &TargetLanguage,
        api_key: &str,
    ) -> Result<String, TranslationServiceError> {
        if api_key.trim().is_empty() {
            return Err(TranslationServiceError::MissingApiKey);
        }

        let raw = self
            .translation_repo
            .translate(text, &language.name, api_key)
            .await
            .map_err(|e| {
                TranslationServiceError::Dependency(format!(
                    "Failed to translate to {}: {}",
                    language.name, e
                ))
            })?;

        Ok(strip_wrapping_quotes(raw.trim()))
    }

    /// Fan `text` out across all target languages.
    ///
    /// Credentials are validated once up front; after that every per-item
    /// failure is captured as a failure-shaped record so the remaining
    /// languages still come back translated.
    pub async fn translate_to_multiple(
        &self,
        text: &str,
        languages: Vec<TargetLanguage>,
        api_key: &str,
    ) -> Result<Vec<TranslationRecord>, TranslationServiceError> {
        if api_key.trim().is_empty() {
            return Err(TranslationServiceError::MissingApiKey);
        }

        tracing::info!(
            language_count = languages.len(),
            text_length = text.len(),
            "Fanning out translation"
        );

        let records = batch::run(languages, BATCH_POLICY, |language, _position| async move {
            match self.translate_one(text, &language, api_key).await {
                Ok(translated) => {
                    TranslationRecord::translated(language.code, language.name, translated)
                }
                Err(e) => {
                    tracing::warn!(
                        language = %language.code,
                        error = %e,
                        "Translation failed"
                    );
                    TranslationRecord::failed(language.code, language.name, e.to_string())
                }
            }
        })
        .await;

        Ok(records)
    }
}

/// Remove one layer of wrapping quote characters the model sometimes adds.
/// Each end is handled independently and at most one character is removed
/// per end, so re-stripping an already-stripped string is a no-op.
fn strip_wrapping_quotes(text: &str) -> String {
    let pattern = regex::Regex::new(r#"^["']|["']$"#).unwrap();
    pattern.replace_all(text, "").to_string()
}
