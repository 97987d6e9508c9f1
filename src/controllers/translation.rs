use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::translation::{
    TargetLanguage, TranslationOutcome, TranslationRecord, TranslationService,
};
use crate::error::{AppError, AppResult};

const MAX_TEXT_LENGTH: usize = 5000;

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target_languages: Vec<TargetLanguageDto>,
    #[serde(default)]
    pub openai_key: String,
    #[serde(default)]
    pub elevenlabs_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetLanguageDto {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub openai_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub translations: Vec<TranslationDto>,
}

/// Wire shape of one translation. A failed language surfaces as an
/// error-marker text with the audio fields zeroed, so the result list always
/// matches the selected languages one to one.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationDto {
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub audio_url: Option<String>,
    pub audio_generated: bool,
}

impl From<TranslationRecord> for TranslationDto {
    fn from(record: TranslationRecord) -> Self {
        let text = match record.outcome {
            TranslationOutcome::Translated { text } => text,
            TranslationOutcome::Failed { error } => format!("Error: {}", error),
        };
        Self {
            language: record.language,
            language_name: record.language_name,
            text,
            audio_url: None,
            audio_generated: false,
        }
    }
}

pub struct TranslationController {
    translation_service: Arc<TranslationService>,
}

impl TranslationController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Fan text out across the selected target languages
    pub async fn translate(
        State(controller): State<Arc<TranslationController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let text = request.text.trim().to_string();

        if text.is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }
        if request.text.len() > MAX_TEXT_LENGTH {
            return Err(AppError::PayloadTooLarge(
                "Text must be less than 5000 characters".to_string(),
            ));
        }
        if request.target_languages.is_empty() {
            return Err(AppError::BadRequest(
                "Target languages are required and must be a non-empty array".to_string(),
            ));
        }
        for language in &request.target_languages {
            if language.code.trim().is_empty()
                || language.name.trim().is_empty()
                || language.openai_code.trim().is_empty()
            {
                return Err(AppError::BadRequest(
                    "Each target language must have code, name, and openaiCode".to_string(),
                ));
            }
        }
        if request.openai_key.trim().is_empty() {
            return Err(AppError::BadRequest(
                "OpenAI API key is required".to_string(),
            ));
        }
        if request.elevenlabs_key.trim().is_empty() {
            return Err(AppError::BadRequest(
                "ElevenLabs API key is required".to_string(),
            ));
        }

        tracing::info!(
            language_count = request.target_languages.len(),
            "Translating text into selected languages"
        );

        let languages = request
            .target_languages
            .into_iter()
            .map(|l| TargetLanguage {
                code: l.code,
                name: l.name,
            })
            .collect();

        let records = controller
            .translation_service
            .translate_to_multiple(&text, languages, &request.openai_key)
            .await?;

        Ok(Json(TranslateResponse {
            success: true,
            original_text: text,
            translations: records.into_iter().map(Into::into).collect(),
        }))
    }
}
