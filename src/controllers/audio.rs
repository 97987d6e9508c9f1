use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::audio::{
    AudioGenerationItem, AudioOutcome, AudioRecord, AudioService, VoiceDescriptor,
};
use crate::error::{AppError, AppResult};

/// Request for POST /api/audio/generate
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioRequest {
    #[serde(default)]
    pub translations: Vec<TranslationInputDto>,
    #[serde(default)]
    pub openai_key: String,
    #[serde(default)]
    pub elevenlabs_key: String,
}

/// One translation to voice. `selected_voice_id` is what the user picked in
/// the UI; `voice_id` is what a previous generation round used.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInputDto {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub language_name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioResponse {
    pub success: bool,
    pub translations: Vec<AudioResultDto>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioResultDto {
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub audio_url: Option<String>,
    pub audio_generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_error: Option<String>,
}

impl From<AudioRecord> for AudioResultDto {
    fn from(record: AudioRecord) -> Self {
        match record.outcome {
            AudioOutcome::Generated { url, voice_id } => Self {
                language: record.language,
                language_name: record.language_name,
                text: record.text,
                audio_url: Some(url),
                audio_generated: true,
                voice_id: Some(voice_id),
                audio_error: None,
            },
            AudioOutcome::Failed { error } => Self {
                language: record.language,
                language_name: record.language_name,
                text: record.text,
                audio_url: None,
                audio_generated: false,
                voice_id: None,
                audio_error: Some(error),
            },
        }
    }
}

/// Request for POST /api/audio/generate-single
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSingleRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub language_name: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub openai_key: String,
    #[serde(default)]
    pub elevenlabs_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSingleResponse {
    pub success: bool,
    pub audio_url: String,
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub voice_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicesQuery {
    #[serde(default)]
    pub elevenlabs_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub success: bool,
    pub voices: Vec<VoiceDescriptor>,
}

pub struct AudioController {
    audio_service: Arc<AudioService>,
}

impl AudioController {
    pub fn new(audio_service: Arc<AudioService>) -> Self {
        Self { audio_service }
    }

    /// POST /api/audio/generate - Generate audio for multiple translations
    pub async fn generate(
        State(controller): State<Arc<AudioController>>,
        Json(request): Json<GenerateAudioRequest>,
    ) -> AppResult<Json<GenerateAudioResponse>> {
        if request.translations.is_empty() {
            return Err(AppError::BadRequest(
                "At least one translation is required".to_string(),
            ));
        }
        for translation in &request.translations {
            if translation.text.trim().is_empty()
                || translation.language.trim().is_empty()
                || translation.language_name.trim().is_empty()
            {
                return Err(AppError::BadRequest(
                    "Each translation must have text, language, and languageName".to_string(),
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
            translation_count = request.translations.len(),
            "Generating audio for translations"
        );

        let items = request
            .translations
            .into_iter()
            .map(|t| AudioGenerationItem {
                language: t.language,
                language_name: t.language_name,
                text: t.text,
                voice_id: t.selected_voice_id.or(t.voice_id),
            })
            .collect();

        let records = controller
            .audio_service
            .generate_multiple(items, &request.elevenlabs_key)
            .await?;

        let generated = records.iter().filter(|r| r.is_generated()).count();
        tracing::info!(
            generated,
            failed = records.len() - generated,
            "Audio generation completed"
        );

        Ok(Json(GenerateAudioResponse {
            success: true,
            translations: records.into_iter().map(Into::into).collect(),
            message: "Audio generation completed".to_string(),
        }))
    }

    /// POST /api/audio/generate-single - Generate audio for one translation,
    /// used by the per-item retry in the UI
    pub async fn generate_single(
        State(controller): State<Arc<AudioController>>,
        Json(request): Json<GenerateSingleRequest>,
    ) -> AppResult<Json<GenerateSingleResponse>> {
        if request.text.trim().is_empty() || request.language.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Text and language are required".to_string(),
            ));
        }
        if request.openai_key.trim().is_empty() || request.elevenlabs_key.trim().is_empty() {
            return Err(AppError::BadRequest("API keys are required".to_string()));
        }

        tracing::info!(language = %request.language, "Generating single audio clip");

        let output_name = format!(
            "{}_{}_single",
            chrono::Utc::now().timestamp_millis(),
            request.language
        );

        let audio = controller
            .audio_service
            .synthesize_one(
                &request.text,
                &request.language,
                &output_name,
                request.voice_id.as_deref(),
                &request.elevenlabs_key,
            )
            .await?;

        let language_name = request
            .language_name
            .unwrap_or_else(|| request.language.clone());

        Ok(Json(GenerateSingleResponse {
            success: true,
            audio_url: audio.url,
            language: request.language,
            language_name,
            text: request.text,
            voice_id: audio.voice_id,
        }))
    }

    /// GET /api/audio/voices - List voices available to the supplied key
    pub async fn voices(
        State(controller): State<Arc<AudioController>>,
        Query(query): Query<VoicesQuery>,
    ) -> AppResult<Json<VoicesResponse>> {
        if query.elevenlabs_key.trim().is_empty() {
            return Err(AppError::BadRequest(
                "ElevenLabs API key is required".to_string(),
            ));
        }

        let voices = controller
            .audio_service
            .available_voices(&query.elevenlabs_key)
            .await?;

        Ok(Json(VoicesResponse {
            success: true,
            voices,
        }))
    }

    /// GET /api/audio/test - Probe the speech provider with the supplied key
    pub async fn test_connection(
        State(controller): State<Arc<AudioController>>,
        Query(query): Query<VoicesQuery>,
    ) -> AppResult<Json<Value>> {
        if query.elevenlabs_key.trim().is_empty() {
            return Err(AppError::BadRequest(
                "ElevenLabs API key is required".to_string(),
            ));
        }

        controller
            .audio_service
            .available_voices(&query.elevenlabs_key)
            .await?;

        Ok(Json(json!({
            "success": true,
            "message": "ElevenLabs API connection successful"
        })))
    }
}
