use super::error::AudioServiceError;
use super::model::{AudioGenerationItem, AudioRecord, SynthesizedAudio, VoiceDescriptor};
use super::voice::resolve_voice;
use crate::domain::batch::{self, BatchPolicy};
use crate::infrastructure::repositories::SpeechRepository;
use crate::infrastructure::storage::AudioStore;
use std::sync::Arc;
use std::time::Duration;

/// Audio synthesis is heavier than translation, so it fans out two at a time
/// with a longer pause between batches
const BATCH_POLICY: BatchPolicy = BatchPolicy::new(2, Duration::from_millis(2000));

pub struct AudioService {
    speech_repo: Arc<dyn SpeechRepository>,
    audio_store: Arc<dyn AudioStore>,
}

impl AudioService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>, audio_store: Arc<dyn AudioStore>) -> Self {
        Self {
            speech_repo,
            audio_store,
        }
    }

    /// Synthesize one clip and persist it under `output_name`.
    ///
    /// The effective voice is the explicit selector when given, otherwise the
    /// per-language default, otherwise the global default. Callers must keep
    /// `output_name` unique across concurrent calls; the store overwrites
    /// silently on collision.
    pub async fn synthesize_one(
        &self,
        text: &str,
        language_code: &str,
        output_name: &str,
        voice: Option<&str>,
        api_key: &str,
    ) -> Result<SynthesizedAudio, AudioServiceError> {
        if api_key.trim().is_empty() {
            return Err(AudioServiceError::MissingApiKey);
        }

        let voice_id = resolve_voice(voice, language_code);

        tracing::info!(
            language = %language_code,
            voice = %voice_id,
            text_length = text.len(),
            "Synthesizing audio"
        );

        let audio_data = self
            .speech_repo
            .synthesize(text, &voice_id, api_key)
            .await
            .map_err(|e| {
                AudioServiceError::Dependency(format!(
                    "Failed to generate audio for {}: {}",
                    language_code, e
                ))
            })?;

        let url = self
            .audio_store
            .write(output_name, &audio_data)
            .await
            .map_err(AudioServiceError::Storage)?;

        tracing::info!(
            language = %language_code,
            audio_size = audio_data.len(),
            url = %url,
            "Audio clip stored"
        );

        Ok(SynthesizedAudio { url, voice_id })
    }

    /// Fan audio synthesis out over a list of translations.
    ///
    /// Credentials are validated once up front; after that every per-item
    /// failure is captured as a failure-shaped record so the remaining clips
    /// are still produced.
    pub async fn generate_multiple(
        &self,
        items: Vec<AudioGenerationItem>,
        api_key: &str,
    ) -> Result<Vec<AudioRecord>, AudioServiceError> {
        if api_key.trim().is_empty() {
            return Err(AudioServiceError::MissingApiKey);
        }

        tracing::info!(item_count = items.len(), "Fanning out audio generation");

        let records = batch::run(items, BATCH_POLICY, |item, position| async move {
            let output_name = clip_name(&item.language, position);
            match self
                .synthesize_one(
                    &item.text,
                    &item.language,
                    &output_name,
                    item.voice_id.as_deref(),
                    api_key,
                )
                .await
            {
                Ok(audio) => AudioRecord::generated(item, audio),
                Err(e) => {
                    tracing::warn!(
                        language = %item.language,
                        error = %e,
                        "Audio generation failed"
                    );
                    AudioRecord::failed(item, e.to_string())
                }
            }
        })
        .await;

        Ok(records)
    }

    /// List the provider voices available to the caller's account
    pub async fn available_voices(
        &self,
        api_key: &str,
    ) -> Result<Vec<VoiceDescriptor>, AudioServiceError> {
        if api_key.trim().is_empty() {
            return Err(AudioServiceError::MissingApiKey);
        }

        self.speech_repo.list_voices(api_key).await.map_err(|e| {
            AudioServiceError::Dependency(format!("Failed to fetch available voices: {}", e))
        })
    }
}

/// Storage key for one clip: timestamp plus language plus input position, so
/// concurrent items of one request can never collide
fn clip_name(language_code: &str, position: usize) -> String {
    format!(
        "{}_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        language_code,
        position
    )
}
