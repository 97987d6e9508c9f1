use super::speech_repository::SpeechRepository;
use crate::domain::audio::VoiceDescriptor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";
const SYNTHESIS_MODEL_ID: &str = "eleven_multilingual_v2";

// Fixed voice profile applied to every synthesis call
const VOICE_STABILITY: f32 = 0.5;
const VOICE_SIMILARITY_BOOST: f32 = 0.5;
const VOICE_STYLE: f32 = 0.0;
const VOICE_SPEAKER_BOOST: bool = true;

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl VoiceSettings {
    fn standard() -> Self {
        Self {
            stability: VOICE_STABILITY,
            similarity_boost: VOICE_SIMILARITY_BOOST,
            style: VOICE_STYLE,
            use_speaker_boost: VOICE_SPEAKER_BOOST,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<VoiceDescriptor>,
}

/// ElevenLabs implementation of the speech repository
pub struct ElevenLabsSpeechRepository {
    http_client: reqwest::Client,
}

impl ElevenLabsSpeechRepository {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

impl Default for ElevenLabsSpeechRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechRepository for ElevenLabsSpeechRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        api_key: &str,
    ) -> Result<Vec<u8>, String> {
        tracing::info!(
            voice = voice_id,
            model = SYNTHESIS_MODEL_ID,
            text_length = text.len(),
            "Calling speech synthesis API"
        );

        let response = self
            .http_client
            .post(format!(
                "{}/text-to-speech/{}",
                ELEVENLABS_API_URL, voice_id
            ))
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", api_key)
            .json(&SynthesisRequest {
                text,
                model_id: SYNTHESIS_MODEL_ID,
                voice_settings: VoiceSettings::standard(),
            })
            .send()
            .await
            .map_err(|e| format!("ElevenLabs request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                body = %body,
                voice = voice_id,
                "Speech synthesis API returned an error"
            );
            return Err(format!("ElevenLabs returned {}: {}", status, body));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read audio body: {}", e))?;

        tracing::debug!(audio_size = audio.len(), "Speech synthesis audio received");

        Ok(audio.to_vec())
    }

    async fn list_voices(&self, api_key: &str) -> Result<Vec<VoiceDescriptor>, String> {
        let response = self
            .http_client
            .get(format!("{}/voices", ELEVENLABS_API_URL))
            .header("xi-api-key", api_key)
            .send()
            .await
            .map_err(|e| format!("ElevenLabs request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("ElevenLabs returned {}: {}", status, body));
        }

        let parsed: VoicesResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse voices response: {}", e))?;

        Ok(parsed.voices)
    }
}
