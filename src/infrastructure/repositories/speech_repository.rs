use crate::domain::audio::VoiceDescriptor;
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider.
///
/// Credentials are passed per call, same as for translation.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `text` with the given provider voice.
    ///
    /// Returns raw audio bytes ready for storage (MP3 format)
    async fn synthesize(&self, text: &str, voice_id: &str, api_key: &str)
        -> Result<Vec<u8>, String>;

    /// List the voices available to the caller's account
    async fn list_voices(&self, api_key: &str) -> Result<Vec<VoiceDescriptor>, String>;
}
