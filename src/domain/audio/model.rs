use serde::{Deserialize, Serialize};

/// One translation to synthesize, as supplied by the caller.
/// `voice_id` is the explicit per-item selector; absence means the
/// per-language default table decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioGenerationItem {
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub voice_id: Option<String>,
}

/// Result of synthesizing one clip, carrying the source translation through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRecord {
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub outcome: AudioOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    Generated { url: String, voice_id: String },
    Failed { error: String },
}

impl AudioRecord {
    pub fn generated(item: AudioGenerationItem, audio: SynthesizedAudio) -> Self {
        Self {
            language: item.language,
            language_name: item.language_name,
            text: item.text,
            outcome: AudioOutcome::Generated {
                url: audio.url,
                voice_id: audio.voice_id,
            },
        }
    }

    pub fn failed(item: AudioGenerationItem, error: String) -> Self {
        Self {
            language: item.language,
            language_name: item.language_name,
            text: item.text,
            outcome: AudioOutcome::Failed { error },
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, AudioOutcome::Generated { .. })
    }
}

/// A stored clip: where the client can fetch it and which voice spoke it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub url: String,
    pub voice_id: String,
}

/// Voice offered by the speech provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub voice_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}
