pub mod error;
pub mod model;
pub mod service;
pub mod voice;

pub use error::AudioServiceError;
pub use model::{AudioGenerationItem, AudioOutcome, AudioRecord, SynthesizedAudio, VoiceDescriptor};
pub use service::AudioService;
pub use voice::{default_voice_for, resolve_voice, DEFAULT_VOICE_ID};
