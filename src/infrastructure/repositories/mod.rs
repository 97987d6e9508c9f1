pub mod elevenlabs_speech_repository;
pub mod openai_translation_repository;
pub mod speech_repository;
pub mod translation_repository;

pub use elevenlabs_speech_repository::ElevenLabsSpeechRepository;
pub use openai_translation_repository::OpenAiTranslationRepository;
pub use speech_repository::SpeechRepository;
pub use translation_repository::TranslationRepository;
