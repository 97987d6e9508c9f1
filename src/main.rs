use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use babelvoice_backend::controllers::audio::AudioController;
use babelvoice_backend::controllers::translation::TranslationController;
use babelvoice_backend::domain::audio::AudioService;
use babelvoice_backend::domain::translation::TranslationService;
use babelvoice_backend::infrastructure::config::{Config, LogFormat};
use babelvoice_backend::infrastructure::http::start_http_server;
use babelvoice_backend::infrastructure::repositories::{
    ElevenLabsSpeechRepository, OpenAiTranslationRepository, SpeechRepository,
    TranslationRepository,
};
use babelvoice_backend::infrastructure::storage::{AudioStore, FsAudioStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting BabelVoice Backend on {}:{}",
        config.host,
        config.port
    );

    for warning in config.startup_warnings() {
        tracing::warn!("{}", warning);
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories and storage (external collaborators)
    tracing::info!("Instantiating repositories...");
    let translation_repo: Arc<dyn TranslationRepository> =
        Arc::new(OpenAiTranslationRepository::new());
    let speech_repo: Arc<dyn SpeechRepository> = Arc::new(ElevenLabsSpeechRepository::new());
    let audio_store: Arc<dyn AudioStore> = Arc::new(FsAudioStore::new(config.audio_dir.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(translation_repo));
    let audio_service = Arc::new(AudioService::new(speech_repo, audio_store));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translation_controller = Arc::new(TranslationController::new(translation_service));
    let audio_controller = Arc::new(AudioController::new(audio_service));

    // Start HTTP server with all routes
    start_http_server(config, translation_controller, audio_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "babelvoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "babelvoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
