use std::path::PathBuf;
use std::sync::Arc;

use babelvoice_backend::controllers::audio::AudioController;
use babelvoice_backend::controllers::translation::TranslationController;
use babelvoice_backend::domain::audio::AudioService;
use babelvoice_backend::domain::translation::TranslationService;
use babelvoice_backend::infrastructure::config::{Config, Environment, LogFormat};
use babelvoice_backend::infrastructure::http::build_router;
use babelvoice_backend::infrastructure::repositories::{SpeechRepository, TranslationRepository};
use babelvoice_backend::infrastructure::storage::{AudioStore, FsAudioStore};
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;
use mocks::{MockSpeechRepository, MockTranslationRepository};

pub struct TestApp {
    pub client: TestClient,
    pub audio_dir: PathBuf,
}

/// Spawn the app with well-behaved mock providers
pub async fn spawn_app() -> TestApp {
    spawn_app_with(
        Arc::new(MockTranslationRepository::ok()),
        Arc::new(MockSpeechRepository::ok()),
    )
    .await
}

/// Spawn the app with caller-supplied providers, serving on an ephemeral port
pub async fn spawn_app_with(
    translation_repo: Arc<dyn TranslationRepository>,
    speech_repo: Arc<dyn SpeechRepository>,
) -> TestApp {
    let audio_dir = std::env::temp_dir().join(format!("babelvoice-e2e-{}", uuid::Uuid::new_v4()));

    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        audio_dir: audio_dir.display().to_string(),
    };

    let audio_store: Arc<dyn AudioStore> = Arc::new(FsAudioStore::new(audio_dir.clone()));
    let translation_service = Arc::new(TranslationService::new(translation_repo));
    let audio_service = Arc::new(AudioService::new(speech_repo, audio_store));

    let app = build_router(
        &config,
        Arc::new(TranslationController::new(translation_service)),
        Arc::new(AudioController::new(audio_service)),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    TestApp {
        client: TestClient::new(&format!("http://{}", addr)),
        audio_dir,
    }
}
