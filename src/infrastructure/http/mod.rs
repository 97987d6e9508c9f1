pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::controllers::{
    audio::AudioController, health, language, translation::TranslationController,
};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router.
/// Separate from server startup so tests can run the identical stack against
/// injected repositories.
pub fn build_router(
    config: &Config,
    translation_controller: Arc<TranslationController>,
    audio_controller: Arc<AudioController>,
) -> Router {
    let translation_routes = Router::new()
        .route("/api/translate", post(TranslationController::translate))
        .with_state(translation_controller);

    let audio_routes = Router::new()
        .route("/api/audio/generate", post(AudioController::generate))
        .route(
            "/api/audio/generate-single",
            post(AudioController::generate_single),
        )
        .route("/api/audio/voices", get(AudioController::voices))
        .route("/api/audio/test", get(AudioController::test_connection))
        .with_state(audio_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .route("/api/languages", get(language::list_languages))
        .merge(translation_routes)
        .merge(audio_routes)
        .nest_service("/audio", ServeDir::new(&config.audio_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    translation_controller: Arc<TranslationController>,
    audio_controller: Arc<AudioController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, translation_controller, audio_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
