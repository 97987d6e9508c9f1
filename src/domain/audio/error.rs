use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudioServiceError {
    #[error("ElevenLabs API key not provided")]
    MissingApiKey,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AudioServiceError> for AppError {
    fn from(err: AudioServiceError) -> Self {
        match err {
            AudioServiceError::MissingApiKey => AppError::BadRequest(err.to_string()),
            AudioServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AudioServiceError::Dependency(msg) => AppError::ExternalService(msg),
            AudioServiceError::Storage(msg) => AppError::Internal(msg),
            AudioServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
