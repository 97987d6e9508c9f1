use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("OpenAI API key not provided")]
    MissingApiKey,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::MissingApiKey => AppError::BadRequest(err.to_string()),
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TranslationServiceError::Dependency(msg) => AppError::ExternalService(msg),
            TranslationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
