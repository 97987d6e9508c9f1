pub mod error;
pub mod model;
pub mod service;

pub use error::TranslationServiceError;
pub use model::{TargetLanguage, TranslationOutcome, TranslationRecord};
pub use service::TranslationService;
