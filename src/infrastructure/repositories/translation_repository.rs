use async_trait::async_trait;

/// Repository for machine translation.
/// Abstracts the underlying provider (OpenAI, DeepL, etc.)
///
/// Credentials are passed per call: keys are user input that arrives with
/// each request, never process-wide configuration.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into the language named `target_language_name`.
    ///
    /// Returns the bare translated string, without commentary.
    ///
    /// # Errors
    /// Returns error if the provider is unavailable, rejects the
    /// credentials, or responds with no content
    async fn translate(
        &self,
        text: &str,
        target_language_name: &str,
        api_key: &str,
    ) -> Result<String, String>;
}
