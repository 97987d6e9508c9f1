use super::translation_repository::TranslationRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.3;

/// OpenAI chat-completions implementation of the translation repository
#[derive(Default)]
pub struct OpenAiTranslationRepository;

impl OpenAiTranslationRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TranslationRepository for OpenAiTranslationRepository {
    async fn translate(
        &self,
        text: &str,
        target_language_name: &str,
        api_key: &str,
    ) -> Result<String, String> {
        // The key arrives with the request, so the client is built per call
        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));

        let system_message = format!(
            "You are a professional translator. Translate the given text accurately to {}. \
             Return only the translation without any additional commentary.",
            target_language_name
        );
        let prompt = format!(
            "Translate the following English text to {}. Return only the translation \
             without any additional text or explanations:\n\n\"{}\"",
            target_language_name, text
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_message)
                    .build()
                    .map_err(|e| format!("Invalid translation request: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(|e| format!("Invalid translation request: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("Invalid translation request: {}", e))?;

        tracing::info!(
            model = MODEL,
            target = target_language_name,
            text_length = text.len(),
            "Calling translation API"
        );

        let response = client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                target = target_language_name,
                "Translation API call failed"
            );
            format!("OpenAI error: {}", e)
        })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| "Translation response contained no content".to_string())
    }
}
