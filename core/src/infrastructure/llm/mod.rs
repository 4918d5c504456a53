pub mod gemini_client;
pub mod groq_client;

pub use gemini_client::{GeminiImageGenerator, GeminiLLMClient};
pub use groq_client::GroqLLMClient;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        ports::LLMClient,
        value_objects::{InlineMedia, LlmPrompt},
    },
};

/// Hosted model provider selected at startup
#[derive(Debug, Clone)]
pub enum LLMBackend {
    Gemini(GeminiLLMClient),
    Groq(GroqLLMClient),
}

impl LLMClient for LLMBackend {
    async fn generate_with_text(&self, prompt: LlmPrompt) -> Result<String, CoreError> {
        match self {
            LLMBackend::Gemini(client) => client.generate_with_text(prompt).await,
            LLMBackend::Groq(client) => client.generate_with_text(prompt).await,
        }
    }

    async fn generate_with_media(
        &self,
        prompt: LlmPrompt,
        media: InlineMedia,
    ) -> Result<String, CoreError> {
        match self {
            LLMBackend::Gemini(client) => client.generate_with_media(prompt, media).await,
            LLMBackend::Groq(client) => client.generate_with_media(prompt, media).await,
        }
    }
}
