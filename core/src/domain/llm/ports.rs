use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::{GeneratedImage, InlineMedia, LlmPrompt, SearchHit},
};

/// LLM Client trait for calling hosted models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: LlmPrompt,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_media(
        &self,
        prompt: LlmPrompt,
        media: InlineMedia,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Hosted text-to-image model
#[cfg_attr(test, mockall::automock)]
pub trait ImageGenerator: Send + Sync {
    fn generate_image(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;
}

/// Hosted web search used to ground nutrient lookups
#[cfg_attr(test, mockall::automock)]
pub trait WebSearchClient: Send + Sync {
    fn search(
        &self,
        query: String,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<SearchHit>, CoreError>> + Send;
}
