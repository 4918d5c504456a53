use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        ports::LLMClient,
        value_objects::{InlineMedia, LlmPrompt, ResponseFormat},
    },
};

/// OpenAI-compatible chat completions client (Groq)
#[derive(Debug, Clone)]
pub struct GroqLLMClient {
    api_key: String,
    base_url: String,
    text_model: String,
    vision_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatRequest>,
}

#[derive(Debug, Serialize)]
struct ResponseFormatRequest {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqLLMClient {
    pub fn new(
        api_key: String,
        base_url: String,
        text_model: String,
        vision_model: String,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            text_model,
            vision_model,
            client: Client::new(),
        }
    }

    fn build_request(&self, prompt: LlmPrompt, media: Option<InlineMedia>) -> ChatRequest {
        // json_object mode only accepts a schema through the prompt itself
        let (system, response_format) = match prompt.response_format {
            ResponseFormat::Text => (prompt.system, None),
            ResponseFormat::Json => (
                Some(prompt.system.unwrap_or_default() + "\nRespond with a JSON object only."),
                Some("json_object"),
            ),
            ResponseFormat::JsonSchema(schema) => (
                Some(format!(
                    "{}\nRespond with a JSON object matching this JSON schema:\n{}",
                    prompt.system.unwrap_or_default(),
                    schema
                )),
                Some("json_object"),
            ),
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: MessageContent::Text(system.trim_start().to_string()),
            });
        }

        let (model, content) = match media {
            Some(media) => (
                self.vision_model.clone(),
                MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: prompt.prompt,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: media.data_url(),
                        },
                    },
                ]),
            ),
            None => (self.text_model.clone(), MessageContent::Text(prompt.prompt)),
        };
        messages.push(ChatMessage {
            role: "user".to_string(),
            content,
        });

        ChatRequest {
            model,
            messages,
            temperature: prompt.temperature,
            response_format: response_format.map(|t| ResponseFormatRequest {
                format_type: t.to_string(),
            }),
        }
    }

    async fn complete(&self, request: ChatRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Groq API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Groq response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GroqLLMClient {
    async fn generate_with_text(&self, prompt: LlmPrompt) -> Result<String, CoreError> {
        let request = self.build_request(prompt, None);
        self.complete(request).await
    }

    async fn generate_with_media(
        &self,
        prompt: LlmPrompt,
        media: InlineMedia,
    ) -> Result<String, CoreError> {
        if !media.is_image() {
            return Err(CoreError::Invalid(format!(
                "{} input is not supported by the chat model",
                media.mime_type
            )));
        }
        let request = self.build_request(prompt, Some(media));
        self.complete(request).await
    }
}
