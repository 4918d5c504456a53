use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        ports::{ImageGenerator, LLMClient},
        value_objects::{GeneratedImage, InlineMedia, LlmPrompt, ResponseFormat},
    },
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartResponse {
    text: Option<String>,
    inline_data: Option<InlineDataResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataResponse {
    mime_type: String,
    data: String,
}

impl GeminiResponse {
    fn into_parts(self) -> Result<Vec<PartResponse>, CoreError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            tracing::warn!("Gemini blocked the prompt: {}", reason);
            return Err(CoreError::ExternalServiceError(format!(
                "Response was blocked: {}",
                reason
            )));
        }

        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn text_of(parts: &[PartResponse]) -> String {
    parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .concat()
}

fn generation_config(prompt: &LlmPrompt) -> Option<GenerationConfig> {
    let (response_mime_type, response_schema) = match &prompt.response_format {
        ResponseFormat::Text => (None, None),
        ResponseFormat::Json => (Some("application/json".to_string()), None),
        ResponseFormat::JsonSchema(schema) => {
            (Some("application/json".to_string()), Some(schema.clone()))
        }
    };

    if prompt.temperature.is_none() && response_mime_type.is_none() {
        return None;
    }

    Some(GenerationConfig {
        temperature: prompt.temperature,
        response_mime_type,
        response_schema,
        response_modalities: None,
    })
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: GEMINI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(prompt: LlmPrompt, media: Option<InlineMedia>) -> GeminiRequest {
        let generation_config = generation_config(&prompt);
        let mut parts = vec![Part::Text {
            text: prompt.prompt,
        }];
        if let Some(media) = media {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    data: media.to_base64(),
                    mime_type: media.mime_type,
                },
            });
        }

        GeminiRequest {
            contents: vec![Content { parts }],
            system_instruction: prompt.system.map(|text| Content {
                parts: vec![Part::Text { text }],
            }),
            generation_config,
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }

    async fn generate(
        &self,
        prompt: LlmPrompt,
        media: Option<InlineMedia>,
    ) -> Result<String, CoreError> {
        let request = Self::build_request(prompt, media);
        let parts = self.call_gemini_api(request).await?.into_parts()?;
        Ok(text_of(&parts))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(&self, prompt: LlmPrompt) -> Result<String, CoreError> {
        self.generate(prompt, None).await
    }

    async fn generate_with_media(
        &self,
        prompt: LlmPrompt,
        media: InlineMedia,
    ) -> Result<String, CoreError> {
        self.generate(prompt, Some(media)).await
    }
}

/// Gemini model able to answer with inline image parts
#[derive(Debug, Clone)]
pub struct GeminiImageGenerator {
    client: GeminiLLMClient,
}

impl GeminiImageGenerator {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            client: GeminiLLMClient::new(api_key, model_name),
        }
    }
}

impl ImageGenerator for GeminiImageGenerator {
    async fn generate_image(&self, prompt: String) -> Result<GeneratedImage, CoreError> {
        let mut request = GeminiLLMClient::build_request(LlmPrompt::new(prompt), None);
        request.generation_config = Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            ..Default::default()
        });

        let parts = self.client.call_gemini_api(request).await?.into_parts()?;
        let caption = Some(text_of(&parts)).filter(|t| !t.trim().is_empty());

        parts
            .into_iter()
            .find_map(|p| p.inline_data)
            .map(|image| GeneratedImage {
                mime_type: image.mime_type,
                data: image.data,
                caption,
            })
            .ok_or_else(|| {
                CoreError::ExternalServiceError("Image model returned no image".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_carries_system_schema_and_media() {
        let prompt = LlmPrompt::new("what is this?")
            .with_system("be brief")
            .with_schema(json!({"type": "object"}))
            .with_temperature(0.1);
        let request = GeminiLLMClient::build_request(
            prompt,
            Some(InlineMedia::new("image/png", vec![1, 2, 3])),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "be brief");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "what is this?");
        assert_eq!(
            body["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(body["contents"][0]["parts"][1]["inline_data"]["data"], "AQID");
        assert_eq!(
            body["generation_config"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(body["generation_config"]["response_schema"]["type"], "object");
        assert!(body["generation_config"].get("response_modalities").is_none());
    }

    #[test]
    fn test_plain_prompt_has_no_generation_config() {
        let request = GeminiLLMClient::build_request(LlmPrompt::new("hi"), None);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("generation_config").is_none());
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn test_response_text_and_image_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is "},
                        {"text": "your dish"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                }
            }]
        }))
        .unwrap();

        let parts = response.into_parts().unwrap();
        assert_eq!(text_of(&parts), "Here is your dish");
        assert!(parts.iter().any(|p| p.inline_data.is_some()));
    }

    #[test]
    fn test_blocked_prompt_is_an_error() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        let err = response.into_parts().unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(msg) if msg.contains("SAFETY")));
    }
}
