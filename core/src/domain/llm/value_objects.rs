use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Expected shape of a model reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
    JsonSchema(serde_json::Value),
}

/// A single prompt sent to a hosted model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmPrompt {
    pub system: Option<String>,
    pub prompt: String,
    pub response_format: ResponseFormat,
    pub temperature: Option<f32>,
}

impl LlmPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn json(mut self) -> Self {
        self.response_format = ResponseFormat::Json;
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_format = ResponseFormat::JsonSchema(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn expects_json(&self) -> bool {
        !matches!(self.response_format, ResponseFormat::Text)
    }
}

/// Binary payload (image or audio) sent inline with a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMedia {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl InlineMedia {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64 encoded image bytes
    pub data: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let media = InlineMedia::new("image/png", vec![1, 2, 3]);
        assert_eq!(media.data_url(), "data:image/png;base64,AQID");
        assert!(media.is_image());
        assert!(!media.is_audio());
    }

    #[test]
    fn test_prompt_builder() {
        let prompt = LlmPrompt::new("hi").with_system("sys").json().with_temperature(0.1);
        assert_eq!(prompt.system.as_deref(), Some("sys"));
        assert!(prompt.expects_json());
        assert_eq!(prompt.temperature, Some(0.1));
        assert!(!LlmPrompt::new("plain").expects_json());
    }
}
