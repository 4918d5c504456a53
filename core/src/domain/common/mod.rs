use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod json_extract;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriwiseConfig {
    pub llm: LLMConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_image_model: String,
    /// When absent, the chat role is served by Gemini as well.
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub groq_model: String,
    pub groq_vision_model: String,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub exa_api_key: Option<String>,
    pub max_results: u32,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub profile_file: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
