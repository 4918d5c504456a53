use std::{net::IpAddr, path::PathBuf};

use clap::{ArgAction, Parser};
use nutriwise_core::domain::common::{LLMConfig, NutriwiseConfig, SearchConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriwise", version, about = "NutriWise AI nutrition assistant")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api"
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,

    /// Directory of the static browser frontend
    #[arg(long, env = "FRONTEND_DIR", default_value = "frontend")]
    pub frontend_dir: PathBuf,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Accepted when GEMINI_API_KEY is not set
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_IMAGE_MODEL",
        default_value = "gemini-2.0-flash-preview-image-generation"
    )]
    pub gemini_image_model: String,

    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    #[arg(long, env = "GROQ_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub groq_base_url: String,

    #[arg(long, env = "GROQ_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub groq_model: String,

    #[arg(
        long,
        env = "GROQ_VISION_MODEL",
        default_value = "meta-llama/llama-4-scout-17b-16e-instruct"
    )]
    pub groq_vision_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    #[arg(long, env = "EXA_API_KEY", hide_env_values = true)]
    pub exa_api_key: Option<String>,

    #[arg(long, env = "SEARCH_MAX_RESULTS", default_value_t = 3)]
    pub search_max_results: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "PROFILE_FILE", default_value = "user_profiles.json")]
    pub profile_file: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for NutriwiseConfig {
    fn from(args: Args) -> Self {
        let gemini_api_key = args
            .llm
            .gemini_api_key
            .filter(|k| !k.trim().is_empty())
            .or(args.llm.google_api_key)
            .unwrap_or_default();

        NutriwiseConfig {
            llm: LLMConfig {
                gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_image_model: args.llm.gemini_image_model,
                groq_api_key: args.llm.groq_api_key,
                groq_base_url: args.llm.groq_base_url,
                groq_model: args.llm.groq_model,
                groq_vision_model: args.llm.groq_vision_model,
            },
            search: SearchConfig {
                exa_api_key: args.search.exa_api_key,
                max_results: args.search.search_max_results,
            },
            storage: StorageConfig {
                profile_file: args.storage.profile_file,
            },
        }
    }
}
