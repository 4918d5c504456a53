use tracing::info;

use crate::{
    domain::common::{NutriwiseConfig, services::Service},
    infrastructure::{
        llm::{GeminiImageGenerator, GeminiLLMClient, GroqLLMClient, LLMBackend},
        profile::JsonFileProfileRepository,
        search::ExaSearchClient,
    },
};

pub type NutriwiseService =
    Service<JsonFileProfileRepository, LLMBackend, GeminiImageGenerator, ExaSearchClient>;

pub async fn create_service(config: NutriwiseConfig) -> Result<NutriwiseService, anyhow::Error> {
    let llm = config.llm;
    if llm.gemini_api_key.trim().is_empty() {
        anyhow::bail!("a Gemini API key is required (GEMINI_API_KEY or GOOGLE_API_KEY)");
    }

    if let Some(parent) = config.storage.profile_file.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    let profile_repository = JsonFileProfileRepository::new(config.storage.profile_file);

    let gemini = GeminiLLMClient::new(llm.gemini_api_key.clone(), llm.gemini_model.clone());
    let chat_client = match llm.groq_api_key.filter(|k| !k.trim().is_empty()) {
        Some(groq_api_key) => {
            info!(model = %llm.groq_model, "chat model served by Groq");
            LLMBackend::Groq(GroqLLMClient::new(
                groq_api_key,
                llm.groq_base_url,
                llm.groq_model,
                llm.groq_vision_model,
            ))
        }
        None => {
            info!(model = %llm.gemini_model, "no Groq key, chat model served by Gemini");
            LLMBackend::Gemini(gemini.clone())
        }
    };
    let image_generator = GeminiImageGenerator::new(llm.gemini_api_key, llm.gemini_image_model);
    let web_search = ExaSearchClient::new(config.search.exa_api_key);

    Ok(Service::new(
        profile_repository,
        LLMBackend::Gemini(gemini),
        chat_client,
        image_generator,
        web_search,
        config.search.max_results,
    ))
}
