use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, json_extract::extract_json, services::Service},
    llm::{
        ports::{ImageGenerator, LLMClient, WebSearchClient},
        value_objects::{GeneratedImage, LlmPrompt},
    },
    profile::ports::ProfileRepository,
    recipe::{
        audio::prepare_audio,
        entities::{GeneratedRecipe, RecipeNameResponse, RecipeSource},
        helpers::{fallback_recipe_name, recipe_head},
        ports::RecipeService,
        prompts::{
            IMAGE_RECIPE_PROMPT, MEDIA_RECIPE_PROMPT, TEXT_RECIPE_SYSTEM_PROMPT,
            recipe_image_prompt, recipe_name_prompt,
        },
        value_objects::{
            GenerateRecipeFromImageInput, GenerateRecipeFromTextInput,
            GenerateRecipeFromVoiceInput,
        },
    },
};

const DEFAULT_RECIPE_NAME: &str = "Recipe";

impl<P, LLM, IG, WS> Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    async fn finish_recipe(
        &self,
        content: String,
        source: RecipeSource,
        generate_image: bool,
    ) -> Result<GeneratedRecipe, CoreError> {
        if content.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Failed to generate recipe".to_string(),
            ));
        }

        let recipe_name = self.extract_recipe_name(content.clone()).await;

        let image = if generate_image {
            match self.generate_recipe_image(recipe_name.clone()).await {
                Ok(image) => Some(image),
                Err(e) => {
                    warn!("Could not generate recipe image: {}", e);
                    None
                }
            }
        } else {
            None
        };

        info!(recipe = %recipe_name, ?source, "recipe generated");
        Ok(GeneratedRecipe::new(recipe_name, content, source, image))
    }
}

impl<P, LLM, IG, WS> RecipeService for Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    #[instrument(skip(self, input))]
    async fn generate_from_text(
        &self,
        input: GenerateRecipeFromTextInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        let text = input.text_input.trim();
        if text.is_empty() {
            return Err(CoreError::Invalid("ingredients are required".to_string()));
        }

        let prompt = LlmPrompt::new(text).with_system(TEXT_RECIPE_SYSTEM_PROMPT);
        let content = self.llm_client.generate_with_text(prompt).await?;

        self.finish_recipe(content, RecipeSource::Text, input.generate_image)
            .await
    }

    #[instrument(skip(self, input), fields(mime_type = %input.audio.mime_type))]
    async fn generate_from_voice(
        &self,
        input: GenerateRecipeFromVoiceInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        let audio = prepare_audio(input.audio)?;

        let content = self
            .llm_client
            .generate_with_media(LlmPrompt::new(MEDIA_RECIPE_PROMPT), audio)
            .await?;

        self.finish_recipe(content, RecipeSource::Voice, input.generate_image)
            .await
    }

    #[instrument(skip(self, input), fields(mime_type = %input.image.mime_type))]
    async fn generate_from_image(
        &self,
        input: GenerateRecipeFromImageInput,
    ) -> Result<GeneratedRecipe, CoreError> {
        if input.image.data.is_empty() || !input.image.is_image() {
            return Err(CoreError::Invalid("a png or jpeg image is required".to_string()));
        }

        let content = self
            .chat_client
            .generate_with_media(LlmPrompt::new(IMAGE_RECIPE_PROMPT), input.image)
            .await?;

        self.finish_recipe(content, RecipeSource::Image, false).await
    }

    async fn generate_recipe_image(&self, recipe_name: String) -> Result<GeneratedImage, CoreError> {
        let recipe_name = recipe_name.trim();
        if recipe_name.is_empty() {
            return Err(CoreError::Invalid("recipe_name is required".to_string()));
        }

        self.image_generator
            .generate_image(recipe_image_prompt(recipe_name))
            .await
    }

    async fn extract_recipe_name(&self, content: String) -> String {
        let prompt = LlmPrompt::new(recipe_name_prompt(&recipe_head(&content))).json();

        let extracted = match self.llm_client.generate_with_text(prompt).await {
            Ok(raw) => extract_json::<RecipeNameResponse>(&raw)
                .map(|r| r.recipe_name.trim().to_string())
                .ok()
                .filter(|name| !name.is_empty()),
            Err(e) => {
                warn!("Recipe name extraction failed: {}", e);
                None
            }
        };

        extracted
            .or_else(|| fallback_recipe_name(&content))
            .unwrap_or_else(|| DEFAULT_RECIPE_NAME.to_string())
    }
}
