use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::value_objects::GeneratedImage,
    recipe::{
        entities::GeneratedRecipe,
        value_objects::{
            GenerateRecipeFromImageInput, GenerateRecipeFromTextInput,
            GenerateRecipeFromVoiceInput,
        },
    },
};

pub trait RecipeService: Send + Sync {
    fn generate_from_text(
        &self,
        input: GenerateRecipeFromTextInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn generate_from_voice(
        &self,
        input: GenerateRecipeFromVoiceInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    /// Image input never triggers image generation
    fn generate_from_image(
        &self,
        input: GenerateRecipeFromImageInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn generate_recipe_image(
        &self,
        recipe_name: String,
    ) -> impl Future<Output = Result<GeneratedImage, CoreError>> + Send;

    /// Never fails: falls back to the first heading, then to "Recipe"
    fn extract_recipe_name(&self, content: String) -> impl Future<Output = String> + Send;
}
