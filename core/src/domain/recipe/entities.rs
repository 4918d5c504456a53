use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    llm::value_objects::GeneratedImage,
    recipe::helpers::{alternative_image_url, recipe_file_name},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Text,
    Voice,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub id: Uuid,
    pub recipe_name: String,
    /// Markdown as returned by the model: name, ingredients, steps and tips
    pub content: String,
    pub source: RecipeSource,
    pub image: Option<GeneratedImage>,
    pub alternative_image_url: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedRecipe {
    pub fn new(
        recipe_name: String,
        content: String,
        source: RecipeSource,
        image: Option<GeneratedImage>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            alternative_image_url: alternative_image_url(&recipe_name),
            file_name: recipe_file_name(&recipe_name),
            recipe_name,
            content,
            source,
            image,
            created_at: now,
        }
    }
}

/// Model reply when asked for the name of a recipe
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeNameResponse {
    pub recipe_name: String,
}
