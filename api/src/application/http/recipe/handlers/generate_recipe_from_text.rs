use axum::extract::State;
use nutriwise_core::domain::recipe::{entities::GeneratedRecipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeFromTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeResponse {
    pub data: GeneratedRecipe,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "recipe",
    summary = "Recipe from ingredients",
    description = "Generates a short structured recipe from a list of ingredients, optionally with a generated picture of the dish.",
    request_body = GenerateRecipeFromTextValidator,
    responses(
        (status = 200, body = RecipeResponse),
        (status = 502, description = "Model provider failed")
    ),
)]
pub async fn generate_recipe_from_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeFromTextValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_from_text(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
