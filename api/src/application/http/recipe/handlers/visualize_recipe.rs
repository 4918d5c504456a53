use axum::extract::State;
use nutriwise_core::domain::{llm::value_objects::GeneratedImage, recipe::ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::VisualizeRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeImageResponse {
    pub data: GeneratedImage,
}

#[utoipa::path(
    post,
    path = "/visualize",
    tag = "recipe",
    summary = "Picture of a dish",
    description = "Generates an image of the named recipe with the image-generation model.",
    request_body = VisualizeRecipeValidator,
    responses(
        (status = 200, body = RecipeImageResponse),
        (status = 502, description = "Image model failed")
    ),
)]
pub async fn visualize_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<VisualizeRecipeValidator>,
) -> Result<Response<RecipeImageResponse>, ApiError> {
    let image = state
        .service
        .generate_recipe_image(payload.recipe_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeImageResponse { data: image }))
}
