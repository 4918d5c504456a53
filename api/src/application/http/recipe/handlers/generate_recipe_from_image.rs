use axum::extract::{Multipart, State};
use nutriwise_core::domain::recipe::{
    ports::RecipeService, value_objects::GenerateRecipeFromImageInput,
};

use crate::application::http::{
    recipe::{handlers::generate_recipe_from_text::RecipeResponse, validators::ImageRecipeForm},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::UploadForm,
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "recipe",
    summary = "Recipe from a food photo",
    description = "Identifies the dish in the photo and returns its recipe. No picture is generated for image input.",
    request_body(content = ImageRecipeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, description = "Missing or unsupported image")
    ),
)]
pub async fn generate_recipe_from_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<RecipeResponse>, ApiError> {
    let mut form = UploadForm::read(multipart, &["image"]).await?;
    let image = form.take_file("image")?;

    let recipe = state
        .service
        .generate_from_image(GenerateRecipeFromImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
