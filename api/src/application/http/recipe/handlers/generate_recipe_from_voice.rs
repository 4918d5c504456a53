use axum::extract::{Multipart, State};
use nutriwise_core::domain::recipe::{
    ports::RecipeService, value_objects::GenerateRecipeFromVoiceInput,
};

use crate::application::http::{
    recipe::{handlers::generate_recipe_from_text::RecipeResponse, validators::VoiceRecipeForm},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::UploadForm,
};

#[utoipa::path(
    post,
    path = "/voice",
    tag = "recipe",
    summary = "Recipe from a voice request",
    description = "Sends the recorded request to the multimodal model. Raw PCM is wrapped in a WAV container first.",
    request_body(content = VoiceRecipeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, description = "Missing or unsupported audio")
    ),
)]
pub async fn generate_recipe_from_voice(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<RecipeResponse>, ApiError> {
    let mut form = UploadForm::read(multipart, &["audio"]).await?;
    let audio = form.take_file("audio")?;
    let generate_image = form.flag("generate_image")?;

    let recipe = state
        .service
        .generate_from_voice(GenerateRecipeFromVoiceInput {
            audio,
            generate_image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
