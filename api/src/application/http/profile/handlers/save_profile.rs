use axum::extract::State;
use nutriwise_core::domain::profile::ports::ProfileService;

use crate::application::http::{
    profile::{handlers::get_profile::ProfileResponse, validators::SaveProfileValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "profile",
    summary = "Save profile",
    description = "Creates the profile, or overwrites the one stored under the same name. Missing targets are filled from the recommended tables.",
    request_body = SaveProfileValidator,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 422, description = "Validation failed")
    ),
)]
pub async fn save_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SaveProfileValidator>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .save_profile(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
