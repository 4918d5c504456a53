use axum::extract::{Path, State};
use nutriwise_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "profile",
    summary = "Get profile",
    params(
        ("name" = String, Path, description = "Profile name"),
    ),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn get_profile(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
