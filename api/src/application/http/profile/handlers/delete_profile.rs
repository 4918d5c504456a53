use axum::extract::{Path, State};
use nutriwise_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProfileResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{name}",
    tag = "profile",
    summary = "Delete profile",
    params(
        ("name" = String, Path, description = "Profile name"),
    ),
    responses(
        (status = 200, body = DeleteProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn delete_profile(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    state
        .service
        .delete_profile(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProfileResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
