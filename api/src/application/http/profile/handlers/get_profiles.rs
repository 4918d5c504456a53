use axum::extract::State;
use nutriwise_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfilesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "List profiles",
    description = "Returns the names of every stored profile, sorted.",
    responses(
        (status = 200, body = GetProfilesResponse)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let names = state
        .service
        .list_profiles()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfilesResponse { data: names }))
}
