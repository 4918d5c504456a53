use axum::extract::{Query, State};
use nutriwise_core::domain::profile::{entities::NutritionTargets, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    profile::validators::NutritionTargetsParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NutritionTargetsResponse {
    pub data: NutritionTargets,
}

#[utoipa::path(
    get,
    path = "/targets",
    tag = "profile",
    summary = "Effective daily targets",
    description = "Targets of the given profile, or the defaults (2000 kcal, 50 g protein, 65 g fat, 300 g carbs) when no profile is given.",
    params(NutritionTargetsParams),
    responses(
        (status = 200, body = NutritionTargetsResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn get_nutrition_targets(
    State(state): State<AppState>,
    Query(params): Query<NutritionTargetsParams>,
) -> Result<Response<NutritionTargetsResponse>, ApiError> {
    let profile_name = params.profile_name.filter(|name| !name.trim().is_empty());

    let targets = state
        .service
        .effective_targets(profile_name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NutritionTargetsResponse { data: targets }))
}
