use axum::extract::Query;
use nutriwise_core::domain::profile::{
    entities::NutritionTargets, nutrition::recommended_nutrition,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    profile::validators::RecommendedNutritionParams,
    server::api_entities::{api_error::ApiError, response::Response},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendedNutritionResponse {
    pub data: NutritionTargets,
}

#[utoipa::path(
    get,
    path = "/recommended",
    tag = "profile",
    summary = "Recommended daily targets",
    description = "Calories and macros recommended for an age and sex.",
    params(RecommendedNutritionParams),
    responses(
        (status = 200, body = RecommendedNutritionResponse)
    ),
)]
pub async fn get_recommended_nutrition(
    Query(params): Query<RecommendedNutritionParams>,
) -> Result<Response<RecommendedNutritionResponse>, ApiError> {
    params.validate()?;

    Ok(Response::OK(RecommendedNutritionResponse {
        data: recommended_nutrition(params.age, params.sex),
    }))
}
