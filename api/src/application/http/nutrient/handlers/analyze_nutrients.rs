use axum::extract::State;
use nutriwise_core::domain::nutrient::{entities::NutrientReport, ports::NutrientService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrient::validators::AnalyzeNutrientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NutrientReportResponse {
    pub data: NutrientReport,
}

#[utoipa::path(
    post,
    path = "",
    tag = "nutrient",
    summary = "Nutrient table for food items",
    description = "Returns calories, macros, sugar, fibre and key minerals per item, grounded by web search when configured.",
    request_body = AnalyzeNutrientsValidator,
    responses(
        (status = 200, body = NutrientReportResponse),
        (status = 502, description = "Model provider failed")
    ),
)]
pub async fn analyze_nutrients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeNutrientsValidator>,
) -> Result<Response<NutrientReportResponse>, ApiError> {
    let report = state
        .service
        .analyze_nutrients(payload.query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NutrientReportResponse { data: report }))
}
