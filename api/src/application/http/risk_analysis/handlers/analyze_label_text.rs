use axum::extract::State;
use nutriwise_core::domain::risk_analysis::{entities::RiskReport, ports::RiskAnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    risk_analysis::validators::AnalyzeLabelTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RiskReportResponse {
    pub data: RiskReport,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "risk-analysis",
    summary = "Allergen risk from label text",
    description = "Extracts the ingredients, scores them against the allergies and suggests allergen-free alternatives.",
    request_body = AnalyzeLabelTextValidator,
    responses(
        (status = 200, body = RiskReportResponse),
        (status = 404, description = "Profile not found"),
        (status = 502, description = "Model provider failed")
    ),
)]
pub async fn analyze_label_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeLabelTextValidator>,
) -> Result<Response<RiskReportResponse>, ApiError> {
    let report = state
        .service
        .analyze_text(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RiskReportResponse { data: report }))
}
