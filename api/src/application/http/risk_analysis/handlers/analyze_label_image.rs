use axum::extract::{Multipart, State};
use nutriwise_core::domain::{
    profile::value_objects::AllergySource,
    risk_analysis::{ports::RiskAnalysisService, value_objects::AnalyzeLabelImageInput},
};

use crate::application::http::{
    risk_analysis::{
        handlers::analyze_label_text::RiskReportResponse, validators::AnalyzeLabelImageForm,
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    upload::UploadForm,
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "risk-analysis",
    summary = "Allergen risk from a label photo",
    description = "Reads the label text with the vision model, then runs the same pipeline as the text route.",
    request_body(content = AnalyzeLabelImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RiskReportResponse),
        (status = 400, description = "Missing or unsupported image"),
        (status = 422, description = "No readable text in the image")
    ),
)]
pub async fn analyze_label_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<RiskReportResponse>, ApiError> {
    let mut form = UploadForm::read(multipart, &["image"]).await?;
    let image = form.take_file("image")?;
    let allergies = AllergySource {
        profile_name: form.text("profile_name").map(str::to_string),
        allergies: form.list("allergies"),
    };

    let report = state
        .service
        .analyze_image(AnalyzeLabelImageInput { image, allergies })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RiskReportResponse { data: report }))
}
