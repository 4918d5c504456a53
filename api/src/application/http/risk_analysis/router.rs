use super::handlers::{
    analyze_label_image::{__path_analyze_label_image, analyze_label_image},
    analyze_label_text::{__path_analyze_label_text, analyze_label_text},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_label_image, analyze_label_text))]
pub struct RiskAnalysisApiDoc;

pub fn risk_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/risk-analysis/image", state.args.server.root_path),
            post(analyze_label_image),
        )
        .route(
            &format!("{}/risk-analysis/text", state.args.server.root_path),
            post(analyze_label_text),
        )
}
