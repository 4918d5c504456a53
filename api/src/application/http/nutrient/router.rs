use super::handlers::analyze_nutrients::{__path_analyze_nutrients, analyze_nutrients};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_nutrients))]
pub struct NutrientApiDoc;

pub fn nutrient_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/nutrients", state.args.server.root_path),
        post(analyze_nutrients),
    )
}
