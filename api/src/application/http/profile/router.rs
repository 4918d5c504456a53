use super::handlers::{
    delete_profile::{__path_delete_profile, delete_profile},
    get_nutrition_targets::{__path_get_nutrition_targets, get_nutrition_targets},
    get_profile::{__path_get_profile, get_profile},
    get_profiles::{__path_get_profiles, get_profiles},
    get_recommended_nutrition::{__path_get_recommended_nutrition, get_recommended_nutrition},
    save_profile::{__path_save_profile, save_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profiles, get_profile, save_profile, delete_profile))]
pub struct ProfileApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_recommended_nutrition, get_nutrition_targets))]
pub struct NutritionApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            get(get_profiles),
        )
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            post(save_profile),
        )
        .route(
            &format!("{}/profiles/{{name}}", state.args.server.root_path),
            get(get_profile),
        )
        .route(
            &format!("{}/profiles/{{name}}", state.args.server.root_path),
            delete(delete_profile),
        )
        .route(
            &format!("{}/nutrition/recommended", state.args.server.root_path),
            get(get_recommended_nutrition),
        )
        .route(
            &format!("{}/nutrition/targets", state.args.server.root_path),
            get(get_nutrition_targets),
        )
}
