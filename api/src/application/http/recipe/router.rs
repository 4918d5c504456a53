use super::handlers::{
    generate_recipe_from_image::{__path_generate_recipe_from_image, generate_recipe_from_image},
    generate_recipe_from_text::{__path_generate_recipe_from_text, generate_recipe_from_text},
    generate_recipe_from_voice::{__path_generate_recipe_from_voice, generate_recipe_from_voice},
    visualize_recipe::{__path_visualize_recipe, visualize_recipe},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_recipe_from_text,
    generate_recipe_from_voice,
    generate_recipe_from_image,
    visualize_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/text", state.args.server.root_path),
            post(generate_recipe_from_text),
        )
        .route(
            &format!("{}/recipes/voice", state.args.server.root_path),
            post(generate_recipe_from_voice),
        )
        .route(
            &format!("{}/recipes/image", state.args.server.root_path),
            post(generate_recipe_from_image),
        )
        .route(
            &format!("{}/recipes/visualize", state.args.server.root_path),
            post(visualize_recipe),
        )
}
