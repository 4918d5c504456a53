use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use nutriwise_core::{application::create_service, domain::common::NutriwiseConfig};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    application::http::{
        health::health_routes,
        meal_plan::router::meal_plan_routes,
        nutrient::router::nutrient_routes,
        profile::router::profile_routes,
        recipe::router::recipe_routes,
        risk_analysis::router::risk_analysis_routes,
        server::{app_state::AppState, openapi::ApiDoc},
        upload::MAX_UPLOAD_SIZE,
    },
    args::Args,
};

/// Multipart framing overhead allowed on top of the file itself
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriwiseConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([ACCEPT, CONTENT_TYPE, CONTENT_LENGTH])
        .expose_headers([CONTENT_DISPOSITION])
        .allow_credentials(true);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(health_routes(&root_path))
        .merge(profile_routes(state.clone()))
        .merge(meal_plan_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(risk_analysis_routes(state.clone()))
        .merge(nutrient_routes(state.clone()));

    if state.args.server.metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    // The frontend uses relative URLs, so it lives under the same root as the API
    let frontend = ServeDir::new(&state.args.server.frontend_dir);
    router = if root_path.is_empty() {
        router.fallback_service(frontend)
    } else {
        router.nest_service(&root_path, frontend)
    };

    let router = router
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + BODY_LIMIT_SLACK))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
