use axum::{
    Json,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use nutriwise_core::domain::meal_plan::entities::{DailyMealPlan, MEAL_PLAN_FILE_NAME};

#[utoipa::path(
    post,
    path = "/markdown",
    tag = "meal-plan",
    summary = "Download daily meal plan",
    description = "Renders an already generated plan as a Markdown attachment. No model call is made.",
    request_body = DailyMealPlan,
    responses(
        (status = 200, content_type = "text/markdown", body = String),
        (status = 422, description = "Body is not a meal plan")
    ),
)]
pub async fn generate_meal_plan_markdown(Json(plan): Json<DailyMealPlan>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", MEAL_PLAN_FILE_NAME),
            ),
        ],
        plan.to_markdown(),
    )
}
