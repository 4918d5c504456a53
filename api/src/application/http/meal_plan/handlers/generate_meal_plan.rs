use axum::extract::State;
use nutriwise_core::domain::meal_plan::{entities::DailyMealPlan, ports::MealPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::GenerateMealPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealPlanResponse {
    pub data: DailyMealPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Generate daily meal plan",
    description = "Splits the profile's daily targets across breakfast, lunch, dinner and snack and asks the chat model for recipes per slot.",
    request_body = GenerateMealPlanValidator,
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 404, description = "Profile not found"),
        (status = 502, description = "Model provider failed")
    ),
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MealPlanResponse { data: plan }))
}
