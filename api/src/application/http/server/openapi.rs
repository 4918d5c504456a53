use crate::application::http::{
    health::HealthApiDoc,
    meal_plan::router::MealPlanApiDoc,
    nutrient::router::NutrientApiDoc,
    profile::router::{NutritionApiDoc, ProfileApiDoc},
    recipe::router::RecipeApiDoc,
    risk_analysis::router::RiskAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriWise API",
        description = "Profiles, meal plans, recipes, allergen risk analysis and nutrient lookup"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/risk-analysis", api = RiskAnalysisApiDoc),
        (path = "/nutrients", api = NutrientApiDoc),
    )
)]
pub struct ApiDoc;
