use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::DailyMealPlan, value_objects::GenerateMealPlanInput},
};

pub trait MealPlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<DailyMealPlan, CoreError>> + Send;
}
