use nutriwise_core::domain::meal_plan::value_objects::GenerateMealPlanInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMealPlanValidator {
    #[validate(length(min = 1, max = 100, message = "profile_name is required"))]
    pub profile_name: String,
}

impl From<GenerateMealPlanValidator> for GenerateMealPlanInput {
    fn from(payload: GenerateMealPlanValidator) -> Self {
        GenerateMealPlanInput {
            profile_name: payload.profile_name,
        }
    }
}
