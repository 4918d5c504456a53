use nutriwise_core::domain::profile::{
    entities::{ActivityLevel, SeverityLevel, Sex},
    value_objects::SaveProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveProfileValidator {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,

    pub sex: Sex,

    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,

    #[serde(default)]
    pub allergies: Vec<String>,

    /// Comma-separated allergies not in the predefined list
    #[serde(default)]
    pub custom_allergies: Option<String>,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub severity_level: Option<SeverityLevel>,

    #[validate(range(
        min = 1000,
        max = 5000,
        message = "calorie_target must be between 1000 and 5000"
    ))]
    pub calorie_target: Option<u32>,

    #[validate(range(min = 10, max = 200, message = "protein_target must be between 10 and 200"))]
    pub protein_target: Option<u32>,

    #[validate(range(min = 20, max = 150, message = "fat_target must be between 20 and 150"))]
    pub fat_target: Option<u32>,

    #[validate(range(min = 100, max = 600, message = "carb_target must be between 100 and 600"))]
    pub carb_target: Option<u32>,
}

impl From<SaveProfileValidator> for SaveProfileInput {
    fn from(payload: SaveProfileValidator) -> Self {
        SaveProfileInput {
            name: payload.name,
            age: payload.age,
            sex: payload.sex,
            activity_level: payload.activity_level,
            allergies: payload.allergies,
            custom_allergies: payload.custom_allergies,
            dietary_restrictions: payload.dietary_restrictions,
            severity_level: payload.severity_level,
            calorie_target: payload.calorie_target,
            protein_target: payload.protein_target,
            fat_target: payload.fat_target,
            carb_target: payload.carb_target,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct RecommendedNutritionParams {
    #[schema(example = 30)]
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,
    pub sex: Sex,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NutritionTargetsParams {
    /// Profile whose targets are returned; defaults apply when absent
    pub profile_name: Option<String>,
}
