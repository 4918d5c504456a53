use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeNutrientsValidator {
    /// Comma-separated food items, e.g. "apple, boiled potato"
    #[validate(length(
        min = 1,
        max = 2000,
        message = "query must be between 1 and 2000 characters"
    ))]
    pub query: String,
}
