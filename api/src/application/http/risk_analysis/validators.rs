use nutriwise_core::domain::{
    profile::value_objects::AllergySource, risk_analysis::value_objects::AnalyzeLabelTextInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeLabelTextValidator {
    /// Ingredient list as printed on the package
    #[validate(length(
        min = 1,
        max = 20000,
        message = "text_input must be between 1 and 20000 characters"
    ))]
    pub text_input: String,

    /// Profile whose allergies are checked
    #[serde(default)]
    pub profile_name: Option<String>,

    /// Extra allergies checked in addition to the profile's
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl From<AnalyzeLabelTextValidator> for AnalyzeLabelTextInput {
    fn from(payload: AnalyzeLabelTextValidator) -> Self {
        AnalyzeLabelTextInput {
            text_input: payload.text_input,
            allergies: AllergySource {
                profile_name: payload.profile_name,
                allergies: payload.allergies,
            },
        }
    }
}

/// Multipart body of the label image route
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeLabelImageForm {
    /// Photo of the ingredient list (png or jpeg)
    #[schema(format = Binary, value_type = String)]
    pub image: Vec<u8>,
    pub profile_name: Option<String>,
    /// Comma-separated allergies
    pub allergies: Option<String>,
}
