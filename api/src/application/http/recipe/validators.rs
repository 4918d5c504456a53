use nutriwise_core::domain::recipe::value_objects::GenerateRecipeFromTextInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeFromTextValidator {
    /// Ingredients or a dish request in free text
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text_input must be between 1 and 5000 characters"
    ))]
    pub text_input: String,

    #[serde(default)]
    pub generate_image: bool,
}

impl From<GenerateRecipeFromTextValidator> for GenerateRecipeFromTextInput {
    fn from(payload: GenerateRecipeFromTextValidator) -> Self {
        GenerateRecipeFromTextInput {
            text_input: payload.text_input,
            generate_image: payload.generate_image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct VisualizeRecipeValidator {
    #[validate(length(min = 1, max = 200, message = "recipe_name is required"))]
    pub recipe_name: String,
}

/// Multipart body of the voice route
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct VoiceRecipeForm {
    /// Recorded audio: wav, mp3, ogg, webm or raw 16 kHz 16-bit mono PCM
    #[schema(format = Binary, value_type = String)]
    pub audio: Vec<u8>,
    pub generate_image: Option<bool>,
}

/// Multipart body of the image route
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageRecipeForm {
    #[schema(format = Binary, value_type = String)]
    pub image: Vec<u8>,
}
