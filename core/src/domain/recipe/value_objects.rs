use crate::domain::llm::value_objects::InlineMedia;

#[derive(Debug, Clone)]
pub struct GenerateRecipeFromTextInput {
    pub text_input: String,
    pub generate_image: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeFromVoiceInput {
    pub audio: InlineMedia,
    pub generate_image: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipeFromImageInput {
    pub image: InlineMedia,
}
