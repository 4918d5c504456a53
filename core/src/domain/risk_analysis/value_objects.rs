use crate::domain::{llm::value_objects::InlineMedia, profile::value_objects::AllergySource};

pub struct AnalyzeLabelImageInput {
    pub image: InlineMedia,
    pub allergies: AllergySource,
}

pub struct AnalyzeLabelTextInput {
    pub text_input: String,
    pub allergies: AllergySource,
}
