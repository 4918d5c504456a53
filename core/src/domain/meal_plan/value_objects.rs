#[derive(Debug, Clone)]
pub struct GenerateMealPlanInput {
    pub profile_name: String,
}
