pub mod delete_profile;
pub mod get_nutrition_targets;
pub mod get_profile;
pub mod get_profiles;
pub mod get_recommended_nutrition;
pub mod save_profile;
