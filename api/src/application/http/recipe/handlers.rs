pub mod generate_recipe_from_image;
pub mod generate_recipe_from_text;
pub mod generate_recipe_from_voice;
pub mod visualize_recipe;
