pub mod health;
pub mod meal_plan;
pub mod nutrient;
pub mod profile;
pub mod recipe;
pub mod risk_analysis;
pub mod server;
pub mod upload;
