pub mod common;
pub mod llm;
pub mod meal_plan;
pub mod nutrient;
pub mod profile;
pub mod recipe;
pub mod risk_analysis;
