pub mod generate_meal_plan;
pub mod generate_meal_plan_markdown;
