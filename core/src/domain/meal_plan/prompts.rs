use crate::domain::{meal_plan::entities::MealBudget, profile::entities::UserProfile};

pub const MEAL_PLAN_QUESTION: &str = "what is the meal plan for me?";

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// System instructions for one meal slot
pub fn build_meal_prompt(
    budget: &MealBudget,
    profile: &UserProfile,
    planned_recipes: &[String],
) -> String {
    format!(
        "You are a nutrition planning assistant.\n\n\
         Create a {slot} meal plan matching these exact targets (±5% tolerance):\n\
         - Calories: {calories:.0} kcal\n\
         - Carbs: {carbs:.1}g\n\
         - Fats: {fat:.1}g\n\
         - Protein: {protein:.1}g\n\n\
         The user is {activity}. Dietary restrictions: {diet}.\n\n\
         EXCLUDE: {allergies}\n\
         EXCLUDE: {planned}\n\n\
         For each recipe provide:\n\
         1. Recipe name\n\
         2. Ingredients (quantities in grams/ml)\n\
         3. Macros (cal, carbs, fats, protein)\n\n\
         Requirements:\n\
         - Use common, simple ingredients only\n\
         - Must avoid all allergens completely\n\
         - Respond with a JSON object with keys `recipes` and `total_nutrients`",
        slot = budget.slot,
        calories = budget.calories,
        carbs = budget.carbs,
        fat = budget.fat,
        protein = budget.protein,
        activity = profile.activity_level,
        diet = list_or_none(&profile.dietary_restrictions),
        allergies = list_or_none(&profile.allergies),
        planned = list_or_none(planned_recipes),
    )
}
