use std::fmt::{self, Write as _};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, profile::entities::NutritionTargets};

pub const MEAL_PLAN_FILE_NAME: &str = "Daily_Meal_Planner.md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Slots in the order they are planned
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Fraction of the daily targets allotted to this slot
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.30,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.15,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        };
        f.write_str(label)
    }
}

/// Calorie (kcal) and macro (g) budget of a single meal slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealBudget {
    pub slot: MealSlot,
    pub share: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrients {
    pub calories: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub proteins: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedRecipe {
    pub recipe_name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub nutrients: Nutrients,
}

/// Model reply for one meal slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealSuggestion {
    pub recipes: Vec<PlannedRecipe>,
    #[serde(default)]
    pub total_nutrients: Nutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub budget: MealBudget,
    pub recipes: Vec<PlannedRecipe>,
    pub total_nutrients: Nutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMealPlan {
    pub id: Uuid,
    pub profile_name: String,
    pub targets: NutritionTargets,
    pub meals: Vec<PlannedMeal>,
    pub created_at: DateTime<Utc>,
}

impl DailyMealPlan {
    pub fn new(profile_name: String, targets: NutritionTargets, meals: Vec<PlannedMeal>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            profile_name,
            targets,
            meals,
            created_at: now,
        }
    }

    /// Renders the plan as the downloadable Markdown document
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Daily Meal Plan\n\n");
        let recipes = self
            .meals
            .iter()
            .flat_map(|meal| meal.recipes.iter().map(move |r| (meal.slot, r)));

        for (i, (slot, recipe)) in recipes.enumerate() {
            let _ = write!(
                out,
                "## Recipe {} ({}): {}\n\n### Ingredients:\n",
                i + 1,
                slot,
                recipe.recipe_name
            );
            for ingredient in &recipe.ingredients {
                let _ = writeln!(
                    out,
                    "- {}: {} {}",
                    ingredient.name, ingredient.quantity, ingredient.unit
                );
            }
            let n = &recipe.nutrients;
            let _ = write!(
                out,
                "\n### Nutrition:\n- Calories: {}\n- Carbs: {}g\n- Fats: {}g\n- Proteins: {}g\n\n",
                n.calories, n.carbohydrates, n.fats, n.proteins
            );
        }

        out
    }
}
