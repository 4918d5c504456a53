use crate::domain::{
    meal_plan::entities::{MealBudget, MealSlot},
    profile::entities::NutritionTargets,
};

/// Splits daily targets across the meal slots with their fixed shares
pub fn split_targets(targets: &NutritionTargets) -> Vec<MealBudget> {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let share = slot.share();
            MealBudget {
                slot,
                share,
                calories: f64::from(targets.calories) * share,
                protein: f64::from(targets.protein) * share,
                fat: f64::from(targets.fat) * share,
                carbs: f64::from(targets.carbs) * share,
            }
        })
        .collect()
}
