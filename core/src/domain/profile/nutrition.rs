use std::ops::RangeInclusive;

use crate::domain::profile::entities::{NutritionTargets, Sex};

pub const AGE_RANGE: RangeInclusive<u32> = 1..=120;
pub const CALORIE_RANGE: RangeInclusive<u32> = 1000..=5000;
pub const PROTEIN_RANGE: RangeInclusive<u32> = 10..=200;
pub const FAT_RANGE: RangeInclusive<u32> = 20..=150;
pub const CARB_RANGE: RangeInclusive<u32> = 100..=600;

/// Recommended daily targets for an age and sex.
///
/// The calorie, fat and carb tables start at age 2; a one year old falls
/// through to the last band of each.
pub fn recommended_nutrition(age: u32, sex: Sex) -> NutritionTargets {
    let male = sex == Sex::Male;
    let pick = |m: u32, f: u32| if male { m } else { f };

    let calories = match age {
        2..=6 => pick(1200, 1100),
        7..=18 => pick(1700, 1500),
        19..=60 => pick(2400, 1800),
        _ => pick(2000, 1600),
    };

    let protein = match age {
        0..=3 => 13,
        4..=8 => 19,
        9..=13 => 34,
        14..=18 => pick(52, 46),
        _ => pick(56, 46),
    };

    let fat = match age {
        2..=6 => pick(47, 43),
        7..=18 => pick(57, 50),
        19..=60 => pick(73, 55),
        _ => pick(61, 49),
    };

    let carbs = match age {
        2..=5 => 250,
        6..=9 => 350,
        _ => 400,
    };

    NutritionTargets {
        calories,
        protein,
        fat,
        carbs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_male() {
        let targets = recommended_nutrition(25, Sex::Male);
        assert_eq!(
            targets,
            NutritionTargets {
                calories: 2400,
                protein: 56,
                fat: 73,
                carbs: 400
            }
        );
    }

    #[test]
    fn test_senior_female() {
        let targets = recommended_nutrition(70, Sex::Female);
        assert_eq!(
            targets,
            NutritionTargets {
                calories: 1600,
                protein: 46,
                fat: 49,
                carbs: 400
            }
        );
    }

    #[test]
    fn test_teenager_bands() {
        let boy = recommended_nutrition(15, Sex::Male);
        assert_eq!(boy.calories, 1700);
        assert_eq!(boy.protein, 52);
        assert_eq!(boy.fat, 57);

        let girl = recommended_nutrition(12, Sex::Female);
        assert_eq!(girl.protein, 34);
        assert_eq!(girl.fat, 50);
    }

    #[test]
    fn test_one_year_old_falls_through_to_last_bands() {
        let targets = recommended_nutrition(1, Sex::Male);
        assert_eq!(
            targets,
            NutritionTargets {
                calories: 2000,
                protein: 13,
                fat: 61,
                carbs: 400
            }
        );

        let targets = recommended_nutrition(1, Sex::Female);
        assert_eq!(targets.calories, 1600);
        assert_eq!(targets.fat, 49);
    }

    #[test]
    fn test_toddler_band() {
        let targets = recommended_nutrition(2, Sex::Female);
        assert_eq!(targets.calories, 1100);
        assert_eq!(targets.protein, 13);
        assert_eq!(targets.fat, 43);
        assert_eq!(targets.carbs, 250);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(recommended_nutrition(60, Sex::Male).calories, 2400);
        assert_eq!(recommended_nutrition(61, Sex::Male).calories, 2000);
        assert_eq!(recommended_nutrition(9, Sex::Male).carbs, 350);
        assert_eq!(recommended_nutrition(10, Sex::Male).carbs, 400);
    }
}
