use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::nutrition::recommended_nutrition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "lightly active",
            ActivityLevel::Moderate => "moderately active",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Mild,
    #[default]
    Moderate,
    Severe,
}

/// Daily calorie (kcal) and macro (g) targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTargets {
    pub calories: u32,
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
}

impl Default for NutritionTargets {
    /// Targets used when no profile is selected
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 50,
            fat: 65,
            carbs: 300,
        }
    }
}

/// A user profile, stored in the profile file keyed by `name`.
///
/// Targets are optional in storage so that hand-edited records without them
/// stay readable; `targets()` fills the gaps from the recommendation tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub severity_level: SeverityLevel,
    #[serde(default)]
    pub calorie_target: Option<u32>,
    #[serde(default)]
    pub protein_target: Option<u32>,
    #[serde(default)]
    pub fat_target: Option<u32>,
    #[serde(default)]
    pub carb_target: Option<u32>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: String, age: u32, sex: Sex) -> Self {
        let now = Utc::now();

        Self {
            name,
            age,
            sex,
            activity_level: ActivityLevel::default(),
            allergies: Vec::new(),
            dietary_restrictions: Vec::new(),
            severity_level: SeverityLevel::default(),
            calorie_target: None,
            protein_target: None,
            fat_target: None,
            carb_target: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_targets(mut self, targets: NutritionTargets) -> Self {
        self.calorie_target = Some(targets.calories);
        self.protein_target = Some(targets.protein);
        self.fat_target = Some(targets.fat);
        self.carb_target = Some(targets.carbs);
        self
    }

    pub fn targets(&self) -> NutritionTargets {
        let recommended = recommended_nutrition(self.age, self.sex);

        NutritionTargets {
            calories: self.calorie_target.unwrap_or(recommended.calories),
            protein: self.protein_target.unwrap_or(recommended.protein),
            fat: self.fat_target.unwrap_or(recommended.fat),
            carbs: self.carb_target.unwrap_or(recommended.carbs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_fall_back_to_recommendation() {
        let mut profile = UserProfile::new("asha".to_string(), 30, Sex::Female);
        profile.protein_target = Some(80);

        let targets = profile.targets();
        assert_eq!(targets.calories, 1800);
        assert_eq!(targets.protein, 80);
        assert_eq!(targets.fat, 55);
        assert_eq!(targets.carbs, 400);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "ravi", "age": 40, "sex": "male"}"#).unwrap();
        assert_eq!(profile.severity_level, SeverityLevel::Moderate);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.calorie_target, None);
    }
}
