use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Ingredients read off a product label, in label order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientExtraction {
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Explicit allergen statements ("Contains:", "May contain:", ...)
    #[serde(default)]
    pub contains: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            RiskLevel::High
        } else if score >= 0.5 {
            RiskLevel::Moderate
        } else if score > 0.0 {
            RiskLevel::Low
        } else {
            RiskLevel::None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientScore {
    pub ingredient: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessment {
    pub allergens_found: Vec<String>,
    /// Always within [0, 1]
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredient_scores: Vec<IngredientScore>,
}

/// Allergen profile of a suggested product; models answer with prose, a list or an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AllergenProfile {
    Text(String),
    List(Vec<String>),
    Map(BTreeMap<String, serde_json::Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeProduct {
    #[serde(alias = "product", alias = "name")]
    pub product_name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub allergen_profile: Option<AllergenProfile>,
}

/// Alternatives as parsed from the model, or its raw text when it could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Alternatives {
    Suggestions(Vec<AlternativeProduct>),
    Raw(String),
}

/// Scored assessment, or the model's raw reply when it could not be parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskOutcome {
    Assessed(RiskAssessment),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskReport {
    pub id: Uuid,
    pub extracted_text: String,
    pub allergies_checked: Vec<String>,
    pub ingredients: IngredientExtraction,
    pub risk: RiskOutcome,
    pub alternatives: Alternatives,
    pub created_at: DateTime<Utc>,
}

impl RiskReport {
    pub fn new(
        extracted_text: String,
        allergies_checked: Vec<String>,
        ingredients: IngredientExtraction,
        risk: RiskOutcome,
        alternatives: Alternatives,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            extracted_text,
            allergies_checked,
            ingredients,
            risk,
            alternatives,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::None);
        assert_eq!(RiskLevel::from_score(0.2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(0.79), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(0.8), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
    }

    #[test]
    fn test_alternative_product_accepts_loose_shapes() {
        let products: Vec<AlternativeProduct> = serde_json::from_str(
            r#"[
                {"product_name": "Oat Crunch", "reason": "nut free", "allergen_profile": "free of nuts"},
                {"product": "Rice Puffs", "allergen_profile": ["gluten-free", "dairy-free"]},
                {"name": "Seed Bar", "reason": "safe", "allergen_profile": {"nuts": "none", "milk": false}}
            ]"#,
        )
        .unwrap();

        assert_eq!(products[1].product_name, "Rice Puffs");
        assert_eq!(products[1].reason, "");
        assert!(matches!(
            products[0].allergen_profile,
            Some(AllergenProfile::Text(_))
        ));
        assert_eq!(
            products[1].allergen_profile,
            Some(AllergenProfile::List(vec![
                "gluten-free".to_string(),
                "dairy-free".to_string()
            ]))
        );
        match &products[2].allergen_profile {
            Some(AllergenProfile::Map(entries)) => assert_eq!(entries["nuts"], "none"),
            other => panic!("unexpected profile: {:?}", other),
        }
    }

    #[test]
    fn test_alternatives_serialization_is_tagged() {
        let raw = serde_json::to_value(Alternatives::Raw("try plain oats".to_string())).unwrap();
        assert_eq!(raw["kind"], "raw");
        assert_eq!(raw["value"], "try plain oats");
    }
}
