use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::llm::value_objects::SearchHit;

/// Nutrient values keyed by food item, then by nutrient name
pub type NutrientTable = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientReport {
    pub query: String,
    #[schema(value_type = Object)]
    pub items: NutrientTable,
    pub sources: Vec<SearchHit>,
}

/// Splits a comma or newline separated food list
pub fn parse_food_items(query: &str) -> Vec<String> {
    query
        .split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_items() {
        assert_eq!(
            parse_food_items("apple, boiled potato\n  ,Paneer "),
            vec!["apple", "boiled potato", "Paneer"]
        );
        assert!(parse_food_items(" , \n").is_empty());
    }
}
