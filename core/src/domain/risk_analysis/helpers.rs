use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::risk_analysis::entities::{IngredientScore, RiskAssessment, RiskLevel};

/// Risk assessment as the model returns it, before scores are normalized
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRiskAssessment {
    #[serde(default)]
    pub allergens_found: Vec<String>,
    #[serde(default)]
    pub risk_score: Value,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub ingredient_scores: Vec<RawIngredientScore>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIngredientScore {
    #[serde(alias = "name")]
    pub ingredient: String,
    #[serde(default, alias = "risk_score")]
    pub score: Value,
}

/// Reads a score given as a number or as text such as "0.7", "0.7/1.0" or "70%".
pub fn parse_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if let Some(percent) = s.strip_suffix('%') {
                return percent.trim().parse::<f64>().ok().map(|p| p / 100.0);
            }
            let head = s.split('/').next().unwrap_or(s).trim();
            head.parse::<f64>().ok()
        }
        _ => None,
    }
}

pub fn clamp_score(field: &str, score: f64) -> f64 {
    if !score.is_finite() {
        warn!("{} was not a finite number, using 0", field);
        return 0.0;
    }
    if !(0.0..=1.0).contains(&score) {
        warn!("{} {} outside [0, 1], clamping", field, score);
    }
    score.clamp(0.0, 1.0)
}

impl From<RawRiskAssessment> for RiskAssessment {
    fn from(raw: RawRiskAssessment) -> Self {
        let risk_score = match parse_score(&raw.risk_score) {
            Some(score) => clamp_score("risk_score", score),
            None => {
                warn!("risk_score missing or unreadable, using 0");
                0.0
            }
        };

        let ingredient_scores = raw
            .ingredient_scores
            .into_iter()
            .filter_map(|s| {
                let score = parse_score(&s.score)?;
                Some(IngredientScore {
                    score: clamp_score("ingredient score", score),
                    ingredient: s.ingredient,
                })
            })
            .collect();

        Self {
            allergens_found: raw.allergens_found,
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            explanation: raw.explanation,
            ingredient_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_score_variants() {
        assert_eq!(parse_score(&json!(0.4)), Some(0.4));
        assert_eq!(parse_score(&json!("0.7")), Some(0.7));
        assert_eq!(parse_score(&json!("0.9/1.0")), Some(0.9));
        assert_eq!(parse_score(&json!("85%")), Some(0.85));
        assert_eq!(parse_score(&json!("high")), None);
        assert_eq!(parse_score(&Value::Null), None);
    }

    #[test]
    fn test_assessment_is_clamped() {
        let raw: RawRiskAssessment = serde_json::from_value(json!({
            "allergens_found": ["milk"],
            "risk_score": 1.7,
            "explanation": "contains milk powder",
            "ingredient_scores": [
                {"ingredient": "milk powder", "score": "-0.2"},
                {"name": "sugar", "score": "unknown"}
            ]
        }))
        .unwrap();

        let assessment = RiskAssessment::from(raw);
        assert_eq!(assessment.risk_score, 1.0);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(assessment.ingredient_scores.len(), 1);
        assert_eq!(assessment.ingredient_scores[0].score, 0.0);
    }

    #[test]
    fn test_missing_score_means_no_risk() {
        let assessment = RiskAssessment::from(RawRiskAssessment::default());
        assert_eq!(assessment.risk_score, 0.0);
        assert_eq!(assessment.risk_level, RiskLevel::None);
    }
}
