use serde_json::json;

pub fn get_ingredient_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": { "type": "array", "items": { "type": "string" } },
            "contains": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["ingredients", "contains"]
    })
}

pub fn get_risk_assessment_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "allergens_found": { "type": "array", "items": { "type": "string" } },
            "risk_score": { "type": "number" },
            "explanation": { "type": "string" },
            "ingredient_scores": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "score": { "type": "number" }
                    },
                    "required": ["ingredient", "score"]
                }
            }
        },
        "required": ["allergens_found", "risk_score", "explanation"]
    })
}
