use serde_json::json;

fn nutrients_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "calories": { "type": "number" },
            "carbohydrates": { "type": "number" },
            "fats": { "type": "number" },
            "proteins": { "type": "number" }
        },
        "required": ["calories", "carbohydrates", "fats", "proteins"]
    })
}

/// Returns the JSON schema for one meal slot's LLM response
pub fn get_meal_suggestion_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "recipe_name": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "quantity": { "type": "number" },
                                    "unit": { "type": "string" }
                                },
                                "required": ["name", "quantity", "unit"]
                            }
                        },
                        "nutrients": nutrients_schema()
                    },
                    "required": ["recipe_name", "ingredients", "nutrients"]
                }
            },
            "total_nutrients": nutrients_schema()
        },
        "required": ["recipes", "total_nutrients"]
    })
}
