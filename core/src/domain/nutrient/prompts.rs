use std::fmt::Write as _;

use crate::domain::llm::value_objects::SearchHit;

pub const NUTRIENT_SYSTEM_PROMPT: &str = "You are a Nutrition Data Specialist.\n\n\
YOUR TASK:\n\
1. Accept one or multiple food items or ingredients.\n\
2. For each item, find an exact match. If no exact match exists, use the closest generic or \
common match (e.g., \"boiled potato\" -> \"potato, boiled\").\n\
3. Return the complete nutritional profile for each item.\n\n\
OUTPUT FORMAT:\n\
Return a JSON object with one entry per food item:\n\
{\"<food item>\": {\"Calories\": <kcal>, \"Carbohydrates\": <g>, \"Protein\": <g>, \"Fats\": <g>, \
\"Free Sugar\": <g>, \"Fibre\": <g>, \"Sodium\": <mg>, \"Calcium\": <mg>, \"Iron\": <mg>, \"Vitamin C\": <mg>}}\n\n\
GUIDELINES:\n\
- Handle item names case-insensitively.\n\
- Prefer generic/common forms over brand-specific variants unless specified.\n\
- Keep the structure identical for every item.\n\
- Output must be parsable JSON.";

pub fn nutrient_prompt(items: &[String], sources: &[SearchHit]) -> String {
    let mut prompt = format!("Food items: {}", items.join(", "));

    if !sources.is_empty() {
        prompt.push_str("\n\nReference material from web search:\n");
        for hit in sources {
            let _ = writeln!(prompt, "- {} ({}): {}", hit.title, hit.url, hit.snippet);
        }
    }

    prompt
}
