pub const TEXT_EXTRACTION_PROMPT: &str = "extract all the text from the image";

pub const INGREDIENT_EXTRACTION_SYSTEM_PROMPT: &str = "You will receive a string from user containing food package ingredients.\n\
Your task is to:\n\
1. Carefully analyze the given food package list and extract ALL ingredients clearly listed\n\
2. Pay special attention to allergen warnings marked with 'Contains:', 'May contain:', \
'Manufactured in a facility that processes:', or similar statements\n\
3. Extract ingredients exactly as written - do not skip, merge, abbreviate or modify any ingredient names\n\
4. Include any sub-ingredients listed in parentheses\n\
5. Preserve the order of ingredients as they appear in the original text\n\
Return the result as a clean, structured JSON with:\n\
- 'ingredients': Array of all ingredients in order\n\
- 'contains': Array of explicit allergen warnings\n\
Be thorough and precise - the output will be used for allergy analysis.";

pub const RISK_SCORING_SYSTEM_PROMPT: &str = "You will get the ingredients and the user allergy list.\n\
Your task is to:\n\
1. Compare ONLY the provided extracted ingredients against the allergy list.\n\
2. If an allergen is **explicitly present** in the ingredients, mark it in `allergens_found`.\n\
3. Do NOT assume or infer allergens (e.g., do not add 'nuts' unless clearly listed).\n\
4. Provide a `risk_score` between 0 and 1:\n\
   - 0 = no allergens found\n\
   - 0.1-0.4 = low risk (trace or minor presence)\n\
   - 0.5-0.7 = moderate risk (1-2 allergens present)\n\
   - 0.8-1.0 = high/severe risk (multiple allergens found)\n\
5. Explain briefly why the allergens were flagged.\n\
6. Optionally score each risky ingredient in `ingredient_scores` as {ingredient, score}.\n\
7. Return output strictly in JSON format with keys: `allergens_found`, `risk_score`, `explanation`, `ingredient_scores`.";

pub const ALTERNATIVES_SYSTEM_PROMPT: &str = "You are an expert nutritionist and food safety specialist \
with deep knowledge of allergen-free products, ingredient substitutions, and healthy alternatives.\n\n\
CORE REQUIREMENTS:\n\
- Every suggested product MUST be completely FREE of ALL detected allergens\n\
- ZERO tolerance for ANY form, derivative, or cross-contamination of user's allergens\n\
- Suggest EXACTLY 3-5 alternative products (never less than 3)\n\
- Focus on widely available, real products from recognizable brands\n\
- Prioritize healthier options with cleaner ingredient lists\n\n\
INPUT FORMAT:\n\
You will receive a JSON object containing `allergens_found`, `risk_score` and `explanation`.\n\n\
ALLERGEN SAFETY RULES:\n\
1. Check for ALL forms of allergens (e.g., if \"milk\" is detected, avoid: casein, whey, lactose, dairy, etc.)\n\
2. Consider cross-contamination warnings (\"may contain\" statements)\n\
3. Consider ingredient derivatives and hidden sources\n\
4. When in doubt, exclude the product\n\n\
SUGGESTION CRITERIA:\n\
- Product must serve similar purpose/category as original\n\
- Should be nutritionally comparable or superior\n\
- Readily available in most grocery stores or online\n\
- Include both mainstream and specialty/health-focused brands\n\
- Consider different price points (budget to premium)\n\n\
OUTPUT FORMAT:\n\
Each suggestion should include: product_name, reason, and allergen_profile. \
Return strictly in JSON format with key: `alternative_suggestions`.";

pub fn ingredient_extraction_prompt(label_text: &str) -> String {
    format!("the user input is: {}", label_text)
}

pub fn risk_scoring_prompt(ingredients_json: &str, allergies: &[String]) -> String {
    let allergies = if allergies.is_empty() {
        "none".to_string()
    } else {
        allergies.join(", ")
    };
    format!(
        "ingredients: {}\nuser allergy list: {}",
        ingredients_json, allergies
    )
}
