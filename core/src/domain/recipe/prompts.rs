pub const TEXT_RECIPE_SYSTEM_PROMPT: &str = "Respond only if you receive a query related to ingredients; \
otherwise simply ask the user to give the ingredients list. \
Do not add redundant content, simply start with the recipe name. \
You are a master chef. Generate a structured recipe based on the given ingredients, \
in a short way within 250 words. \
Return output with proper titles and their content:\n\
1. Recipe Name\n\
2. Required Ingredients\n\
3. Step-by-Step Cooking Instructions\n";

pub const MEDIA_RECIPE_PROMPT: &str = "Return output with:\n\
1. Recipe Name\n\
2. Required Ingredients (with quantities if possible)\n\
3. Step-by-Step Cooking Instructions\n\
4. Optional Tips for taste/health.";

pub const IMAGE_RECIPE_PROMPT: &str = "Based on the image you have to return output with:\n\
1. Recipe Name\n\
2. Required Ingredients (with quantities if possible)\n\
3. Step-by-Step Cooking Instructions\n\
4. Optional Tips for taste/health.";

pub fn recipe_name_prompt(recipe_head: &str) -> String {
    format!(
        "Extract only the recipe from the following text, \
         return only the recipe name in json format with the key `recipe_name`.\n\
         text={}",
        recipe_head
    )
}

pub fn recipe_image_prompt(recipe_name: &str) -> String {
    format!("generate the image of {}", recipe_name)
}
