const ALTERNATIVE_IMAGE_SIZE: u32 = 1024;
const ALTERNATIVE_IMAGE_SEED: u32 = 42;
const ALTERNATIVE_IMAGE_MODEL: &str = "nanobanana";

/// Public pollinations.ai rendering of the recipe, shown next to the generated image
pub fn alternative_image_url(recipe_name: &str) -> String {
    format!(
        "https://pollinations.ai/p/{}?width={size}&height={size}&seed={}&model={}",
        urlencoding::encode(recipe_name),
        ALTERNATIVE_IMAGE_SEED,
        ALTERNATIVE_IMAGE_MODEL,
        size = ALTERNATIVE_IMAGE_SIZE,
    )
}

pub fn recipe_file_name(recipe_name: &str) -> String {
    let stem: String = recipe_name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '"' | '*' | '?' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect();
    format!("{}_recipe.md", stem)
}

/// First characters of a recipe, the part that carries its name
pub fn recipe_head(content: &str) -> String {
    content.chars().take(100).collect()
}

/// Recipe name taken from the first meaningful line of the Markdown
pub fn fallback_recipe_name(content: &str) -> Option<String> {
    content
        .lines()
        .map(|line| {
            let line = line.trim().trim_start_matches(['#', '*', ' ']).trim_end_matches(['*', ' ']);
            let line = line
                .strip_prefix("1.")
                .map(str::trim_start)
                .unwrap_or(line);
            let line = line
                .strip_prefix("Recipe Name:")
                .or_else(|| line.strip_prefix("Recipe name:"))
                .map(str::trim)
                .unwrap_or(line);
            line.trim_matches(['*', ' ']).to_string()
        })
        .find(|line| !line.is_empty() && !line.eq_ignore_ascii_case("recipe name"))
}
