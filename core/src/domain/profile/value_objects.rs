use crate::domain::profile::entities::{ActivityLevel, SeverityLevel, Sex};

#[derive(Debug, Clone)]
pub struct SaveProfileInput {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: Option<ActivityLevel>,
    pub allergies: Vec<String>,
    /// Comma-separated allergies typed in addition to the selected ones
    pub custom_allergies: Option<String>,
    pub dietary_restrictions: Vec<String>,
    pub severity_level: Option<SeverityLevel>,
    pub calorie_target: Option<u32>,
    pub protein_target: Option<u32>,
    pub fat_target: Option<u32>,
    pub carb_target: Option<u32>,
}

/// Where the allergy list for an analysis comes from.
#[derive(Debug, Clone, Default)]
pub struct AllergySource {
    pub profile_name: Option<String>,
    pub allergies: Vec<String>,
}

/// Merges selected and comma-separated custom allergies.
///
/// Entries are trimmed, empty ones dropped and duplicates removed without
/// regard to case, keeping the first spelling.
pub fn merge_allergies(selected: &[String], custom: Option<&str>) -> Vec<String> {
    let custom = custom.unwrap_or_default().split(',');
    let mut merged: Vec<String> = Vec::new();

    for entry in selected.iter().map(String::as_str).chain(custom) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if merged.iter().any(|m| m.eq_ignore_ascii_case(entry)) {
            continue;
        }
        merged.push(entry.to_string());
    }

    merged
}
