use std::ops::RangeInclusive;

use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::{ImageGenerator, LLMClient, WebSearchClient},
    profile::{
        entities::{NutritionTargets, UserProfile},
        nutrition::{
            AGE_RANGE, CALORIE_RANGE, CARB_RANGE, FAT_RANGE, PROTEIN_RANGE, recommended_nutrition,
        },
        ports::{ProfileRepository, ProfileService},
        value_objects::{AllergySource, SaveProfileInput, merge_allergies},
    },
};

fn ensure_in_range(
    field: &str,
    value: Option<u32>,
    range: RangeInclusive<u32>,
) -> Result<(), CoreError> {
    match value {
        Some(v) if !range.contains(&v) => Err(CoreError::Invalid(format!(
            "{} must be between {} and {}",
            field,
            range.start(),
            range.end()
        ))),
        _ => Ok(()),
    }
}

impl<P, LLM, IG, WS> ProfileService for Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    #[instrument(skip(self, input), fields(profile = %input.name))]
    async fn save_profile(&self, input: SaveProfileInput) -> Result<UserProfile, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }

        ensure_in_range("age", Some(input.age), AGE_RANGE)?;
        ensure_in_range("calorie_target", input.calorie_target, CALORIE_RANGE)?;
        ensure_in_range("protein_target", input.protein_target, PROTEIN_RANGE)?;
        ensure_in_range("fat_target", input.fat_target, FAT_RANGE)?;
        ensure_in_range("carb_target", input.carb_target, CARB_RANGE)?;

        let recommended = recommended_nutrition(input.age, input.sex);
        let targets = NutritionTargets {
            calories: input.calorie_target.unwrap_or(recommended.calories),
            protein: input.protein_target.unwrap_or(recommended.protein),
            fat: input.fat_target.unwrap_or(recommended.fat),
            carbs: input.carb_target.unwrap_or(recommended.carbs),
        };

        let mut profile = UserProfile::new(name, input.age, input.sex).with_targets(targets);
        profile.activity_level = input.activity_level.unwrap_or_default();
        profile.allergies = merge_allergies(&input.allergies, input.custom_allergies.as_deref());
        profile.dietary_restrictions = merge_allergies(&input.dietary_restrictions, None);
        profile.severity_level = input.severity_level.unwrap_or_default();

        let profile = self.profile_repository.upsert(profile).await?;
        info!(allergies = profile.allergies.len(), "profile saved");

        Ok(profile)
    }

    async fn get_profile(&self, name: String) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_by_name(name.trim())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_profiles(&self) -> Result<Vec<String>, CoreError> {
        self.profile_repository.list_names().await
    }

    async fn delete_profile(&self, name: String) -> Result<(), CoreError> {
        if self.profile_repository.delete(name.trim()).await? {
            info!(profile = %name, "profile deleted");
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }

    async fn effective_targets(&self, name: Option<String>) -> Result<NutritionTargets, CoreError> {
        match name {
            Some(name) => Ok(self.get_profile(name).await?.targets()),
            None => Ok(NutritionTargets::default()),
        }
    }

    async fn resolve_allergies(&self, source: AllergySource) -> Result<Vec<String>, CoreError> {
        let mut allergies = Vec::new();

        if let Some(name) = source.profile_name.filter(|n| !n.trim().is_empty()) {
            allergies = self.get_profile(name).await?.allergies;
        }

        allergies.extend(source.allergies);
        Ok(merge_allergies(&allergies, None))
    }
}
