use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{NutritionTargets, UserProfile},
        value_objects::{AllergySource, SaveProfileInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn list_names(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    /// Inserts or overwrites the profile stored under `profile.name`
    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    /// Returns false when no profile was stored under `name`
    fn delete(&self, name: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn save_profile(
        &self,
        input: SaveProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_profile(
        &self,
        name: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn list_profiles(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn delete_profile(&self, name: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Targets of the named profile, or the defaults when no name is given
    fn effective_targets(
        &self,
        name: Option<String>,
    ) -> impl Future<Output = Result<NutritionTargets, CoreError>> + Send;

    fn resolve_allergies(
        &self,
        source: AllergySource,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
