use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::PathBuf,
    sync::Arc,
};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileRepository},
};

type ProfileMap = BTreeMap<String, UserProfile>;

/// Profiles stored as one JSON object keyed by profile name.
///
/// Writes are serialized through a single lock and land through a temp file
/// rename, so readers never observe a partially written file.
#[derive(Debug, Clone)]
pub struct JsonFileProfileRepository {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<ProfileMap, CoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ProfileMap::new()),
            Err(e) => {
                error!("Failed to read profile file {}: {}", self.path.display(), e);
                return Err(CoreError::StorageError(e.to_string()));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(ProfileMap::new());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            error!("Profile file {} is not valid JSON: {}", self.path.display(), e);
            CoreError::StorageError(format!("corrupt profile file: {}", e))
        })
    }

    async fn store(&self, profiles: &ProfileMap) -> Result<(), CoreError> {
        let body = serde_json::to_vec_pretty(profiles).map_err(|e| {
            error!("Failed to serialize profiles: {}", e);
            CoreError::StorageError(e.to_string())
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, body).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp_path.display(), e);
            CoreError::StorageError(e.to_string())
        })?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            error!("Failed to replace {}: {}", self.path.display(), e);
            CoreError::StorageError(e.to_string())
        })
    }
}

impl ProfileRepository for JsonFileProfileRepository {
    async fn list_names(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.load().await?.into_keys().collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.load().await?.remove(name))
    }

    async fn upsert(&self, mut profile: UserProfile) -> Result<UserProfile, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut profiles = self.load().await?;
        if let Some(existing) = profiles.get(&profile.name) {
            profile.created_at = existing.created_at;
            profile.updated_at = Utc::now();
        }
        profiles.insert(profile.name.clone(), profile.clone());
        self.store(&profiles).await?;

        Ok(profile)
    }

    async fn delete(&self, name: &str) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut profiles = self.load().await?;
        if profiles.remove(name).is_none() {
            return Ok(false);
        }
        self.store(&profiles).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::Sex;

    fn repository(dir: &tempfile::TempDir) -> JsonFileProfileRepository {
        JsonFileProfileRepository::new(dir.path().join("user_profiles.json"))
    }

    fn profile_file(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("user_profiles.json")
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        assert!(repo.list_names().await.unwrap().is_empty());
        assert_eq!(repo.get_by_name("ravi").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_list_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        repo.upsert(UserProfile::new("zara".to_string(), 30, Sex::Female))
            .await
            .unwrap();
        repo.upsert(UserProfile::new("arun".to_string(), 41, Sex::Male))
            .await
            .unwrap();

        assert_eq!(repo.list_names().await.unwrap(), vec!["arun", "zara"]);
        assert_eq!(repo.get_by_name("arun").await.unwrap().unwrap().age, 41);
        assert!(!dir.path().join("user_profiles.json.tmp").exists());

        assert!(repo.delete("arun").await.unwrap());
        assert!(!repo.delete("arun").await.unwrap());
        assert_eq!(repo.list_names().await.unwrap(), vec!["zara"]);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        let first = repo
            .upsert(UserProfile::new("zara".to_string(), 30, Sex::Female))
            .await
            .unwrap();

        let mut changed = UserProfile::new("zara".to_string(), 31, Sex::Female);
        changed.created_at = first.created_at + chrono::Duration::days(3);
        let second = repo.upsert(changed).await.unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);

        let stored = repo.get_by_name("zara").await.unwrap().unwrap();
        assert_eq!(stored.age, 31);
        assert_eq!(stored.created_at, first.created_at);
    }

    #[tokio::test]
    async fn test_concurrent_first_saves_share_one_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        let mut handles = Vec::new();
        for age in 20..26 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.upsert(UserProfile::new("zara".to_string(), age, Sex::Female))
                    .await
            }));
        }
        let mut saved = Vec::new();
        for handle in handles {
            saved.push(handle.await.unwrap().unwrap());
        }

        let stored = repo.get_by_name("zara").await.unwrap().unwrap();
        let earliest = saved.iter().map(|p| p.created_at).min().unwrap();
        assert!(saved.iter().all(|p| p.created_at == earliest));
        assert_eq!(stored.created_at, earliest);
    }

    #[tokio::test]
    async fn test_reads_records_with_missing_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        tokio::fs::write(
            profile_file(&dir),
            r#"{"meera": {"name": "meera", "age": 34, "sex": "female", "allergies": ["nuts"], "calorie_target": 1800}}"#,
        )
        .await
        .unwrap();

        let profile = repo.get_by_name("meera").await.unwrap().unwrap();
        assert_eq!(profile.allergies, vec!["nuts"]);
        assert_eq!(profile.calorie_target, Some(1800));
        assert_eq!(profile.protein_target, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);
        tokio::fs::write(profile_file(&dir), "{not json").await.unwrap();

        let err = repo.list_names().await.unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
    }

    #[tokio::test]
    async fn test_concurrent_upserts_keep_every_profile() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repository(&dir);

        let mut handles = Vec::new();
        for i in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.upsert(UserProfile::new(format!("user{}", i), 20 + i, Sex::Male))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.list_names().await.unwrap().len(), 8);
    }
}
