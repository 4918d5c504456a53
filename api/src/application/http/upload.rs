use std::collections::HashMap;

use axum::extract::Multipart;
use nutriwise_core::domain::llm::value_objects::InlineMedia;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Multipart form split into binary parts and plain text fields
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, InlineMedia>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart, file_fields: &[&str]) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
        {
            let name = field.name().unwrap_or("").to_string();

            if file_fields.contains(&name.as_str()) {
                let mime_type = field
                    .content_type()
                    .map(str::to_string)
                    .filter(|m| !m.is_empty() && m != "application/octet-stream")
                    .unwrap_or_else(|| mime_from_file_name(field.file_name().unwrap_or("")));

                let data = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read {}: {}", name, e))
                })?;

                if data.len() > MAX_UPLOAD_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "File too large. Max size is {} bytes",
                        MAX_UPLOAD_SIZE
                    )));
                }
                if data.is_empty() {
                    return Err(ApiError::BadRequest(format!("{} cannot be empty", name)));
                }

                form.files
                    .insert(name, InlineMedia::new(mime_type, data.to_vec()));
            } else if !name.is_empty() {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read {}: {}", name, e))
                })?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn take_file(&mut self, name: &str) -> Result<InlineMedia, ApiError> {
        self.files
            .remove(name)
            .ok_or_else(|| ApiError::BadRequest(format!("Missing {} field", name)))
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn flag(&self, name: &str) -> Result<bool, ApiError> {
        match self.text(name) {
            None => Ok(false),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(true),
                "false" | "0" | "off" | "no" => Ok(false),
                _ => Err(ApiError::BadRequest(format!("{} must be a boolean", name))),
            },
        }
    }

    /// Comma separated list field
    pub fn list(&self, name: &str) -> Vec<String> {
        self.text(name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn mime_from_file_name(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_file_name() {
        assert_eq!(mime_from_file_name("label.JPG"), "image/jpeg");
        assert_eq!(mime_from_file_name("label.gif"), "image/gif");
        assert_eq!(mime_from_file_name("voice.flac"), "audio/flac");
        assert_eq!(mime_from_file_name("voice.mp3"), "audio/mpeg");
        assert_eq!(mime_from_file_name("noextension"), "application/octet-stream");
        assert_eq!(mime_from_file_name(""), "application/octet-stream");
    }

    #[test]
    fn test_fields() {
        let mut form = UploadForm::default();
        form.fields
            .insert("allergies".to_string(), " milk, ,nuts ".to_string());
        form.fields
            .insert("generate_image".to_string(), "True".to_string());

        assert_eq!(form.list("allergies"), vec!["milk", "nuts"]);
        assert!(form.flag("generate_image").unwrap());
        assert!(!form.flag("missing").unwrap());
        assert!(form.take_file("image").is_err());
    }
}
