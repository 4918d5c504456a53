use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{ports::WebSearchClient, value_objects::SearchHit},
};

const EXA_SEARCH_URL: &str = "https://api.exa.ai/search";
const SNIPPET_CHARS: usize = 500;

/// Exa neural web search. Without an API key every search returns no hits.
#[derive(Debug, Clone)]
pub struct ExaSearchClient {
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest {
    query: String,
    num_results: u32,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: ExaTextOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaTextOptions {
    max_characters: usize,
}

#[derive(Debug, Deserialize)]
struct ExaSearchResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    title: Option<String>,
    url: String,
    text: Option<String>,
}

impl From<ExaResult> for SearchHit {
    fn from(result: ExaResult) -> Self {
        Self {
            title: result.title.unwrap_or_default(),
            url: result.url,
            snippet: result
                .text
                .map(|t| t.chars().take(SNIPPET_CHARS).collect())
                .unwrap_or_default(),
        }
    }
}

impl ExaSearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client: Client::new(),
        }
    }
}

impl WebSearchClient for ExaSearchClient {
    async fn search(&self, query: String, max_results: u32) -> Result<Vec<SearchHit>, CoreError> {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("Exa API key not configured, skipping web search");
            return Ok(Vec::new());
        };
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let request = ExaSearchRequest {
            query,
            num_results: max_results,
            contents: ExaContents {
                text: ExaTextOptions {
                    max_characters: SNIPPET_CHARS,
                },
            },
        };

        let response = self
            .client
            .post(EXA_SEARCH_URL)
            .header("x-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Exa search request failed: {}", e);
                CoreError::ExternalServiceError(format!("Search API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Exa search error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Search API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: ExaSearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Exa response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse search response: {}", e))
        })?;

        Ok(body.results.into_iter().map(SearchHit::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_without_key_returns_nothing() {
        let client = ExaSearchClient::new(Some("  ".to_string()));
        let hits = client.search("apple".to_string(), 3).await.unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_request_shape() {
        let request = ExaSearchRequest {
            query: "apple nutrition".to_string(),
            num_results: 3,
            contents: ExaContents {
                text: ExaTextOptions {
                    max_characters: SNIPPET_CHARS,
                },
            },
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["numResults"], 3);
        assert_eq!(body["contents"]["text"]["maxCharacters"], 500);
    }

    #[test]
    fn test_result_maps_to_hit() {
        let response: ExaSearchResponse = serde_json::from_str(
            r#"{"results": [{"title": null, "url": "https://example.org", "text": "52 kcal"}]}"#,
        )
        .unwrap();
        let hit = SearchHit::from(response.results.into_iter().next().unwrap());
        assert_eq!(hit.title, "");
        assert_eq!(hit.snippet, "52 kcal");
    }
}
