use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, json_extract::extract_json, services::Service},
    llm::{
        ports::{ImageGenerator, LLMClient, WebSearchClient},
        value_objects::LlmPrompt,
    },
    nutrient::{
        entities::{NutrientReport, NutrientTable, parse_food_items},
        ports::NutrientService,
        prompts::{NUTRIENT_SYSTEM_PROMPT, nutrient_prompt},
    },
    profile::ports::ProfileRepository,
};

impl<P, LLM, IG, WS> NutrientService for Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    #[instrument(skip(self))]
    async fn analyze_nutrients(&self, query: String) -> Result<NutrientReport, CoreError> {
        let items = parse_food_items(&query);
        if items.is_empty() {
            return Err(CoreError::Invalid("at least one food item is required".to_string()));
        }

        let search_query = format!("nutrition facts per 100g {}", items.join(", "));
        let sources = match self
            .web_search
            .search(search_query, self.search_results)
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Web search failed, continuing without sources: {}", e);
                Vec::new()
            }
        };

        let prompt = LlmPrompt::new(nutrient_prompt(&items, &sources))
            .with_system(NUTRIENT_SYSTEM_PROMPT)
            .json();
        let raw_response = self.llm_client.generate_with_text(prompt).await?;
        let table: NutrientTable = extract_json(&raw_response)?;

        info!(items = table.len(), sources = sources.len(), "nutrients analyzed");

        Ok(NutrientReport {
            query: items.join(", "),
            items: table,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{common::services::MockedService, llm::value_objects::SearchHit};

    const TABLE: &str = r#"{"apple": {"Calories": 52, "Protein": 0.3, "Vitamin C": "4.6 mg"}}"#;

    fn expect_table(service: &mut MockedService) {
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt.expects_json() && prompt.system.as_deref() == Some(NUTRIENT_SYSTEM_PROMPT)
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(TABLE.to_string()))));
    }

    #[tokio::test]
    async fn test_analyze_nutrients_with_sources() {
        let mut service = MockedService::mocked();
        service
            .web_search
            .expect_search()
            .withf(|query, max_results| {
                query == "nutrition facts per 100g apple" && *max_results == 3
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(ready(Ok(vec![SearchHit {
                    title: "Apple nutrition".to_string(),
                    url: "https://example.org/apple".to_string(),
                    snippet: "52 kcal per 100 g".to_string(),
                }])))
            });
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| prompt.expects_json() && prompt.prompt.contains("52 kcal per 100 g"))
            .times(1)
            .returning(|_| Box::pin(ready(Ok(TABLE.to_string()))));

        let report = service.analyze_nutrients(" apple ,".to_string()).await.unwrap();

        assert_eq!(report.query, "apple");
        assert_eq!(report.items["apple"]["Calories"], 52);
        assert_eq!(report.sources.len(), 1);
    }

    #[tokio::test]
    async fn test_search_failure_is_not_fatal() {
        let mut service = MockedService::mocked();
        service.web_search.expect_search().times(1).returning(|_, _| {
            Box::pin(ready(Err(CoreError::ExternalServiceError(
                "search down".to_string(),
            ))))
        });
        expect_table(&mut service);

        let report = service.analyze_nutrients("apple".to_string()).await.unwrap();
        assert!(report.sources.is_empty());
        assert!(report.items.contains_key("apple"));
    }

    #[tokio::test]
    async fn test_empty_query_is_invalid() {
        let service = MockedService::mocked();

        let err = service.analyze_nutrients(" , ".to_string()).await.unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
