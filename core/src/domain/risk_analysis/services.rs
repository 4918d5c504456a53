use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        json_extract::{extract_json, strip_code_fences},
        services::Service,
    },
    llm::{
        ports::{ImageGenerator, LLMClient, WebSearchClient},
        value_objects::LlmPrompt,
    },
    profile::ports::{ProfileRepository, ProfileService},
    risk_analysis::{
        entities::{
            AlternativeProduct, Alternatives, IngredientExtraction, RiskAssessment, RiskOutcome,
            RiskReport,
        },
        helpers::RawRiskAssessment,
        ports::RiskAnalysisService,
        prompts::{
            ALTERNATIVES_SYSTEM_PROMPT, INGREDIENT_EXTRACTION_SYSTEM_PROMPT,
            RISK_SCORING_SYSTEM_PROMPT, TEXT_EXTRACTION_PROMPT, ingredient_extraction_prompt,
            risk_scoring_prompt,
        },
        schema::{get_ingredient_extraction_schema, get_risk_assessment_schema},
        value_objects::{AnalyzeLabelImageInput, AnalyzeLabelTextInput},
    },
};

const PIPELINE_TEMPERATURE: f32 = 0.1;

#[derive(Deserialize)]
struct AlternativesReply {
    #[serde(default)]
    alternative_suggestions: Vec<AlternativeProduct>,
}

impl<P, LLM, IG, WS> Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    async fn run_risk_pipeline(
        &self,
        extracted_text: String,
        allergies: Vec<String>,
    ) -> Result<RiskReport, CoreError> {
        let prompt = LlmPrompt::new(ingredient_extraction_prompt(&extracted_text))
            .with_system(INGREDIENT_EXTRACTION_SYSTEM_PROMPT)
            .with_schema(get_ingredient_extraction_schema())
            .with_temperature(PIPELINE_TEMPERATURE);
        let raw_ingredients = self.chat_client.generate_with_text(prompt).await?;
        let ingredients: IngredientExtraction = extract_json(&raw_ingredients)?;
        info!(
            ingredients = ingredients.ingredients.len(),
            warnings = ingredients.contains.len(),
            "ingredients extracted"
        );

        let ingredients_json = serde_json::to_string(&ingredients)
            .map_err(|_| CoreError::InternalServerError)?;
        let prompt = LlmPrompt::new(risk_scoring_prompt(&ingredients_json, &allergies))
            .with_system(RISK_SCORING_SYSTEM_PROMPT)
            .with_schema(get_risk_assessment_schema())
            .with_temperature(PIPELINE_TEMPERATURE);
        let raw_risk = self.llm_client.generate_with_text(prompt).await?;
        let risk = match extract_json::<RawRiskAssessment>(&raw_risk) {
            Ok(raw) => {
                let risk = RiskAssessment::from(raw);
                info!(
                    score = risk.risk_score,
                    level = ?risk.risk_level,
                    allergens = risk.allergens_found.len(),
                    "risk scored"
                );
                RiskOutcome::Assessed(risk)
            }
            Err(e) => {
                warn!("Risk assessment reply could not be parsed: {}", e);
                RiskOutcome::Raw(strip_code_fences(&raw_risk))
            }
        };

        let risk_json = match &risk {
            RiskOutcome::Assessed(assessment) => serde_json::to_string(assessment)
                .map_err(|_| CoreError::InternalServerError)?,
            RiskOutcome::Raw(text) => text.clone(),
        };
        let prompt = LlmPrompt::new(risk_json)
            .with_system(ALTERNATIVES_SYSTEM_PROMPT)
            .json()
            .with_temperature(PIPELINE_TEMPERATURE);
        let raw_alternatives = self.llm_client.generate_with_text(prompt).await?;
        let alternatives = match extract_json::<AlternativesReply>(&raw_alternatives) {
            Ok(reply) => Alternatives::Suggestions(reply.alternative_suggestions),
            Err(_) => {
                warn!("Alternatives reply was not valid JSON, returning raw text");
                Alternatives::Raw(strip_code_fences(&raw_alternatives))
            }
        };

        Ok(RiskReport::new(
            extracted_text,
            allergies,
            ingredients,
            risk,
            alternatives,
        ))
    }
}

impl<P, LLM, IG, WS> RiskAnalysisService for Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    #[instrument(skip(self, input), fields(mime_type = %input.image.mime_type))]
    async fn analyze_image(&self, input: AnalyzeLabelImageInput) -> Result<RiskReport, CoreError> {
        if input.image.data.is_empty() || !input.image.is_image() {
            return Err(CoreError::Invalid("a png or jpeg image is required".to_string()));
        }

        let allergies = self.resolve_allergies(input.allergies).await?;

        let extracted_text = self
            .llm_client
            .generate_with_media(LlmPrompt::new(TEXT_EXTRACTION_PROMPT), input.image)
            .await?;
        let extracted_text = extracted_text.trim();
        if extracted_text.is_empty() {
            return Err(CoreError::TextExtractionFailed);
        }

        self.run_risk_pipeline(extracted_text.to_string(), allergies)
            .await
    }

    #[instrument(skip(self, input))]
    async fn analyze_text(&self, input: AnalyzeLabelTextInput) -> Result<RiskReport, CoreError> {
        let text = input.text_input.trim();
        if text.is_empty() {
            return Err(CoreError::Invalid("label text is required".to_string()));
        }

        let allergies = self.resolve_allergies(input.allergies).await?;

        self.run_risk_pipeline(text.to_string(), allergies).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::services::MockedService,
        llm::value_objects::InlineMedia,
        profile::{
            entities::{Sex, UserProfile},
            value_objects::AllergySource,
        },
        risk_analysis::entities::RiskLevel,
    };

    const INGREDIENTS: &str = r#"{"ingredients": ["wheat flour", "milk solids", "sugar"], "contains": ["milk", "wheat"]}"#;
    const RISK: &str = "```json\n{\"allergens_found\": [\"milk\"], \"risk_score\": 0.6, \"explanation\": \"milk solids present\"}\n```";
    const ALTERNATIVES: &str = r#"{"alternative_suggestions": [{"product_name": "Oat Biscuits", "reason": "dairy free", "allergen_profile": "free of milk"}]}"#;

    fn allergies(list: &[&str]) -> AllergySource {
        AllergySource {
            profile_name: None,
            allergies: list.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn is_risk_prompt(prompt: &LlmPrompt) -> bool {
        prompt.system.as_deref() == Some(RISK_SCORING_SYSTEM_PROMPT)
    }

    fn is_alternatives_prompt(prompt: &LlmPrompt) -> bool {
        prompt.system.as_deref() == Some(ALTERNATIVES_SYSTEM_PROMPT)
    }

    fn expect_ingredients(service: &mut MockedService) {
        service
            .chat_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt.system.as_deref() == Some(INGREDIENT_EXTRACTION_SYSTEM_PROMPT)
                    && prompt.temperature == Some(PIPELINE_TEMPERATURE)
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(INGREDIENTS.to_string()))));
    }

    #[tokio::test]
    async fn test_analyze_image_runs_full_pipeline() {
        let mut service = MockedService::mocked();
        service
            .llm_client
            .expect_generate_with_media()
            .withf(|prompt, media| {
                prompt.prompt == TEXT_EXTRACTION_PROMPT && media.mime_type == "image/png"
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(ready(Ok(
                    "Ingredients: wheat flour, milk solids, sugar. Contains: milk, wheat".to_string(),
                )))
            });
        service
            .chat_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt
                    .prompt
                    .starts_with("the user input is: Ingredients: wheat flour")
                    && prompt.temperature == Some(PIPELINE_TEMPERATURE)
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(INGREDIENTS.to_string()))));
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| {
                is_risk_prompt(prompt)
                    && prompt.prompt.contains("user allergy list: milk, nuts")
                    && prompt.temperature == Some(PIPELINE_TEMPERATURE)
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(RISK.to_string()))));
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| is_alternatives_prompt(prompt) && prompt.prompt.contains("\"risk_score\":0.6"))
            .times(1)
            .returning(|_| Box::pin(ready(Ok(ALTERNATIVES.to_string()))));

        let report = service
            .analyze_image(AnalyzeLabelImageInput {
                image: InlineMedia::new("image/png", vec![0x89, 0x50]),
                allergies: allergies(&["milk", "Milk", " nuts "]),
            })
            .await
            .unwrap();

        assert_eq!(report.allergies_checked, vec!["milk", "nuts"]);
        assert_eq!(report.ingredients.contains, vec!["milk", "wheat"]);
        match &report.risk {
            RiskOutcome::Assessed(risk) => assert_eq!(risk.risk_level, RiskLevel::Moderate),
            other => panic!("unexpected risk: {:?}", other),
        }
        match &report.alternatives {
            Alternatives::Suggestions(products) => {
                assert_eq!(products[0].product_name, "Oat Biscuits")
            }
            other => panic!("unexpected alternatives: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_image_empty_text_fails() {
        let mut service = MockedService::mocked();
        service
            .llm_client
            .expect_generate_with_media()
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok("   ".to_string()))));

        let err = service
            .analyze_image(AnalyzeLabelImageInput {
                image: InlineMedia::new("image/jpeg", vec![1, 2, 3]),
                allergies: AllergySource::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::TextExtractionFailed);
    }

    #[tokio::test]
    async fn test_analyze_image_rejects_non_image() {
        let service = MockedService::mocked();

        let err = service
            .analyze_image(AnalyzeLabelImageInput {
                image: InlineMedia::new("application/pdf", vec![1]),
                allergies: AllergySource::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_analyze_text_keeps_raw_alternatives() {
        let mut service = MockedService::mocked();
        expect_ingredients(&mut service);
        service
            .llm_client
            .expect_generate_with_text()
            .withf(is_risk_prompt)
            .returning(|_| Box::pin(ready(Ok(RISK.to_string()))));
        service
            .llm_client
            .expect_generate_with_text()
            .withf(is_alternatives_prompt)
            .returning(|_| {
                Box::pin(ready(Ok("Try ```plain rice crackers``` instead".to_string())))
            });

        let report = service
            .analyze_text(AnalyzeLabelTextInput {
                text_input: "  wheat flour, milk solids, sugar ".to_string(),
                allergies: allergies(&["milk"]),
            })
            .await
            .unwrap();

        assert_eq!(report.extracted_text, "wheat flour, milk solids, sugar");
        assert_eq!(
            report.alternatives,
            Alternatives::Raw("Try plain rice crackers instead".to_string())
        );
    }

    #[tokio::test]
    async fn test_unparsable_risk_reply_is_kept_and_alternatives_still_run() {
        let mut service = MockedService::mocked();
        expect_ingredients(&mut service);
        service
            .llm_client
            .expect_generate_with_text()
            .withf(is_risk_prompt)
            .times(1)
            .returning(|_| Box::pin(ready(Ok("The product is risky for milk allergy".to_string()))));
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| {
                is_alternatives_prompt(prompt)
                    && prompt.prompt == "The product is risky for milk allergy"
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(ALTERNATIVES.to_string()))));

        let report = service
            .analyze_text(AnalyzeLabelTextInput {
                text_input: "milk solids".to_string(),
                allergies: allergies(&["milk"]),
            })
            .await
            .unwrap();

        assert_eq!(
            report.risk,
            RiskOutcome::Raw("The product is risky for milk allergy".to_string())
        );
        assert!(matches!(report.alternatives, Alternatives::Suggestions(ref p) if p.len() == 1));
    }

    #[tokio::test]
    async fn test_analyze_text_uses_profile_allergies() {
        let mut service = MockedService::mocked();
        service
            .profile_repository
            .expect_get_by_name()
            .times(1)
            .returning(|name| {
                let mut profile = UserProfile::new(name.to_string(), 28, Sex::Female);
                profile.allergies = vec!["milk".to_string(), "sesame".to_string()];
                Box::pin(ready(Ok(Some(profile))))
            });
        expect_ingredients(&mut service);
        service
            .llm_client
            .expect_generate_with_text()
            .withf(|prompt| {
                is_risk_prompt(prompt) && prompt.prompt.contains("user allergy list: milk, sesame")
            })
            .returning(|_| Box::pin(ready(Ok(RISK.to_string()))));
        service
            .llm_client
            .expect_generate_with_text()
            .withf(is_alternatives_prompt)
            .returning(|_| Box::pin(ready(Ok(ALTERNATIVES.to_string()))));

        let report = service
            .analyze_text(AnalyzeLabelTextInput {
                text_input: "milk solids".to_string(),
                allergies: AllergySource {
                    profile_name: Some("asha".to_string()),
                    allergies: vec![],
                },
            })
            .await
            .unwrap();

        assert_eq!(report.allergies_checked, vec!["milk", "sesame"]);
    }

    #[tokio::test]
    async fn test_analyze_text_unknown_profile_is_not_found() {
        let mut service = MockedService::mocked();
        service
            .profile_repository
            .expect_get_by_name()
            .returning(|_| Box::pin(ready(Ok(None))));

        let err = service
            .analyze_text(AnalyzeLabelTextInput {
                text_input: "sugar".to_string(),
                allergies: AllergySource {
                    profile_name: Some("ghost".to_string()),
                    allergies: vec![],
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_analyze_text_rejects_blank_input() {
        let service = MockedService::mocked();
        let err = service
            .analyze_text(AnalyzeLabelTextInput {
                text_input: " ".to_string(),
                allergies: AllergySource::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
