use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, json_extract::extract_json, services::Service},
    llm::{
        ports::{ImageGenerator, LLMClient, WebSearchClient},
        value_objects::LlmPrompt,
    },
    meal_plan::{
        entities::{DailyMealPlan, MealSuggestion, PlannedMeal},
        helpers::split_targets,
        ports::MealPlanService,
        prompts::{MEAL_PLAN_QUESTION, build_meal_prompt},
        schema::get_meal_suggestion_schema,
        value_objects::GenerateMealPlanInput,
    },
    profile::ports::ProfileRepository,
};

impl<P, LLM, IG, WS> MealPlanService for Service<P, LLM, IG, WS>
where
    P: ProfileRepository,
    LLM: LLMClient,
    IG: ImageGenerator,
    WS: WebSearchClient,
{
    #[instrument(skip(self, input), fields(profile = %input.profile_name))]
    async fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<DailyMealPlan, CoreError> {
        let profile = self
            .profile_repository
            .get_by_name(input.profile_name.trim())
            .await?
            .ok_or(CoreError::NotFound)?;

        let targets = profile.targets();
        let mut planned_recipes: Vec<String> = Vec::new();
        let mut meals = Vec::with_capacity(4);

        for budget in split_targets(&targets) {
            let prompt = LlmPrompt::new(MEAL_PLAN_QUESTION)
                .with_system(build_meal_prompt(&budget, &profile, &planned_recipes))
                .with_schema(get_meal_suggestion_schema())
                .with_temperature(0.7);

            let raw_response = self.chat_client.generate_with_text(prompt).await?;
            let suggestion: MealSuggestion = extract_json(&raw_response)?;

            info!(
                slot = %budget.slot,
                recipes = suggestion.recipes.len(),
                "meal slot planned"
            );

            planned_recipes.extend(suggestion.recipes.iter().map(|r| r.recipe_name.clone()));
            meals.push(PlannedMeal {
                slot: budget.slot,
                budget,
                recipes: suggestion.recipes,
                total_nutrients: suggestion.total_nutrients,
            });
        }

        Ok(DailyMealPlan::new(profile.name, targets, meals))
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        common::services::MockedService,
        llm::value_objects::ResponseFormat,
        meal_plan::entities::MealSlot,
        profile::entities::{Sex, UserProfile},
    };

    fn slot_reply(name: &str) -> String {
        format!(
            r#"{{"recipes": [{{"recipe_name": "{name}", "ingredients": [{{"name": "rice", "quantity": 100, "unit": "g"}}], "nutrients": {{"calories": 400, "carbohydrates": 60, "fats": 10, "proteins": 15}}}}], "total_nutrients": {{"calories": 400, "carbohydrates": 60, "fats": 10, "proteins": 15}}}}"#
        )
    }

    fn expect_profile(service: &mut MockedService) {
        service
            .profile_repository
            .expect_get_by_name()
            .times(1)
            .returning(|name| {
                let mut profile = UserProfile::new(name.to_string(), 30, Sex::Male);
                profile.allergies = vec!["fish".to_string(), "milk".to_string()];
                profile.calorie_target = Some(2400);
                Box::pin(ready(Ok(Some(profile))))
            });
    }

    fn expect_slot(service: &mut MockedService, slot: &'static str, reply: String) {
        let heading = format!("Create a {} meal plan", slot);
        service
            .chat_client
            .expect_generate_with_text()
            .withf(move |prompt| {
                prompt.system.as_deref().is_some_and(|s| s.contains(&heading))
                    && prompt.temperature == Some(0.7)
                    && matches!(prompt.response_format, ResponseFormat::JsonSchema(_))
            })
            .times(1)
            .returning(move |_| Box::pin(ready(Ok(reply.clone()))));
    }

    #[tokio::test]
    async fn test_generate_meal_plan_plans_every_slot() {
        let mut service = MockedService::mocked();
        expect_profile(&mut service);
        expect_slot(&mut service, "breakfast", slot_reply("Poha"));
        expect_slot(
            &mut service,
            "lunch",
            format!("```json\n{}\n```", slot_reply("Rajma Rice")),
        );
        expect_slot(&mut service, "dinner", slot_reply("Veg Pulao"));
        service
            .chat_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt.system.as_deref().is_some_and(|s| {
                    s.contains("Create a snack meal plan")
                        && s.contains("EXCLUDE: Poha, Rajma Rice, Veg Pulao")
                })
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(slot_reply("Fruit Chaat")))));

        let plan = service
            .generate_meal_plan(GenerateMealPlanInput {
                profile_name: "ravi".to_string(),
            })
            .await
            .unwrap();

        let slots: Vec<MealSlot> = plan.meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert_eq!(plan.meals[1].recipes[0].recipe_name, "Rajma Rice");
        assert_eq!(plan.targets.calories, 2400);
        assert!((plan.meals[0].budget.calories - 600.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_breakfast_prompt_carries_budget_and_allergies() {
        let mut service = MockedService::mocked();
        expect_profile(&mut service);
        service
            .chat_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt.system.as_deref().is_some_and(|s| {
                    s.contains("Calories: 600 kcal") && s.contains("EXCLUDE: fish, milk")
                })
            })
            .times(1)
            .returning(|_| Box::pin(ready(Ok(slot_reply("Poha")))));
        service
            .chat_client
            .expect_generate_with_text()
            .withf(|prompt| {
                prompt
                    .system
                    .as_deref()
                    .is_some_and(|s| !s.contains("Create a breakfast meal plan"))
            })
            .times(3)
            .returning(|_| Box::pin(ready(Ok(slot_reply("Dal")))));

        let plan = service
            .generate_meal_plan(GenerateMealPlanInput {
                profile_name: "ravi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(plan.meals[0].recipes[0].recipe_name, "Poha");
        assert_eq!(plan.meals.len(), 4);
    }

    #[tokio::test]
    async fn test_generate_meal_plan_unknown_profile() {
        let mut service = MockedService::mocked();
        service
            .profile_repository
            .expect_get_by_name()
            .returning(|_| Box::pin(ready(Ok(None))));

        let err = service
            .generate_meal_plan(GenerateMealPlanInput {
                profile_name: "ghost".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_generate_meal_plan_propagates_bad_model_output() {
        let mut service = MockedService::mocked();
        expect_profile(&mut service);
        service
            .chat_client
            .expect_generate_with_text()
            .times(1)
            .returning(|_| Box::pin(ready(Ok("I cannot help with that".to_string()))));

        let err = service
            .generate_meal_plan(GenerateMealPlanInput {
                profile_name: "ravi".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
