use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, nutrient::entities::NutrientReport};

pub trait NutrientService: Send + Sync {
    fn analyze_nutrients(
        &self,
        query: String,
    ) -> impl Future<Output = Result<NutrientReport, CoreError>> + Send;
}
