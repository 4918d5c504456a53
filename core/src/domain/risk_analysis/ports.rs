use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    risk_analysis::{
        entities::RiskReport,
        value_objects::{AnalyzeLabelImageInput, AnalyzeLabelTextInput},
    },
};

pub trait RiskAnalysisService: Send + Sync {
    /// Reads the label text off the image, then runs the allergen pipeline
    fn analyze_image(
        &self,
        input: AnalyzeLabelImageInput,
    ) -> impl Future<Output = Result<RiskReport, CoreError>> + Send;

    fn analyze_text(
        &self,
        input: AnalyzeLabelTextInput,
    ) -> impl Future<Output = Result<RiskReport, CoreError>> + Send;
}
