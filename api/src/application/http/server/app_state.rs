use std::sync::Arc;

use nutriwise_core::application::NutriwiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriwiseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriwiseService) -> Self {
        Self { args, service }
    }
}
