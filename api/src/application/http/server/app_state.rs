use std::sync::Arc;

use mealmetric_core::application::MealmetricService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealmetricService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealmetricService) -> Self {
        Self { args, service }
    }
}
