use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{FoodCandidate, FoodDetail, NutritionReport},
        value_objects::LookupNutritionInput,
    },
};

/// Boundary to the external food database. Implementations own the network
/// call; the domain only consumes the returned structures.
#[cfg_attr(test, mockall::automock)]
pub trait FoodDataPort: Send + Sync {
    fn search_foods(
        &self,
        query: String,
        page_size: i32,
    ) -> impl Future<Output = Result<Vec<FoodCandidate>, CoreError>> + Send;

    fn get_food_detail(
        &self,
        fdc_id: i64,
    ) -> impl Future<Output = Result<FoodDetail, CoreError>> + Send;
}

pub trait NutritionService: Send + Sync {
    fn lookup_nutrition(
        &self,
        input: LookupNutritionInput,
    ) -> impl Future<Output = Result<NutritionReport, CoreError>> + Send;
}
