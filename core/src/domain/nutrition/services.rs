use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::{FoodCandidate, NUTRITION_SOURCE, NutritionReport},
        matcher::select_best_food,
        ports::{FoodDataPort, NutritionService},
        scaler::{compute_breakdown, resolve_multiplier},
        value_objects::LookupNutritionInput,
    },
    user::ports::UserRepository,
};

const SEARCH_PAGE_SIZE: i32 = 5;

impl<U, H, F, HC> NutritionService for Service<U, H, F, HC>
where
    U: UserRepository,
    H: HasherRepository,
    F: FoodDataPort,
    HC: HealthCheckRepository,
{
    async fn lookup_nutrition(
        &self,
        input: LookupNutritionInput,
    ) -> Result<NutritionReport, CoreError> {
        // 1. Search the provider for candidate foods
        let candidates = self
            .food_data_client
            .search_foods(input.dish_name.clone(), SEARCH_PAGE_SIZE)
            .await?;
        if candidates.is_empty() {
            return Err(CoreError::DishNotFound);
        }

        // 2. Pick the closest match, or give up
        let best = select_best_food(&candidates, &input.dish_name, self.match_threshold)
            .ok_or(CoreError::DishNotFound)?;

        // 3. Fetch the authoritative nutrient detail for the chosen food
        let detail = self.food_data_client.get_food_detail(best.fdc_id).await?;
        let chosen = FoodCandidate {
            description: best.description.clone(),
            fdc_id: best.fdc_id,
            raw_nutrients: detail.nutrient_readings(),
        };
        let serving = detail.serving_info();

        // 4. Scale to the requested quantity
        let breakdown = compute_breakdown(&chosen.raw_nutrients, &serving, &input.quantity)?;
        let total_servings = resolve_multiplier(&serving, &input.quantity);

        Ok(NutritionReport {
            dish_name: input.dish_name,
            selected_food: chosen.description,
            fdc_id: chosen.fdc_id,
            serving_size: format!("{} {}", serving.size_value, serving.size_unit),
            household_serving_text: serving.household_text,
            mode: input.quantity.mode,
            amount: input.quantity.amount,
            total_servings,
            calories_per_serving: breakdown.energy_per_serving(),
            total_calories: breakdown.energy_total(),
            breakdown,
            source: NUTRITION_SOURCE.to_string(),
        })
    }
}
