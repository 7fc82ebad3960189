use crate::domain::nutrition::entities::QuantityRequest;

#[derive(Debug, Clone)]
pub struct LookupNutritionInput {
    pub dish_name: String,
    pub quantity: QuantityRequest,
}
