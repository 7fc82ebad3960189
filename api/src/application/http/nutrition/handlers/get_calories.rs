use axum::extract::State;
use mealmetric_core::domain::nutrition::{
    entities::{NutrientValue, NutritionReport, QuantityMode, QuantityRequest},
    ports::NutritionService,
    value_objects::LookupNutritionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        nutrition::validators::CalorieRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalorieResponse {
    pub dish_name: String,
    pub selected_food: String,
    pub fdc_id: i64,
    pub serving_size: String,
    pub household_serving_text: String,
    pub mode: QuantityMode,
    pub amount: f64,
    pub total_servings: f64,
    pub calories_per_serving: Option<f64>,
    pub total_calories: Option<f64>,
    pub per_100g_nutrients: Vec<NutrientValue>,
    pub per_serving_nutrients: Vec<NutrientValue>,
    pub total_nutrients: Vec<NutrientValue>,
    pub source: String,
}

impl From<NutritionReport> for CalorieResponse {
    fn from(report: NutritionReport) -> Self {
        Self {
            dish_name: report.dish_name,
            selected_food: report.selected_food,
            fdc_id: report.fdc_id,
            serving_size: report.serving_size,
            household_serving_text: report.household_serving_text,
            mode: report.mode,
            amount: report.amount,
            total_servings: report.total_servings,
            calories_per_serving: report.calories_per_serving,
            total_calories: report.total_calories,
            per_100g_nutrients: report.breakdown.per_100g,
            per_serving_nutrients: report.breakdown.per_serving,
            total_nutrients: report.breakdown.total,
            source: report.source,
        }
    }
}

#[utoipa::path(
    post,
    path = "/get-calories",
    tag = "calories",
    summary = "Look up a dish's nutrient breakdown",
    description = "Matches the dish name against the food database and scales the nutrients to the requested quantity",
    request_body = CalorieRequest,
    responses(
        (status = 200, body = CalorieResponse),
        (status = 400, description = "Invalid servings"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Dish not found or no nutrient data")
    )
)]
pub async fn get_calories(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CalorieRequest>,
) -> Result<Response<CalorieResponse>, ApiError> {
    if payload.servings <= 0.0 {
        return Err(ApiError::BadRequest(
            "Invalid servings: must be positive".to_string(),
        ));
    }

    let mode = payload
        .mode
        .as_deref()
        .map(QuantityMode::from)
        .unwrap_or(QuantityMode::Servings);

    let report = state
        .service
        .lookup_nutrition(LookupNutritionInput {
            dish_name: payload.dish_name,
            quantity: QuantityRequest {
                mode,
                amount: payload.servings,
            },
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CalorieResponse::from(report)))
}
