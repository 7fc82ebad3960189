use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{
    common::{FoodDataConfig, entities::app_errors::CoreError},
    nutrition::{
        entities::{FoodCandidate, FoodDetail, RawNutrientEntry},
        ports::FoodDataPort,
    },
};

/// Client for the USDA FoodData Central search and detail endpoints.
#[derive(Debug, Clone)]
pub struct UsdaFoodDataClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    description: Option<String>,
    fdc_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailResponse {
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
    household_serving_full_text: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<WireNutrient>,
}

#[derive(Debug, Deserialize)]
struct WireNutrient {
    nutrient: Option<WireNutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNutrientInfo {
    id: Option<i64>,
    name: Option<String>,
    unit_name: Option<String>,
}

impl UsdaFoodDataClient {
    pub fn new(config: FoodDataConfig) -> Self {
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
            client: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("FoodData Central request failed: {}", e);
                CoreError::ExternalServiceError(format!("USDA API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("FoodData Central error: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned error: {status} - {body}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse FoodData Central response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse USDA response: {e}"))
        })
    }
}

impl From<WireNutrient> for RawNutrientEntry {
    fn from(wire: WireNutrient) -> Self {
        let info = wire.nutrient;

        Self {
            nutrient_id: info.as_ref().and_then(|n| n.id),
            name: info.as_ref().and_then(|n| n.name.clone()),
            unit: info.as_ref().and_then(|n| n.unit_name.clone()),
            amount: wire.amount,
        }
    }
}

impl FoodDataPort for UsdaFoodDataClient {
    async fn search_foods(
        &self,
        query: String,
        page_size: i32,
    ) -> Result<Vec<FoodCandidate>, CoreError> {
        let url = format!("{}/foods/search", self.base_url);
        let response: SearchResponse = self
            .get_json(
                url,
                &[
                    ("query", query),
                    ("api_key", self.api_key.clone()),
                    ("pageSize", page_size.to_string()),
                ],
            )
            .await?;

        Ok(response
            .foods
            .into_iter()
            .filter_map(|food| {
                Some(FoodCandidate {
                    description: food.description?,
                    fdc_id: food.fdc_id?,
                    raw_nutrients: Vec::new(),
                })
            })
            .collect())
    }

    async fn get_food_detail(&self, fdc_id: i64) -> Result<FoodDetail, CoreError> {
        let url = format!("{}/food/{}", self.base_url, fdc_id);
        let response: DetailResponse = self
            .get_json(url, &[("api_key", self.api_key.clone())])
            .await?;

        Ok(FoodDetail {
            serving_size: response.serving_size,
            serving_size_unit: response.serving_size_unit,
            household_serving_full_text: response.household_serving_full_text,
            food_nutrients: response
                .food_nutrients
                .into_iter()
                .map(RawNutrientEntry::from)
                .collect(),
        })
    }
}
