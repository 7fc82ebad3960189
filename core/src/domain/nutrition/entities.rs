use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// FoodData Central nutrient id for Energy.
pub const ENERGY_NUTRIENT_ID: i64 = 1008;

/// Kilojoules per kilocalorie.
pub const KJ_PER_KCAL: f64 = 4.184;

pub const NUTRITION_SOURCE: &str = "USDA FoodData Central";

/// One nutrient row as reported by the provider, on a per-100g basis.
/// An absent or exactly-zero amount means the provider has no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReading {
    pub nutrient_id: i64,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientValue {
    pub nutrient_id: i64,
    pub name: String,
    pub value: f64,
    pub unit: String,
}

/// What "one serving" means for a food, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingInfo {
    pub size_value: f64,
    pub size_unit: String,
    pub household_text: String,
}

impl Default for ServingInfo {
    fn default() -> Self {
        Self {
            size_value: 100.0,
            size_unit: "g".to_string(),
            household_text: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuantityMode {
    Servings,
    Grams,
}

impl QuantityMode {
    pub fn as_str(&self) -> &str {
        match self {
            QuantityMode::Servings => "servings",
            QuantityMode::Grams => "grams",
        }
    }
}

impl From<&str> for QuantityMode {
    fn from(s: &str) -> Self {
        match s {
            "grams" => QuantityMode::Grams,
            "servings" => QuantityMode::Servings,
            // any other mode string counts the amount as whole servings
            _ => QuantityMode::Servings,
        }
    }
}

/// User-requested quantity. `amount > 0` is the caller's precondition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityRequest {
    pub mode: QuantityMode,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientBreakdown {
    pub per_100g: Vec<NutrientValue>,
    pub per_serving: Vec<NutrientValue>,
    pub total: Vec<NutrientValue>,
}

impl NutrientBreakdown {
    pub fn energy_per_serving(&self) -> Option<f64> {
        Self::energy_of(&self.per_serving)
    }

    pub fn energy_total(&self) -> Option<f64> {
        Self::energy_of(&self.total)
    }

    fn energy_of(values: &[NutrientValue]) -> Option<f64> {
        values
            .iter()
            .find(|v| v.nutrient_id == ENERGY_NUTRIENT_ID)
            .map(|v| v.value)
    }
}

/// A food returned by the provider's search, candidate for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub description: String,
    pub fdc_id: i64,
    #[serde(default)]
    pub raw_nutrients: Vec<NutrientReading>,
}

/// One entry of the provider's detail response before validation. Missing
/// sub-fields mark the entry as malformed; it is skipped, not escalated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNutrientEntry {
    pub nutrient_id: Option<i64>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    pub serving_size: Option<f64>,
    pub serving_size_unit: Option<String>,
    pub household_serving_full_text: Option<String>,
    pub food_nutrients: Vec<RawNutrientEntry>,
}

impl FoodDetail {
    pub fn serving_info(&self) -> ServingInfo {
        let defaults = ServingInfo::default();

        ServingInfo {
            size_value: self
                .serving_size
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(defaults.size_value),
            size_unit: self
                .serving_size_unit
                .clone()
                .unwrap_or(defaults.size_unit),
            household_text: self
                .household_serving_full_text
                .clone()
                .unwrap_or(defaults.household_text),
        }
    }

    pub fn nutrient_readings(&self) -> Vec<NutrientReading> {
        self.food_nutrients
            .iter()
            .filter_map(|entry| {
                Some(NutrientReading {
                    nutrient_id: entry.nutrient_id?,
                    name: entry.name.clone()?,
                    amount: entry.amount,
                    unit: entry.unit.clone()?,
                })
            })
            .collect()
    }
}

/// Full result of a nutrition lookup, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
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
    pub breakdown: NutrientBreakdown,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_mode_parses_known_values() {
        assert_eq!(QuantityMode::from("grams"), QuantityMode::Grams);
        assert_eq!(QuantityMode::from("servings"), QuantityMode::Servings);
    }

    #[test]
    fn unrecognized_quantity_mode_counts_servings() {
        assert_eq!(QuantityMode::from("cups"), QuantityMode::Servings);
        assert_eq!(QuantityMode::from(""), QuantityMode::Servings);
    }

    #[test]
    fn serving_info_defaults_when_provider_omits_fields() {
        let detail = FoodDetail {
            serving_size: None,
            serving_size_unit: None,
            household_serving_full_text: None,
            food_nutrients: Vec::new(),
        };

        let serving = detail.serving_info();
        assert_eq!(serving.size_value, 100.0);
        assert_eq!(serving.size_unit, "g");
        assert_eq!(serving.household_text, "N/A");
    }

    #[test]
    fn malformed_nutrient_entries_are_skipped() {
        let detail = FoodDetail {
            serving_size: Some(182.0),
            serving_size_unit: Some("g".to_string()),
            household_serving_full_text: Some("1 medium apple".to_string()),
            food_nutrients: vec![
                RawNutrientEntry {
                    nutrient_id: Some(ENERGY_NUTRIENT_ID),
                    name: Some("Energy".to_string()),
                    unit: Some("kcal".to_string()),
                    amount: Some(52.0),
                },
                RawNutrientEntry {
                    nutrient_id: None,
                    name: Some("Protein".to_string()),
                    unit: Some("g".to_string()),
                    amount: Some(0.26),
                },
                RawNutrientEntry {
                    nutrient_id: Some(1004),
                    name: None,
                    unit: Some("g".to_string()),
                    amount: Some(0.17),
                },
            ],
        };

        let readings = detail.nutrient_readings();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].name, "Energy");
    }
}
