use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{
        ENERGY_NUTRIENT_ID, KJ_PER_KCAL, NutrientBreakdown, NutrientReading, NutrientValue,
        QuantityMode, QuantityRequest, ServingInfo,
    },
};

/// Turns raw per-100g readings into a per-100g / per-serving / total
/// breakdown for the requested quantity.
///
/// Rounding to 2 decimals happens independently at every derived stage, so
/// totals are reproducible from the per-serving values as shown, not from a
/// single combined multiplication.
pub fn compute_breakdown(
    raw_nutrients: &[NutrientReading],
    serving: &ServingInfo,
    quantity: &QuantityRequest,
) -> Result<NutrientBreakdown, CoreError> {
    let per_100g: Vec<NutrientValue> = raw_nutrients.iter().filter_map(normalize_reading).collect();
    if per_100g.is_empty() {
        return Err(CoreError::NoNutrientData);
    }

    let serving_factor = if serving.size_unit == "g" {
        serving.size_value / 100.0
    } else {
        1.0
    };
    let per_serving = scale(&per_100g, serving_factor);

    let multiplier = resolve_multiplier(serving, quantity);
    let total = scale(&per_serving, multiplier);

    Ok(NutrientBreakdown {
        per_100g,
        per_serving,
        total,
    })
}

/// How many provider-defined servings the requested quantity amounts to.
pub fn resolve_multiplier(serving: &ServingInfo, quantity: &QuantityRequest) -> f64 {
    match quantity.mode {
        QuantityMode::Servings => quantity.amount,
        QuantityMode::Grams => {
            if serving.size_unit == "g" {
                quantity.amount / serving.size_value
            } else {
                // serving size is not in grams; read the amount against 100g
                quantity.amount / 100.0
            }
        }
    }
}

fn normalize_reading(reading: &NutrientReading) -> Option<NutrientValue> {
    let amount = reading.amount?;
    if amount == 0.0 {
        return None;
    }

    if reading.nutrient_id == ENERGY_NUTRIENT_ID {
        let value = if reading.unit.eq_ignore_ascii_case("kj") {
            round2(amount / KJ_PER_KCAL)
        } else {
            amount
        };
        return Some(NutrientValue {
            nutrient_id: reading.nutrient_id,
            name: reading.name.clone(),
            value,
            unit: "kcal".to_string(),
        });
    }

    Some(NutrientValue {
        nutrient_id: reading.nutrient_id,
        name: reading.name.clone(),
        value: amount,
        unit: reading.unit.clone(),
    })
}

fn scale(values: &[NutrientValue], factor: f64) -> Vec<NutrientValue> {
    values
        .iter()
        .map(|v| NutrientValue {
            nutrient_id: v.nutrient_id,
            name: v.name.clone(),
            value: round2(v.value * factor),
            unit: v.unit.clone(),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(nutrient_id: i64, name: &str, amount: Option<f64>, unit: &str) -> NutrientReading {
        NutrientReading {
            nutrient_id,
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
        }
    }

    fn grams_serving(size_value: f64) -> ServingInfo {
        ServingInfo {
            size_value,
            size_unit: "g".to_string(),
            household_text: "N/A".to_string(),
        }
    }

    fn servings(amount: f64) -> QuantityRequest {
        QuantityRequest {
            mode: QuantityMode::Servings,
            amount,
        }
    }

    fn grams(amount: f64) -> QuantityRequest {
        QuantityRequest {
            mode: QuantityMode::Grams,
            amount,
        }
    }

    #[test]
    fn absent_and_zero_amounts_are_dropped() {
        let readings = vec![
            reading(1003, "Protein", Some(0.26), "g"),
            reading(1004, "Total lipid (fat)", None, "g"),
            reading(1005, "Carbohydrate, by difference", Some(0.0), "g"),
        ];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(100.0), &servings(1.0)).unwrap();
        assert_eq!(breakdown.per_100g.len(), 1);
        assert_eq!(breakdown.per_100g[0].name, "Protein");
    }

    #[test]
    fn all_unusable_readings_fail_with_no_nutrient_data() {
        let readings = vec![
            reading(1003, "Protein", Some(0.0), "g"),
            reading(1004, "Total lipid (fat)", None, "g"),
        ];

        let result = compute_breakdown(&readings, &grams_serving(100.0), &servings(1.0));
        assert_eq!(result.unwrap_err(), CoreError::NoNutrientData);
    }

    #[test]
    fn kilojoule_energy_converts_to_kilocalories() {
        let readings = vec![reading(ENERGY_NUTRIENT_ID, "Energy", Some(418.4), "kJ")];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(100.0), &servings(1.0)).unwrap();
        assert_eq!(breakdown.per_100g[0].value, 100.0);
        assert_eq!(breakdown.per_100g[0].unit, "kcal");
    }

    #[test]
    fn kilocalorie_energy_passes_through_with_kcal_label() {
        let readings = vec![reading(ENERGY_NUTRIENT_ID, "Energy", Some(52.0), "KCAL")];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(100.0), &servings(1.0)).unwrap();
        assert_eq!(breakdown.per_100g[0].value, 52.0);
        assert_eq!(breakdown.per_100g[0].unit, "kcal");
    }

    #[test]
    fn per_serving_scales_by_gram_serving_size() {
        let readings = vec![reading(1003, "Protein", Some(10.0), "g")];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(50.0), &servings(1.0)).unwrap();
        assert_eq!(breakdown.per_serving[0].value, 5.0);
    }

    #[test]
    fn non_gram_serving_unit_maps_one_to_one() {
        let serving = ServingInfo {
            size_value: 240.0,
            size_unit: "ml".to_string(),
            household_text: "1 cup".to_string(),
        };
        let readings = vec![reading(1003, "Protein", Some(3.4), "g")];

        let breakdown = compute_breakdown(&readings, &serving, &servings(1.0)).unwrap();
        assert_eq!(breakdown.per_serving[0].value, 3.4);
        assert_eq!(breakdown.total[0].value, 3.4);
    }

    #[test]
    fn rounding_happens_at_each_stage_independently() {
        // 1.11 per 100g at a 50g serving: per-serving rounds 0.555 up to
        // 0.56, so two servings total 1.12, not the single-multiply 1.11.
        let readings = vec![reading(1003, "Protein", Some(1.11), "g")];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(50.0), &servings(2.0)).unwrap();
        assert_eq!(breakdown.per_serving[0].value, 0.56);
        assert_eq!(breakdown.total[0].value, 1.12);
    }

    #[test]
    fn grams_mode_divides_by_gram_serving_size() {
        let serving = grams_serving(100.0);
        assert_eq!(resolve_multiplier(&serving, &grams(200.0)), 2.0);

        let readings = vec![reading(ENERGY_NUTRIENT_ID, "Energy", Some(52.0), "kcal")];
        let by_grams = compute_breakdown(&readings, &serving, &grams(200.0)).unwrap();
        let by_servings = compute_breakdown(&readings, &serving, &servings(2.0)).unwrap();
        assert_eq!(by_grams.total, by_servings.total);
    }

    #[test]
    fn grams_mode_against_non_gram_serving_reads_per_100g() {
        let serving = ServingInfo {
            size_value: 240.0,
            size_unit: "ml".to_string(),
            household_text: "1 cup".to_string(),
        };
        assert_eq!(resolve_multiplier(&serving, &grams(150.0)), 1.5);
    }

    #[test]
    fn provider_order_is_preserved() {
        let readings = vec![
            reading(1003, "Protein", Some(0.26), "g"),
            reading(ENERGY_NUTRIENT_ID, "Energy", Some(52.0), "kcal"),
            reading(1005, "Carbohydrate, by difference", Some(13.81), "g"),
        ];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(100.0), &servings(1.0)).unwrap();
        let names: Vec<&str> = breakdown.total.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Protein", "Energy", "Carbohydrate, by difference"]
        );
    }

    #[test]
    fn energy_accessors_read_the_energy_row() {
        let readings = vec![
            reading(1003, "Protein", Some(0.26), "g"),
            reading(ENERGY_NUTRIENT_ID, "Energy", Some(52.0), "kcal"),
        ];

        let breakdown =
            compute_breakdown(&readings, &grams_serving(100.0), &servings(3.0)).unwrap();
        assert_eq!(breakdown.energy_per_serving(), Some(52.0));
        assert_eq!(breakdown.energy_total(), Some(156.0));
    }
}
