use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalorieRequest {
    #[validate(length(min = 1, max = 255, message = "dish_name must not be empty"))]
    pub dish_name: String,

    /// Requested quantity; read against `mode`. `amount` is accepted as an
    /// alias for compatibility.
    #[serde(alias = "amount")]
    pub servings: f64,

    /// "servings" or "grams"; anything else counts the amount as servings.
    #[serde(default)]
    pub mode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_amount_as_an_alias_for_servings() {
        let request: CalorieRequest = serde_json::from_value(serde_json::json!({
            "dish_name": "Apple",
            "amount": 2.0,
            "mode": "grams"
        }))
        .unwrap();

        assert_eq!(request.servings, 2.0);
        assert_eq!(request.mode.as_deref(), Some("grams"));
    }

    #[test]
    fn mode_is_optional() {
        let request: CalorieRequest = serde_json::from_value(serde_json::json!({
            "dish_name": "Apple",
            "servings": 1.0
        }))
        .unwrap();

        assert_eq!(request.mode, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_dish_name_is_rejected() {
        let request = CalorieRequest {
            dish_name: String::new(),
            servings: 1.0,
            mode: None,
        };
        assert!(request.validate().is_err());
    }
}
