use serde::{Deserialize, Serialize};

/// A boolean the platform renders either natively or as a string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    /// A native JSON boolean
    Bool(bool),
    /// A stringly-typed boolean such as `"true"` or `"1"`
    Text(String),
}

impl Flag {
    /// Interprets the flag as a boolean
    pub fn as_bool(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Text(value) => value == "true" || value == "1",
        }
    }
}

/// A single-field wrapper the platform uses for scalar answers
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ValueWrapper {
    /// The wrapped value
    pub value: String,
}

/// An image associated with a food
#[derive(Clone, Debug, Deserialize)]
pub struct FoodImage {
    /// URL of the image
    pub image_url: String,
    /// The kind of image, as reported by the platform
    pub image_type: String,
}

/// The images associated with a food
#[derive(Clone, Debug, Deserialize)]
pub struct FoodImages {
    /// The individual images
    pub food_image: Vec<FoodImage>,
}

/// A single serving of a food with its nutritional content
///
/// Numeric values arrive from the platform as strings and are passed
/// through untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Serving {
    /// Identifier of the serving
    pub serving_id: Option<String>,
    /// A human-readable description of the serving
    pub serving_description: Option<String>,
    /// URL of the serving on the FatSecret site
    pub serving_url: Option<String>,
    /// Description of the measurement used for this serving
    pub measurement_description: Option<String>,
    /// Number of units in this serving
    pub number_of_units: Option<String>,
    /// Metric quantity of the serving
    pub metric_serving_amount: Option<String>,
    /// Metric unit of the serving
    pub metric_serving_unit: Option<String>,
    /// Energy in kilocalories
    pub calories: Option<String>,
    /// Carbohydrate in grams
    pub carbohydrate: Option<String>,
    /// Fat in grams
    pub fat: Option<String>,
    /// Protein in grams
    pub protein: Option<String>,
    /// Fiber in grams
    pub fiber: Option<String>,
    /// Sugar in grams
    pub sugar: Option<String>,
    /// Sodium in milligrams
    pub sodium: Option<String>,
    /// Potassium in milligrams
    pub potassium: Option<String>,
    /// Saturated fat in grams
    pub saturated_fat: Option<String>,
    /// Monounsaturated fat in grams
    pub monounsaturated_fat: Option<String>,
    /// Polyunsaturated fat in grams
    pub polyunsaturated_fat: Option<String>,
    /// Cholesterol in milligrams
    pub cholesterol: Option<String>,
    /// Vitamin A as a percentage of the daily value
    pub vitamin_a: Option<String>,
    /// Vitamin C as a percentage of the daily value
    pub vitamin_c: Option<String>,
    /// Calcium as a percentage of the daily value
    pub calcium: Option<String>,
    /// Iron as a percentage of the daily value
    pub iron: Option<String>,
    /// Whether this is the default serving for the food
    pub flag_default_serving: Option<Flag>,
}

/// The servings defined for a food
#[derive(Clone, Debug, Deserialize)]
pub struct Servings {
    /// The individual servings
    pub serving: Vec<Serving>,
}

/// A food known to the platform
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Food {
    /// Identifier of the food
    pub food_id: Option<String>,
    /// Name of the food
    pub food_name: Option<String>,
    /// The kind of food, such as `Brand` or `Generic`
    pub food_type: Option<String>,
    /// URL of the food on the FatSecret site
    pub food_url: Option<String>,
    /// Images associated with the food
    pub food_images: Option<FoodImages>,
    /// Servings defined for the food
    pub servings: Option<Servings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_decode_from_booleans_and_strings() {
        let native: Flag = serde_json::from_str("true").unwrap();
        assert!(native.as_bool());

        let text: Flag = serde_json::from_str(r#""true""#).unwrap();
        assert!(text.as_bool());

        let negative: Flag = serde_json::from_str(r#""0""#).unwrap();
        assert!(!negative.as_bool());
    }

    #[test]
    fn foods_decode_with_nested_servings() {
        let food: Food = serde_json::from_str(
            r#"{
                "food_id": "35718",
                "food_name": "Apple",
                "food_type": "Generic",
                "servings": {
                    "serving": [
                        {
                            "serving_id": "32975",
                            "serving_description": "1 medium",
                            "calories": "95",
                            "flag_default_serving": "true"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let servings = food.servings.unwrap();
        assert_eq!(servings.serving.len(), 1);
        assert_eq!(servings.serving[0].calories.as_deref(), Some("95"));
        assert!(servings.serving[0]
            .flag_default_serving
            .as_ref()
            .unwrap()
            .as_bool());
    }
}
