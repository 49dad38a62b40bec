use serde::{Deserialize, Serialize};

use super::shared::Food;

/// A food the user has already eaten, provided as context for parsing
#[derive(Clone, Debug, Default, Serialize)]
pub struct EatenFood {
    /// Identifier of the eaten food
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    /// Identifier of the serving eaten
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_id: Option<String>,
    /// Number of units eaten
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_units: Option<f64>,
    /// The meal the food was eaten at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
    /// How long ago the food was eaten, in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_ago: Option<u32>,
}

/// Request body for the natural language processing endpoint
#[derive(Clone, Debug, Default, Serialize)]
pub struct NaturalLanguageRequest {
    /// The free-form description of what was eaten
    pub user_input: String,
    /// Attach full food data to each parsed food
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_food_data: Option<bool>,
    /// Region code biasing the parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Language code of the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Foods already eaten, as context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_foods: Option<Vec<EatenFood>>,
}

/// Nutritional content of an eaten quantity
#[derive(Clone, Debug, Deserialize)]
pub struct TotalNutritionalContent {
    /// Energy in kilocalories
    pub calories: String,
    /// Carbohydrate in grams
    pub carbohydrate: String,
    /// Protein in grams
    pub protein: String,
    /// Fat in grams
    pub fat: String,
    /// Saturated fat in grams
    pub saturated_fat: Option<String>,
    /// Polyunsaturated fat in grams
    pub polyunsaturated_fat: Option<String>,
    /// Monounsaturated fat in grams
    pub monounsaturated_fat: Option<String>,
    /// Cholesterol in milligrams
    pub cholesterol: Option<String>,
    /// Sodium in milligrams
    pub sodium: Option<String>,
    /// Potassium in milligrams
    pub potassium: Option<String>,
    /// Fiber in grams
    pub fiber: Option<String>,
    /// Sugar in grams
    pub sugar: Option<String>,
    /// Vitamin A as a percentage of the daily value
    pub vitamin_a: Option<String>,
    /// Vitamin C as a percentage of the daily value
    pub vitamin_c: Option<String>,
    /// Calcium as a percentage of the daily value
    pub calcium: Option<String>,
    /// Iron as a percentage of the daily value
    pub iron: Option<String>,
}

/// What the parser concluded was eaten
#[derive(Clone, Debug, Deserialize)]
pub struct Eaten {
    /// Singular name of the food
    pub food_name_singular: String,
    /// Plural name of the food
    pub food_name_plural: String,
    /// Singular description of the eaten quantity
    pub singular_description: Option<String>,
    /// Plural description of the eaten quantity
    pub plural_description: Option<String>,
    /// Number of units eaten
    pub units: Option<f64>,
    /// Description of the metric quantity
    pub metric_description: Option<String>,
    /// Total metric amount eaten
    pub total_metric_amount: Option<f64>,
    /// Metric amount per unit
    pub per_unit_metric_amount: Option<f64>,
    /// Nutrition of the eaten quantity
    pub total_nutritional_content: TotalNutritionalContent,
}

/// The serving the parser suggests logging
#[derive(Clone, Debug, Deserialize)]
pub struct SuggestedServing {
    /// Identifier of the suggested serving
    pub serving_id: u64,
    /// Description of the suggested serving
    pub serving_description: String,
    /// Metric description of the suggested serving
    pub metric_serving_description: Option<String>,
    /// Metric amount of the suggested serving
    pub metric_measure_amount: Option<f64>,
    /// Number of units to log
    pub number_of_units: Option<String>,
    /// Custom description of the serving, when applicable
    pub custom_serving_description: Option<String>,
}

/// One food parsed out of the input
#[derive(Clone, Debug, Deserialize)]
pub struct ParsedFood {
    /// Identifier of the matched food
    pub food_id: u64,
    /// The name the food was entered as
    pub food_entry_name: String,
    /// What was eaten
    pub eaten: Eaten,
    /// The serving suggested for logging
    pub suggested_serving: SuggestedServing,
    /// Full food data, present when requested
    pub food: Option<Food>,
}

/// Response of the natural language processing endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct NaturalLanguageResponse {
    /// The foods parsed out of the input
    pub food_response: Vec<ParsedFood>,
}
