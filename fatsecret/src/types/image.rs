use serde::{Deserialize, Serialize};

use super::shared::Food;

/// Request body for the image recognition endpoint
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImageRecognitionRequest {
    /// The image to analyze, base64-encoded
    pub image_b64: String,
    /// Region code biasing the matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Language code for the matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Attach full food data to each match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_food_data: Option<bool>,
}

/// One food recognized in the image
#[derive(Clone, Debug, Deserialize)]
pub struct RecognizedFood {
    /// The recognizer's confidence in the match
    pub confidence: Option<f64>,
    /// The matched food
    pub food: Option<Food>,
}

/// Response of the image recognition endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct ImageRecognitionResponse {
    /// The foods recognized in the image
    pub results: Option<Vec<RecognizedFood>>,
}
