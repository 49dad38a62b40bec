use serde::{Deserialize, Serialize};

use super::shared::{Food, ValueWrapper};

/// Parameters for `foods.search.v3`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodSearchRequest {
    /// The term to search for
    pub search_expression: Option<String>,
    /// Zero-based page to return
    pub page_number: Option<u32>,
    /// Maximum number of results per page
    pub max_results: Option<u32>,
    /// Include sub-category names in the results
    pub include_sub_categories: Option<bool>,
    /// Include food images in the results
    pub include_food_images: Option<bool>,
    /// Include food attributes in the results
    pub include_food_attributes: Option<bool>,
    /// Mark the default serving on each food
    pub flag_default_serving: Option<bool>,
    /// Region code biasing the results
    pub region: Option<String>,
    /// Language code for the results
    pub language: Option<String>,
}

/// The foods matched by a search
#[derive(Clone, Debug, Deserialize)]
pub struct FoodList {
    /// The matched foods
    pub food: Vec<Food>,
}

/// One page of food search results
#[derive(Clone, Debug, Deserialize)]
pub struct FoodSearchPage {
    /// Maximum number of results per page
    pub max_results: String,
    /// Total number of matches across all pages
    pub total_results: String,
    /// Zero-based page returned
    pub page_number: String,
    /// The matches on this page
    pub results: FoodList,
}

/// Response of `foods.search.v3`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodSearchResponse {
    /// The page of matches
    pub foods_search: FoodSearchPage,
}

/// Parameters for `food.get.v4`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodGetRequest {
    /// Identifier of the food to fetch
    pub food_id: Option<String>,
    /// Include sub-category names in the result
    pub include_sub_categories: Option<bool>,
    /// Include food images in the result
    pub include_food_images: Option<bool>,
    /// Include food attributes in the result
    pub include_food_attributes: Option<bool>,
    /// Mark the default serving
    pub flag_default_serving: Option<bool>,
    /// Region code biasing the result
    pub region: Option<String>,
    /// Language code for the result
    pub language: Option<String>,
}

/// Response of `food.get.v4`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodGetResponse {
    /// The requested food
    pub food: Food,
}

/// Parameters for `food.find_id_for_barcode`
#[derive(Clone, Debug, Default, Serialize)]
pub struct BarcodeRequest {
    /// The GTIN-13 barcode to look up
    pub barcode: String,
    /// Region code biasing the lookup
    pub region: Option<String>,
    /// Language code for the lookup
    pub language: Option<String>,
}

/// Response of `food.find_id_for_barcode`
#[derive(Clone, Debug, Deserialize)]
pub struct BarcodeResponse {
    /// The identifier of the food matching the barcode
    pub food_id: ValueWrapper,
}

/// Parameters for `foods.autocomplete.v2`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodAutocompleteRequest {
    /// The partial term to complete
    pub expression: String,
    /// Maximum number of suggestions
    pub max_results: Option<u32>,
    /// Region code biasing the suggestions
    pub region: Option<String>,
}

/// The suggestions for a partial term
#[derive(Clone, Debug, Deserialize)]
pub struct SuggestionList {
    /// The individual suggestions
    pub suggestion: Vec<Suggestion>,
}

/// A single autocomplete suggestion
#[derive(Clone, Debug, Deserialize)]
pub struct Suggestion {
    /// The suggested term
    pub suggestion: String,
}

/// Response of `foods.autocomplete.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodAutocompleteResponse {
    /// The suggestions for the term
    pub suggestions: SuggestionList,
}

/// The kind of brand to list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandType {
    /// Packaged-goods brands
    Brand,
    /// Restaurant chains
    Restaurant,
    /// Generic foods
    Generic,
}

/// Parameters for `food_brands.get.v2`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodBrandsRequest {
    /// The kind of brand to list
    pub brand_type: Option<BrandType>,
    /// Restrict to brands starting with this text
    pub starts_with: Option<String>,
    /// Zero-based page to return
    pub page_number: Option<u32>,
    /// Maximum number of results per page
    pub max_results: Option<u32>,
}

/// A single brand
#[derive(Clone, Debug, Deserialize)]
pub struct FoodBrand {
    /// Name of the brand
    pub brand_name: String,
    /// The kind of brand
    pub brand_type: BrandType,
}

/// One page of brands
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FoodBrandPage {
    /// The brands on this page
    #[serde(default)]
    pub brand: Vec<FoodBrand>,
    /// Maximum number of results per page
    pub max_results: Option<String>,
    /// Total number of brands across all pages
    pub total_results: Option<String>,
    /// Zero-based page returned
    pub page_number: Option<String>,
}

/// Response of `food_brands.get.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodBrandsResponse {
    /// The page of brands, absent when nothing matched
    pub food_brands: Option<FoodBrandPage>,
}

/// Parameters for `food_categories.get.v2`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodCategoriesRequest {
    /// Region code for the category set
    pub region: Option<String>,
    /// Language code for the category names
    pub language: Option<String>,
}

/// A top-level food category
#[derive(Clone, Debug, Deserialize)]
pub struct FoodCategory {
    /// Identifier of the category
    pub food_category_id: String,
    /// Name of the category
    pub food_category_name: String,
}

/// The categories defined by the platform
#[derive(Clone, Debug, Deserialize)]
pub struct FoodCategoryList {
    /// The individual categories
    pub food_category: Vec<FoodCategory>,
}

/// Response of `food_categories.get.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodCategoriesResponse {
    /// The categories defined by the platform
    pub food_categories: FoodCategoryList,
}

/// Parameters for `food_sub_categories.get.v2`
#[derive(Clone, Debug, Default, Serialize)]
pub struct FoodSubCategoriesRequest {
    /// The parent category to list sub-categories of
    pub food_category_id: String,
}

/// A sub-category beneath a food category
#[derive(Clone, Debug, Deserialize)]
pub struct FoodSubCategory {
    /// Identifier of the sub-category
    pub food_sub_category_id: String,
    /// Identifier of the parent category
    pub food_category_id: String,
    /// Name of the sub-category
    pub food_sub_category_name: String,
}

/// The sub-categories of a category
#[derive(Clone, Debug, Deserialize)]
pub struct FoodSubCategoryList {
    /// The individual sub-categories
    pub food_sub_category: Vec<FoodSubCategory>,
}

/// Response of `food_sub_categories.get.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct FoodSubCategoriesResponse {
    /// The sub-categories of the requested category
    pub food_sub_categories: FoodSubCategoryList,
}
