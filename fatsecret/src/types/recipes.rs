use serde::{Deserialize, Serialize};

/// Parameters for `recipes.search.v3`
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecipeSearchRequest {
    /// The term to search for
    pub search_expression: Option<String>,
    /// Maximum number of results per page
    pub max_results: Option<u32>,
    /// Zero-based page to return
    pub page_number: Option<u32>,
    /// Restrict matches to a recipe type
    pub recipe_type: Option<String>,
    /// Include recipe images in the results
    pub include_recipe_images: Option<bool>,
    /// Include recipe attributes in the results
    pub include_recipe_attributes: Option<bool>,
    /// Language code for the results
    pub language: Option<String>,
}

/// The ingredient names of a recipe summary
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeIngredientNames {
    /// The individual ingredient names
    pub ingredient: Vec<String>,
}

/// The headline nutrition of a recipe summary
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeNutrition {
    /// Energy in kilocalories
    pub calories: String,
    /// Carbohydrate in grams
    pub carbohydrate: String,
    /// Protein in grams
    pub protein: String,
    /// Fat in grams
    pub fat: String,
}

/// The type names attached to a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeTypes {
    /// The individual type names
    pub recipe_type: Vec<String>,
}

/// A recipe as returned in search results
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeSummary {
    /// Identifier of the recipe
    pub recipe_id: String,
    /// Name of the recipe
    pub recipe_name: String,
    /// Short description of the recipe
    pub recipe_description: Option<String>,
    /// URL of the recipe's image
    pub recipe_image: Option<String>,
    /// URL of the recipe on the FatSecret site
    pub recipe_url: Option<String>,
    /// Ingredient names of the recipe
    pub recipe_ingredients: Option<RecipeIngredientNames>,
    /// Headline nutrition of the recipe
    pub recipe_nutrition: Option<RecipeNutrition>,
    /// Type names attached to the recipe
    pub recipe_types: Option<RecipeTypes>,
}

/// One page of recipe search results
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipePage {
    /// Maximum number of results per page
    pub max_results: Option<String>,
    /// Total number of matches across all pages
    pub total_results: Option<String>,
    /// Zero-based page returned
    pub page_number: Option<String>,
    /// The matches on this page
    #[serde(default)]
    pub recipe: Vec<RecipeSummary>,
}

/// Response of `recipes.search.v3`
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeSearchResponse {
    /// The page of matches, absent when nothing matched
    pub recipes: Option<RecipePage>,
}

/// Parameters for `recipe.get.v2`
#[derive(Clone, Debug, Default, Serialize)]
pub struct RecipeGetRequest {
    /// Identifier of the recipe to fetch
    pub recipe_id: String,
    /// Language code for the result
    pub language: Option<String>,
}

/// One direction step of a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeDirection {
    /// The direction text
    pub recipe_direction: String,
}

/// The direction steps of a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeDirections {
    /// The individual steps
    pub direction: Vec<RecipeDirection>,
}

/// One ingredient line of a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeIngredient {
    /// The ingredient text
    pub recipe_ingredient: String,
}

/// The ingredient lines of a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeIngredients {
    /// The individual ingredient lines
    pub ingredient: Vec<RecipeIngredient>,
}

/// A category a recipe belongs to
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeCategory {
    /// Name of the category
    pub recipe_category_name: String,
    /// URL of the category on the FatSecret site
    pub recipe_category_url: Option<String>,
}

/// The categories a recipe belongs to
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeCategories {
    /// The individual categories
    pub recipe_category: Vec<RecipeCategory>,
}

/// The image URLs of a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeImages {
    /// The individual image URLs
    pub recipe_image: Vec<String>,
}

/// Per-serving nutrition of a recipe
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipeServing {
    /// Energy in kilocalories
    pub calories: Option<String>,
    /// Carbohydrate in grams
    pub carbohydrate: Option<String>,
    /// Protein in grams
    pub protein: Option<String>,
    /// Fat in grams
    pub fat: Option<String>,
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
}

/// The serving nutrition attached to a recipe
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeServingSizes {
    /// Nutrition of a single serving
    pub serving: RecipeServing,
}

/// A full recipe
#[derive(Clone, Debug, Deserialize)]
pub struct Recipe {
    /// Identifier of the recipe
    pub recipe_id: String,
    /// Name of the recipe
    pub recipe_name: String,
    /// The primary type of the recipe
    pub recipe_type: Option<String>,
    /// URL of the recipe on the FatSecret site
    pub recipe_url: Option<String>,
    /// Short description of the recipe
    pub recipe_description: Option<String>,
    /// Number of servings the recipe yields
    pub number_of_servings: Option<String>,
    /// Grams per portion
    pub grams_per_portion: Option<String>,
    /// Preparation time in minutes
    pub preparation_time_min: Option<String>,
    /// Cooking time in minutes
    pub cooking_time_min: Option<String>,
    /// Type names attached to the recipe
    pub recipe_types: Option<RecipeTypes>,
    /// Categories the recipe belongs to
    pub recipe_categories: Option<RecipeCategories>,
    /// Image URLs of the recipe
    pub recipe_images: Option<RecipeImages>,
    /// Direction steps of the recipe
    pub directions: Option<RecipeDirections>,
    /// Ingredient lines of the recipe
    pub ingredients: Option<RecipeIngredients>,
    /// Per-serving nutrition of the recipe
    pub serving_sizes: Option<RecipeServingSizes>,
}

/// Response of `recipe.get.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeGetResponse {
    /// The requested recipe
    pub recipe: Recipe,
}

/// A recipe type entry
///
/// Older responses wrap each name in an object while newer ones return
/// the bare string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeTypeEntry {
    /// A bare type name
    Name(String),
    /// A wrapped type name
    Wrapped {
        /// The type name
        recipe_type: String,
    },
}

impl RecipeTypeEntry {
    /// The type name regardless of wrapping
    pub fn name(&self) -> &str {
        match self {
            RecipeTypeEntry::Name(name) => name,
            RecipeTypeEntry::Wrapped { recipe_type } => recipe_type,
        }
    }
}

/// The recipe types defined by the platform
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeTypeList {
    /// The individual entries
    pub recipe_type: Vec<RecipeTypeEntry>,
}

/// Response of `recipe_types.get.v2`
#[derive(Clone, Debug, Deserialize)]
pub struct RecipeTypesResponse {
    /// The recipe types defined by the platform
    pub recipe_types: RecipeTypeList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_type_entries_decode_both_shapes() {
        let response: RecipeTypesResponse = serde_json::from_str(
            r#"{"recipe_types":{"recipe_type":["Appetizer",{"recipe_type":"Soup"}]}}"#,
        )
        .unwrap();

        let names: Vec<&str> = response
            .recipe_types
            .recipe_type
            .iter()
            .map(RecipeTypeEntry::name)
            .collect();
        assert_eq!(names, ["Appetizer", "Soup"]);
    }

    #[test]
    fn empty_recipe_search_decodes_without_matches() {
        let response: RecipeSearchResponse = serde_json::from_str(
            r#"{"recipes":{"max_results":"20","total_results":"0","page_number":"0"}}"#,
        )
        .unwrap();

        let page = response.recipes.unwrap();
        assert!(page.recipe.is_empty());
        assert_eq!(page.total_results.as_deref(), Some("0"));
    }
}
