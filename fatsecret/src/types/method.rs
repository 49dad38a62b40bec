use std::fmt;

/// The `server.api` methods this client can invoke
///
/// The wire name carries the method's version; standalone endpoints
/// such as image recognition are addressed by URL instead and do not
/// appear here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
    /// `foods.search.v3`
    FoodsSearchV3,
    /// `food.get.v4`
    FoodGetV4,
    /// `food.find_id_for_barcode`
    FoodFindIdForBarcode,
    /// `foods.autocomplete.v2`
    FoodsAutocompleteV2,
    /// `food_brands.get.v2`
    FoodBrandsGetV2,
    /// `food_categories.get.v2`
    FoodCategoriesGetV2,
    /// `food_sub_categories.get.v2`
    FoodSubCategoriesGetV2,
    /// `recipes.search.v3`
    RecipesSearchV3,
    /// `recipe.get.v2`
    RecipeGetV2,
    /// `recipe_types.get.v2`
    RecipeTypesGetV2,
}

impl ApiMethod {
    /// The name of the method on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            ApiMethod::FoodsSearchV3 => "foods.search.v3",
            ApiMethod::FoodGetV4 => "food.get.v4",
            ApiMethod::FoodFindIdForBarcode => "food.find_id_for_barcode",
            ApiMethod::FoodsAutocompleteV2 => "foods.autocomplete.v2",
            ApiMethod::FoodBrandsGetV2 => "food_brands.get.v2",
            ApiMethod::FoodCategoriesGetV2 => "food_categories.get.v2",
            ApiMethod::FoodSubCategoriesGetV2 => "food_sub_categories.get.v2",
            ApiMethod::RecipesSearchV3 => "recipes.search.v3",
            ApiMethod::RecipeGetV2 => "recipe.get.v2",
            ApiMethod::RecipeTypesGetV2 => "recipe_types.get.v2",
        }
    }
}

impl AsRef<str> for ApiMethod {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
