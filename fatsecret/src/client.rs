//! The high-level platform client

use std::{fmt, sync::Arc};

use fatsecret_auth::{AuthManager, AuthProvider, AuthStrategy};
use fatsecret_platform::{
    CryptoAdapter, HttpClient, MemoryStorage, ReqwestHttpClient, RingCrypto, StorageAdapter,
};

use crate::{
    environment::Environment,
    error::Error,
    service::{self, ApiService},
    types::*,
};

/// Options governing client construction
///
/// Only the credential configuration is required. Everything else
/// defaults to the production environment, an in-memory token cache,
/// the system RNG, and the bundled reqwest transport.
pub struct ClientOptions {
    auth: AuthProvider,
    environment: Option<Environment>,
    http: Option<Arc<dyn HttpClient>>,
    storage: Option<Arc<dyn StorageAdapter>>,
    crypto: Option<Arc<dyn CryptoAdapter>>,
}

impl ClientOptions {
    /// Starts options for the given credential configuration
    pub fn new(auth: impl Into<AuthProvider>) -> Self {
        Self {
            auth: auth.into(),
            environment: None,
            http: None,
            storage: None,
            crypto: None,
        }
    }

    /// Targets an environment other than production
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Replaces the HTTP transport
    pub fn with_http(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Replaces the token cache backing store
    ///
    /// Use [`FileStorage`][fatsecret_platform::FileStorage] to share
    /// tokens across runs.
    pub fn with_storage(mut self, storage: Arc<dyn StorageAdapter>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Replaces the cryptographic provider
    pub fn with_crypto(mut self, crypto: Arc<dyn CryptoAdapter>) -> Self {
        self.crypto = Some(crypto);
        self
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("auth", &self.auth)
            .field("environment", &self.environment)
            .finish()
    }
}

/// A typed client for the FatSecret Platform API
///
/// The client is cheap to share behind an [`Arc`] and every method
/// takes `&self`.
#[derive(Debug)]
pub struct FatSecretClient {
    service: ApiService,
}

impl FatSecretClient {
    /// Constructs a client from the given options
    pub fn new(options: ClientOptions) -> Self {
        let environment = options.environment.unwrap_or_default();
        let http = options
            .http
            .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()));
        let storage = options
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));
        let crypto = options
            .crypto
            .unwrap_or_else(|| Arc::new(RingCrypto::new()));

        let auth = AuthManager::new(
            options.auth,
            http.clone(),
            storage,
            crypto,
            Some(environment.oauth_token_url.clone()),
        );

        Self {
            service: ApiService::new(environment, auth, http),
        }
    }

    /// The strategy this client authenticates with
    pub fn strategy(&self) -> AuthStrategy {
        self.service.auth().strategy()
    }

    /// The underlying service, for invoking methods this client does
    /// not model
    pub fn service(&self) -> &ApiService {
        &self.service
    }

    /// Searches foods by free text (`foods.search.v3`)
    pub async fn search_foods(
        &self,
        request: FoodSearchRequest,
    ) -> Result<FoodSearchResponse, Error> {
        self.service
            .call_method(ApiMethod::FoodsSearchV3, service::query_params(&request))
            .await
    }

    /// Fetches a single food with its servings (`food.get.v4`)
    pub async fn get_food(&self, request: FoodGetRequest) -> Result<FoodGetResponse, Error> {
        self.service
            .call_method(ApiMethod::FoodGetV4, service::query_params(&request))
            .await
    }

    /// Resolves a barcode to a food ID (`food.find_id_for_barcode`)
    pub async fn find_food_id_for_barcode(
        &self,
        request: BarcodeRequest,
    ) -> Result<BarcodeResponse, Error> {
        self.service
            .call_method(
                ApiMethod::FoodFindIdForBarcode,
                service::query_params(&request),
            )
            .await
    }

    /// Completes a partial food name (`foods.autocomplete.v2`)
    pub async fn autocomplete_foods(
        &self,
        request: FoodAutocompleteRequest,
    ) -> Result<FoodAutocompleteResponse, Error> {
        self.service
            .call_method(
                ApiMethod::FoodsAutocompleteV2,
                service::query_params(&request),
            )
            .await
    }

    /// Lists food brands (`food_brands.get.v2`)
    pub async fn get_food_brands(
        &self,
        request: FoodBrandsRequest,
    ) -> Result<FoodBrandsResponse, Error> {
        self.service
            .call_method(ApiMethod::FoodBrandsGetV2, service::query_params(&request))
            .await
    }

    /// Lists the top-level food categories (`food_categories.get.v2`)
    pub async fn get_food_categories(
        &self,
        request: FoodCategoriesRequest,
    ) -> Result<FoodCategoriesResponse, Error> {
        self.service
            .call_method(
                ApiMethod::FoodCategoriesGetV2,
                service::query_params(&request),
            )
            .await
    }

    /// Lists the sub-categories of a category (`food_sub_categories.get.v2`)
    pub async fn get_food_sub_categories(
        &self,
        request: FoodSubCategoriesRequest,
    ) -> Result<FoodSubCategoriesResponse, Error> {
        self.service
            .call_method(
                ApiMethod::FoodSubCategoriesGetV2,
                service::query_params(&request),
            )
            .await
    }

    /// Searches recipes by free text (`recipes.search.v3`)
    pub async fn search_recipes(
        &self,
        request: RecipeSearchRequest,
    ) -> Result<RecipeSearchResponse, Error> {
        self.service
            .call_method(ApiMethod::RecipesSearchV3, service::query_params(&request))
            .await
    }

    /// Fetches a single recipe (`recipe.get.v2`)
    pub async fn get_recipe(&self, request: RecipeGetRequest) -> Result<RecipeGetResponse, Error> {
        self.service
            .call_method(ApiMethod::RecipeGetV2, service::query_params(&request))
            .await
    }

    /// Lists the recipe types defined by the platform (`recipe_types.get.v2`)
    pub async fn get_recipe_types(&self) -> Result<RecipeTypesResponse, Error> {
        self.service
            .call_method(ApiMethod::RecipeTypesGetV2, Vec::new())
            .await
    }

    /// Parses a free-form description of eaten food
    pub async fn process_natural_language(
        &self,
        request: NaturalLanguageRequest,
    ) -> Result<NaturalLanguageResponse, Error> {
        let url = self
            .service
            .environment()
            .natural_language_processing_url
            .clone();
        let body = serde_json::to_value(&request)?;
        self.service.post_json(&url, body).await
    }

    /// Recognizes the foods pictured in an image
    pub async fn recognize_image(
        &self,
        request: ImageRecognitionRequest,
    ) -> Result<ImageRecognitionResponse, Error> {
        let url = self.service.environment().image_recognition_url.clone();
        let body = serde_json::to_value(&request)?;
        self.service.post_json(&url, body).await
    }
}
