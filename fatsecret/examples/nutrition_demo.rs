use std::sync::Arc;

use clap::Parser;
use fatsecret::{
    types::{BarcodeRequest, FoodAutocompleteRequest, FoodCategoriesRequest, FoodSearchRequest},
    ClientCredentialsConfig, ClientId, ClientOptions, ClientSecret, FatSecretClient, Scopes,
};
use fatsecret_platform::FileStorage;

#[derive(Debug, Parser)]
struct Opts {
    /// The client ID issued for the application
    #[arg(long, env = "FATSECRET_CLIENT_ID")]
    client_id: String,

    /// The client secret issued for the application
    #[arg(long, env = "FATSECRET_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Overrides the token endpoint URL
    #[arg(long, env = "FATSECRET_TOKEN_URL")]
    token_url: Option<String>,

    /// Scopes to request, space-delimited
    #[arg(long, env = "FATSECRET_SCOPES")]
    scopes: Option<String>,

    /// The directory used to cache access tokens between runs
    #[arg(long, env = "FATSECRET_TOKEN_DIR", default_value = ".fatsecret-tokens")]
    token_dir: std::path::PathBuf,

    /// The term to look up
    #[arg(long, default_value = "apple")]
    query: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let config = ClientCredentialsConfig {
        client_id: ClientId::new(opts.client_id),
        client_secret: ClientSecret::new(opts.client_secret),
        token_url: opts.token_url,
        scopes: opts.scopes.map(Scopes::from),
    };

    let client = FatSecretClient::new(
        ClientOptions::new(config).with_storage(Arc::new(FileStorage::new(opts.token_dir))),
    );

    tracing::info!(strategy = %client.strategy(), "constructed client");

    report(
        "foods.autocomplete.v2",
        &client
            .autocomplete_foods(FoodAutocompleteRequest {
                expression: opts.query.clone(),
                max_results: Some(4),
                ..Default::default()
            })
            .await,
    );

    report(
        "foods.search.v3",
        &client
            .search_foods(FoodSearchRequest {
                search_expression: Some(opts.query.clone()),
                max_results: Some(3),
                page_number: Some(0),
                ..Default::default()
            })
            .await,
    );

    report(
        "food.find_id_for_barcode",
        &client
            .find_food_id_for_barcode(BarcodeRequest {
                barcode: "013562000103".to_owned(),
                ..Default::default()
            })
            .await,
    );

    report(
        "food_categories.get.v2",
        &client
            .get_food_categories(FoodCategoriesRequest::default())
            .await,
    );

    Ok(())
}

fn report<T: std::fmt::Debug>(label: &str, result: &Result<T, fatsecret::Error>) {
    match result {
        Ok(data) => tracing::info!(
            response = format_args!("{:#?}", data),
            "{} succeeded",
            label
        ),
        Err(error) => tracing::warn!(error = %error, "{} failed", label),
    }
}
