//! Product Lambda
//!
//! Handles:
//! - GET  - current time
//! - POST - writes the fixed product item to PRODUCT_TABLE
//!
//! Other methods get a plain 200 `otherwise`.

use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::{error, info};
use translate_core::api::{json_response, otherwise_response, time_response};
use translate_core::{
    load_aws_config, product_item, Action, Deadline, DynamoStore, ItemStore, ProductConfig,
};

async fn handler(event: Request) -> Result<Response<Body>, LambdaError> {
    respond(event, ProductConfig::from_env).await
}

/// Settings are only loaded for writes.
async fn respond(
    event: Request,
    load_config: impl FnOnce() -> ProductConfig,
) -> Result<Response<Body>, LambdaError> {
    info!(method = %event.method(), "Processing product request");

    match Action::for_method(event.method()) {
        Action::Time => Ok(time_response()?),
        Action::Write => {
            let config = load_config();
            let aws_config = load_aws_config().await;
            let store = DynamoStore::from_config(&aws_config);
            let deadline = Deadline::from_request(&event);

            match handle_post(&store, &config, deadline).await {
                Ok(response) => Ok(response),
                Err(e) => {
                    error!(code = e.code(), error = %e, "Failed to store product");
                    Err(e.into())
                }
            }
        }
        Action::Otherwise => Ok(otherwise_response()?),
    }
}

/// The request body is ignored; every POST writes the same item.
async fn handle_post(
    store: &dyn ItemStore,
    config: &ProductConfig,
    deadline: Deadline,
) -> translate_core::Result<Response<Body>> {
    let attributes = deadline
        .run(store.put_item(&config.table_name, &product_item()))
        .await?;

    info!(table = %config.table_name, "Stored product");

    json_response(200, &attributes)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(handler)).await
}
