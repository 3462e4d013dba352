//! Translate Intake Lambda
//!
//! Handles:
//! - GET  - current time
//! - POST - stores the JSON body in PRODUCT_TABLE, then announces it on the
//!   queue named by SENTENCE_QUEUE
//!
//! Queue failures do not fail the request: the item is already stored, so
//! they are logged and the stored attributes are returned anyway.

use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::{error, info, warn};
use translate_core::api::{empty_response, json_response, otherwise_response, time_response};
use translate_core::{
    load_aws_config, parse_item, Action, Deadline, DynamoStore, IntakeConfig, ItemStore,
    MessageQueue, SqsQueue, PLACEHOLDER_MESSAGE,
};

async fn handler(event: Request) -> Result<Response<Body>, LambdaError> {
    respond(event, IntakeConfig::from_env).await
}

/// Settings are only loaded for writes.
async fn respond(
    event: Request,
    load_config: impl FnOnce() -> IntakeConfig,
) -> Result<Response<Body>, LambdaError> {
    info!(method = %event.method(), "Processing intake request");

    match Action::for_method(event.method()) {
        Action::Time => Ok(time_response()?),
        Action::Write => {
            let config = load_config();
            let aws_config = load_aws_config().await;
            let store = DynamoStore::from_config(&aws_config);
            let queue = SqsQueue::from_config(&aws_config);
            let deadline = Deadline::from_request(&event);

            match handle_post(event.body(), &store, &queue, &config, deadline).await {
                Ok(response) => Ok(response),
                Err(e) => {
                    error!(code = e.code(), error = %e, "Failed to store sentence");
                    Err(e.into())
                }
            }
        }
        Action::Otherwise => Ok(otherwise_response()?),
    }
}

async fn handle_post(
    body: &[u8],
    store: &dyn ItemStore,
    queue: &dyn MessageQueue,
    config: &IntakeConfig,
    deadline: Deadline,
) -> translate_core::Result<Response<Body>> {
    let item = match parse_item(body) {
        Ok(item) => item,
        Err(e) if e.is_client_error() => {
            warn!(error = %e, "Rejecting request body");
            return empty_response(400);
        }
        Err(e) => return Err(e),
    };

    let attributes = deadline
        .run(store.put_item(&config.table_name, &item))
        .await?;

    info!(table = %config.table_name, fields = item.len(), "Stored sentence");

    match deadline.run(announce(queue, &config.queue_name)).await {
        Ok(message_id) => {
            info!(queue = %config.queue_name, message_id = %message_id, "Queued sentence")
        }
        Err(e) => warn!(
            code = e.code(),
            error = %e,
            queue = %config.queue_name,
            "Ignoring queue failure"
        ),
    }

    json_response(200, &attributes)
}

/// Look the queue up by name and send the placeholder message to it.
async fn announce(queue: &dyn MessageQueue, queue_name: &str) -> translate_core::Result<String> {
    let queue_url = queue.queue_url(queue_name).await?;
    queue.send_message(&queue_url, PLACEHOLDER_MESSAGE).await
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
