//! Translate Process Lambda
//!
//! Handles:
//! - GET  - current time
//! - POST - stores the JSON body in TRANSLATE_TABLE and sends a message to
//!   SENTENCE_QUEUE_URL, replying 201 `successful`

use lambda_http::{run, service_fn, Body, Error as LambdaError, Request, Response};
use tracing::{error, info, warn};
use translate_core::api::{empty_response, otherwise_response, text_response, time_response};
use translate_core::{
    load_aws_config, parse_item, Action, Deadline, DynamoStore, ItemStore, MessageQueue,
    ProcessConfig, SqsQueue, PLACEHOLDER_MESSAGE, SUCCESS_BODY,
};

async fn handler(event: Request) -> Result<Response<Body>, LambdaError> {
    respond(event, ProcessConfig::from_env).await
}

/// Settings are only loaded for writes.
async fn respond(
    event: Request,
    load_config: impl FnOnce() -> ProcessConfig,
) -> Result<Response<Body>, LambdaError> {
    info!(method = %event.method(), "Processing translate request");

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
                    error!(code = e.code(), error = %e, "Failed to process sentence");
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
    config: &ProcessConfig,
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

    deadline
        .run(store.put_item(&config.table_name, &item))
        .await?;

    info!(table = %config.table_name, fields = item.len(), "Stored sentence");

    let message_id = deadline
        .run(queue.send_message(&config.queue_url, PLACEHOLDER_MESSAGE))
        .await?;

    info!(message_id = %message_id, "Queued sentence");

    text_response(201, SUCCESS_BODY)
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
