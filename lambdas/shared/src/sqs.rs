//! SQS message publishing

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;

use crate::errors::{Error, Result};

/// Interface for publishing to a queue.
///
/// Implementations:
/// - `SqsQueue`: Amazon SQS
/// - `MockQueue`: in-memory recorder for tests
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Resolve a queue's URL from its name.
    async fn queue_url(&self, queue_name: &str) -> Result<String>;

    /// Send one message, returning the id the queue assigned to it.
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String>;
}

/// SQS-backed queue
pub struct SqsQueue {
    client: Client,
}

impl SqsQueue {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    async fn queue_url(&self, queue_name: &str) -> Result<String> {
        let output = self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| Error::Queue(e.to_string()))?;

        output
            .queue_url
            .ok_or_else(|| Error::Queue(format!("No URL returned for queue {}", queue_name)))
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| Error::Queue(e.to_string()))?;

        Ok(output.message_id.unwrap_or_default())
    }
}
