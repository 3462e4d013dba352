//! Test support: in-memory store and queue, response inspection.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use lambda_http::{Body, Response};
use tokio::sync::RwLock;

use crate::dynamo::ItemStore;
use crate::errors::{Error, Result};
use crate::models::{Attributes, Item};
use crate::sqs::MessageQueue;

/// Body of a response as text
pub fn body_text(response: &Response<Body>) -> &str {
    match response.body() {
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or_default(),
        _ => "",
    }
}

/// Item store that records every write.
#[derive(Default)]
pub struct MockItemStore {
    writes: RwLock<Vec<(String, Item)>>,
    previous: RwLock<Attributes>,
    fail_on_put: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
}

impl MockItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_on_put(&self, fail: bool) {
        *self.fail_on_put.write().await = fail;
    }

    /// Make every write take `delay` before it lands.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Attributes to hand back from the next writes, as if they replaced an item.
    pub async fn set_previous_attributes(&self, attributes: Attributes) {
        *self.previous.write().await = attributes;
    }

    /// `(table, item)` for every successful write, oldest first.
    pub async fn writes(&self) -> Vec<(String, Item)> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl ItemStore for MockItemStore {
    async fn put_item(&self, table: &str, item: &Item) -> Result<Attributes> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_on_put.read().await {
            return Err(Error::Database(format!(
                "Requested resource not found: {}",
                table
            )));
        }
        self.writes
            .write()
            .await
            .push((table.to_string(), item.clone()));
        Ok(self.previous.read().await.clone())
    }
}

/// Queue that records every message. Names must be registered before lookup.
#[derive(Default)]
pub struct MockQueue {
    urls: RwLock<HashMap<String, String>>,
    sent: RwLock<Vec<(String, String)>>,
    fail_on_send: RwLock<bool>,
    delay: RwLock<Option<Duration>>,
}

impl MockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, queue_name: &str, queue_url: &str) {
        self.urls
            .write()
            .await
            .insert(queue_name.to_string(), queue_url.to_string());
    }

    pub async fn set_fail_on_send(&self, fail: bool) {
        *self.fail_on_send.write().await = fail;
    }

    /// Make every send take `delay` before the message is accepted.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// `(queue_url, body)` for every message sent, oldest first.
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl MessageQueue for MockQueue {
    async fn queue_url(&self, queue_name: &str) -> Result<String> {
        self.urls
            .read()
            .await
            .get(queue_name)
            .cloned()
            .ok_or_else(|| Error::Queue(format!("The specified queue does not exist: {}", queue_name)))
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_on_send.read().await {
            return Err(Error::Queue(format!("Send to {} refused", queue_url)));
        }
        let mut sent = self.sent.write().await;
        sent.push((queue_url.to_string(), body.to_string()));
        Ok(format!("msg-{}", sent.len()))
    }
}
