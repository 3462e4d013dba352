//! DynamoDB item storage
//!
//! Tables are schemaless from our side: an item is written as-is and the
//! table's own key schema decides whether it creates or overwrites.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_item};
use std::collections::HashMap;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::models::{Attributes, Item};

/// Interface for writing items to a named table.
///
/// Implementations:
/// - `DynamoStore`: DynamoDB
/// - `MockItemStore`: in-memory recorder for tests
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Write `item` to `table`, returning the attributes it replaced.
    ///
    /// Returns an empty map when nothing was replaced.
    async fn put_item(&self, table: &str, item: &Item) -> Result<Attributes>;
}

/// DynamoDB-backed item store
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn put_item(&self, table: &str, item: &Item) -> Result<Attributes> {
        let item: HashMap<String, AttributeValue> =
            to_item(item).map_err(|e| Error::DynamoSerialization(e.to_string()))?;

        let output = self
            .client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        match output.attributes {
            Some(previous) => {
                debug!(table = %table, "Write replaced an existing item");
                from_item(previous).map_err(|e| Error::DynamoSerialization(e.to_string()))
            }
            None => Ok(Attributes::new()),
        }
    }
}
