//! Request and response payloads shared by the translate lambdas
//!
//! - Items: flat string-to-string maps written to DynamoDB
//! - Attributes: whatever the table hands back from a write
//! - Time events: the GET health-check body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// Item written to a table
pub type Item = BTreeMap<String, String>;

/// Attributes returned by the store for a write (previous values, if any)
pub type Attributes = serde_json::Map<String, Value>;

/// Body of every queue message. Not derived from the stored item yet.
pub const PLACEHOLDER_MESSAGE: &str = "hello";

/// Body returned for methods other than GET and POST
pub const OTHERWISE_BODY: &str = "otherwise";

/// Body returned by the process lambda after a successful POST
pub const SUCCESS_BODY: &str = "successful";

/// Health-check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    /// Human-readable rendering of the current time
    pub time: String,
}

impl TimeEvent {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Renders as `2026-10-19 08:15:30.1234 +0000 UTC`.
    ///
    /// Trailing zeros of the fraction are dropped, and a whole second has no
    /// fraction at all.
    pub fn at(time: DateTime<Utc>) -> Self {
        let nanos = time.timestamp_subsec_nanos();
        let fraction = if nanos == 0 {
            String::new()
        } else {
            format!(".{:09}", nanos).trim_end_matches('0').to_string()
        };

        Self {
            time: format!(
                "{}{} {}",
                time.format("%Y-%m-%d %H:%M:%S"),
                fraction,
                time.format("%z %Z")
            ),
        }
    }
}

/// The fixed record written by the product lambda
pub fn product_item() -> Item {
    let mut item = Item::new();
    item.insert("product_id".to_string(), "you-know-what".to_string());
    item
}

/// Parse a POST body into an item.
///
/// Anything that is not valid JSON is rejected. Valid JSON is converted
/// leniently: every member of an object becomes a field, non-string members
/// with an empty value, and non-object values produce an empty item.
pub fn parse_item(body: &[u8]) -> Result<Item> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))?;

    let item = match value {
        Value::Object(members) => members
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                _ => (key, String::new()),
            })
            .collect(),
        _ => Item::new(),
    };

    Ok(item)
}
