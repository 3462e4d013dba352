//! Test fixtures and utilities

use aws_sdk_dynamodb::types::AttributeValue;
use uuid::Uuid;

pub const PRODUCT_API_URL: &str = "PRODUCT_API_URL";
pub const TRANSLATE_INTAKE_API_URL: &str = "TRANSLATE_INTAKE_API_URL";
pub const TRANSLATE_PROCESS_API_URL: &str = "TRANSLATE_PROCESS_API_URL";

/// Generate a unique sentence so stored items can be found again
pub fn unique_sentence() -> String {
    format!("hola-{}", &Uuid::new_v4().to_string()[..8])
}

/// Look for an item whose `sentence` attribute equals `sentence`.
///
/// Walks every scan page, since a filter only applies within a page and an
/// early page can come back empty while a later one holds the match.
///
/// Returns `None` when the table variable is unset, so callers can skip the
/// check.
pub async fn find_sentence(table_var: &str, sentence: &str) -> Option<bool> {
    let table = std::env::var(table_var).ok()?;
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let mut pages = client
        .scan()
        .table_name(table)
        .filter_expression("#s = :s")
        .expression_attribute_names("#s", "sentence")
        .expression_attribute_values(":s", AttributeValue::S(sentence.to_string()))
        .into_paginator()
        .send();

    while let Some(page) = pages.next().await {
        let page = page.expect("Failed to scan table");
        if page.count() > 0 {
            return Some(true);
        }
    }

    Some(false)
}
