//! Environment configuration
//!
//! Each lambda reads its table and queue settings once per invocation.
//! Missing variables are not rejected: they become empty strings, and the
//! failure shows up at the first AWS call that needs them.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use tracing::warn;

pub const PRODUCT_TABLE_ENV: &str = "PRODUCT_TABLE";
pub const TRANSLATE_TABLE_ENV: &str = "TRANSLATE_TABLE";
pub const SENTENCE_QUEUE_ENV: &str = "SENTENCE_QUEUE";
pub const SENTENCE_QUEUE_URL_ENV: &str = "SENTENCE_QUEUE_URL";

/// Region used when the provider chain finds none
pub const DEFAULT_REGION: &str = "us-west-2";

/// Product lambda settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductConfig {
    pub table_name: String,
}

impl ProductConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: required(&lookup, PRODUCT_TABLE_ENV),
        }
    }
}

/// Translate intake lambda settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub table_name: String,
    /// Queue name, resolved to a URL at publish time
    pub queue_name: String,
}

impl IntakeConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: required(&lookup, PRODUCT_TABLE_ENV),
            queue_name: required(&lookup, SENTENCE_QUEUE_ENV),
        }
    }
}

/// Translate process lambda settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub table_name: String,
    pub queue_url: String,
}

impl ProcessConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: required(&lookup, TRANSLATE_TABLE_ENV),
            queue_url: required(&lookup, SENTENCE_QUEUE_URL_ENV),
        }
    }
}

/// Load AWS settings from the default provider chain, falling back to
/// `DEFAULT_REGION`.
pub async fn load_aws_config() -> SdkConfig {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> String {
    lookup(name).unwrap_or_else(|| {
        warn!(variable = name, "Environment variable not set");
        String::new()
    })
}
