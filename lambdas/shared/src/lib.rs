//! Translate Core Library
//!
//! Shared functionality for the product and translate Lambda functions:
//! - Method routing and responses
//! - DynamoDB and SQS clients behind traits
//! - Environment configuration
//! - Error types

pub mod api;
pub mod config;
pub mod deadline;
pub mod dynamo;
pub mod errors;
pub mod mock;
pub mod models;
pub mod sqs;

pub use api::Action;
pub use config::{load_aws_config, IntakeConfig, ProcessConfig, ProductConfig};
pub use deadline::Deadline;
pub use dynamo::{DynamoStore, ItemStore};
pub use errors::{Error, Result};
pub use models::*;
pub use sqs::{MessageQueue, SqsQueue};
