//! Translate Integration Tests
//!
//! These tests run against deployed lambdas. Each handler is addressed by its
//! own URL variable:
//! - PRODUCT_API_URL
//! - TRANSLATE_INTAKE_API_URL
//! - TRANSLATE_PROCESS_API_URL
//!
//! Tests for a handler whose URL is unset are skipped. Variables may also be
//! supplied through a `.env` file.
//!
//! Run with: cargo test --package translate-integration-tests

pub mod client;
pub mod fixtures;

pub use client::HandlerClient;
pub use fixtures::*;
