//! Invocation deadlines
//!
//! Lambda attaches the invocation deadline (epoch milliseconds) to every
//! request. External calls run under it so a slow DynamoDB or SQS call fails
//! the invocation cleanly instead of being cut off by the host.

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use lambda_http::{Request, RequestExt};
use tokio::time::{timeout_at, Instant};

use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// No deadline, for requests without a Lambda context
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn after(budget: Duration) -> Self {
        Self {
            at: Some(Instant::now() + budget),
        }
    }

    pub fn from_request(event: &Request) -> Self {
        event
            .lambda_context_ref()
            .map(|ctx| Self::after(remaining_until(ctx.deadline, SystemTime::now())))
            .unwrap_or_default()
    }

    /// Run `call`, failing with `Error::Timeout` if the deadline passes first.
    pub async fn run<F, T>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.at {
            Some(at) => timeout_at(at, call).await.map_err(|_| Error::Timeout)?,
            None => call.await,
        }
    }
}

fn remaining_until(deadline_ms: u64, now: SystemTime) -> Duration {
    let deadline = UNIX_EPOCH + Duration::from_millis(deadline_ms);
    deadline.duration_since(now).unwrap_or(Duration::ZERO)
}
