use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::errors::RetryError;

/// How the delay between attempts grows.
#[derive(Clone, Copy, Debug)]
pub enum Backoff {
    /// `base_secs * 2^attempt`.
    Exponential { base_secs: f64 },
}

/// A retry policy shared by an outbound client's methods. Two distinct
/// instances are used across the workspace: the weight-service client
/// (billing-service → weight-service) and the billing client
/// (provider-registration-service → billing-service) — they differ in
/// attempt budget and in which statuses count as retryable.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// HTTP statuses that should trigger a retry rather than being
    /// returned to the caller immediately.
    pub retryable_statuses: HashSet<u16>,
    /// Whether a transport-level failure (timeout, connection refused)
    /// should also be retried.
    pub retry_on_transport_error: bool,
    pub backoff: Backoff,
    /// Honor an upstream `Retry-After` header when present and parseable,
    /// falling back to `backoff` otherwise.
    pub respect_retry_after: bool,
}

impl RetryPolicy {
    fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if self.respect_retry_after {
            if let Some(d) = retry_after {
                return d;
            }
        }
        let Backoff::Exponential { base_secs } = self.backoff;
        Duration::from_secs_f64(base_secs * 2f64.powi(attempt as i32))
    }
}

fn parse_retry_after(response: &Response) -> Option<Duration> {
    let raw = response.headers().get(reqwest::header::RETRY_AFTER)?.to_str().ok()?;
    raw.trim().parse::<f64>().ok().map(Duration::from_secs_f64)
}

/// Sends `request` via `client`, retrying according to `policy`.
///
/// Returns the last response received once a non-retryable status is seen
/// or the attempt budget is exhausted; transport errors are retried the
/// same way unless `retry_on_transport_error` is false, in which case the
/// first one is propagated immediately.
pub async fn send_with_retry(
    _client: &Client,
    request: RequestBuilder,
    policy: &RetryPolicy,
) -> Result<Response, RetryError> {
    let mut attempt: u32 = 0;

    loop {
        let builder = request.try_clone().ok_or(RetryError::NotCloneable)?;

        match builder.send().await {
            Ok(response) => {
                let status = response.status();
                if !policy.retryable_statuses.contains(&status.as_u16()) {
                    return Ok(response);
                }
                if attempt + 1 >= policy.max_attempts {
                    return Ok(response);
                }
                let delay = policy.delay_for(attempt, parse_retry_after(&response));
                debug!(attempt, status = %status, delay_ms = delay.as_millis() as u64, "retrying request");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                if !policy.retry_on_transport_error || attempt + 1 >= policy.max_attempts {
                    return Err(RetryError::Network(err));
                }
                let delay = policy.delay_for(attempt, None);
                debug!(attempt, error = %err, delay_ms = delay.as_millis() as u64, "retrying after transport error");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
