use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use scalehouse_retry_client::{send_with_retry, Backoff, RetryError, RetryPolicy};
use serde::{Deserialize, Serialize};

/// Raised once C12 has exhausted its retry budget or hit a non-retriable
/// status (§4.12). The approval workflow (C11) surfaces this as a 502.
#[derive(Debug, thiserror::Error)]
pub enum BillingClientError {
    #[error("billing-service request failed: {0}")]
    Request(#[from] RetryError),
    #[error("billing-service returned {0}")]
    NonRetriableStatus(reqwest::StatusCode),
    #[error("failed to decode billing-service response: {0}")]
    Decode(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct CreateProviderBody<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateProviderResponse {
    id: i64,
}

pub struct BillingClient {
    http: Client,
    base_url: String,
}

impl BillingClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http = Client::builder().timeout(timeout).build().expect("reqwest client");
        Self { http, base_url }
    }

    fn retry_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 4,
            retryable_statuses: HashSet::from([408, 429, 500, 502, 503, 504]),
            retry_on_transport_error: true,
            backoff: Backoff::Exponential { base_secs: 0.5 },
            respect_retry_after: true,
        }
    }

    /// `POST {billing_base}/provider` with `{"name": company_name}`, retried
    /// up to 3 times beyond the initial attempt (§4.12). Returns the newly
    /// created provider's id on 201; any other status is non-retriable.
    pub async fn create_provider(&self, company_name: &str) -> Result<i64, BillingClientError> {
        let url = format!("{}/provider", self.base_url);
        let request = self.http.post(&url).json(&CreateProviderBody { name: company_name });

        let response = send_with_retry(&self.http, request, &Self::retry_policy()).await?;

        if response.status() != reqwest::StatusCode::CREATED {
            return Err(BillingClientError::NonRetriableStatus(response.status()));
        }

        let body: CreateProviderResponse = response.json().await?;
        Ok(body.id)
    }
}
