use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use scalehouse_billing_core::BillableTransaction;
use scalehouse_retry_client::{send_with_retry, Backoff, RetryError, RetryPolicy};
use serde::Deserialize;

/// Raised once C9 has exhausted its retry budget or hit a non-retriable
/// 4xx (§4.9). The aggregator (C8) treats this as "degrade, don't fail".
#[derive(Debug, thiserror::Error)]
pub enum WeightServiceError {
    #[error("weight-service request failed: {0}")]
    Request(#[from] RetryError),
    #[error("weight-service returned {0}")]
    NonRetriableStatus(reqwest::StatusCode),
    #[error("failed to decode weight-service response: {0}")]
    Decode(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct WireTransaction {
    truck: Option<String>,
    produce: Option<String>,
    neto: serde_json::Value,
}

fn neto_as_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) if s == "na" => None,
        _ => None,
    }
}

pub struct WeightServiceClient {
    http: Client,
    base_url: String,
}

impl WeightServiceClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http = Client::builder().timeout(timeout).build().expect("reqwest client");
        Self { http, base_url }
    }

    fn retry_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            retryable_statuses: HashSet::new(),
            retry_on_transport_error: true,
            backoff: Backoff::Exponential { base_secs: 1.0 },
            respect_retry_after: false,
        }
    }

    /// `GET {weight_base}/weight?from=&to=&filter=out`, retried up to 3
    /// times with `2^attempt`-second backoff (§4.9). A 404 is treated as an
    /// empty result; any other non-2xx status is a non-retriable error.
    ///
    /// Filtering to `out` keeps exactly one row per completed (or
    /// force-standalone) session — the weight-service back-fills the
    /// matching IN row with the same `neto`/`produce`-bearing data, so
    /// including both directions would double-count every session.
    pub async fn get_weight_in_range(&self, from: &str, to: &str) -> Result<Vec<BillableTransaction>, WeightServiceError> {
        let url = format!("{}/weight?from={}&to={}&filter=out", self.base_url, from, to);
        let request = self.http.get(&url);

        let response = send_with_retry(&self.http, request, &Self::retry_policy()).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(WeightServiceError::NonRetriableStatus(response.status()));
        }

        let wire: Vec<WireTransaction> = response.json().await?;
        Ok(wire
            .into_iter()
            .map(|w| BillableTransaction { truck: w.truck, produce: w.produce, neto: neto_as_i64(&w.neto) })
            .collect())
    }
}
