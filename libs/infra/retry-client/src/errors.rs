use thiserror::Error;

/// Raised once a request has exhausted its retry budget, or failed in a
/// way the policy says not to retry at all.
#[derive(Error, Debug)]
pub enum RetryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned non-retryable status {0}")]
    NonRetryableStatus(reqwest::StatusCode),

    #[error("upstream unavailable after {attempts} attempt(s)")]
    Exhausted { attempts: u32 },

    #[error("request could not be cloned for retry")]
    NotCloneable,
}
