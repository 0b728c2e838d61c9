use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed product vocabulary a candidate may supply.
pub const ALLOWED_PRODUCTS: &[&str] = &["apples", "oranges", "grapes", "bananas", "mangoes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    Pending,
    Approved,
    Rejected,
}

impl CandidateStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Approved => "approved",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(CandidateStatus::Pending),
            "approved" => Some(CandidateStatus::Approved),
            "rejected" => Some(CandidateStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateValidationError {
    #[error("products must be non-empty and drawn from {allowed:?}, got '{product}'")]
    InvalidProduct { product: String, allowed: &'static [&'static str] },

    #[error("truck_count must be positive")]
    NonPositiveTruckCount,

    #[error("capacity_tons_per_day must be positive")]
    NonPositiveCapacity,

    #[error("rejection_reason must be at most 1000 characters")]
    RejectionReasonTooLong,
}

/// Validates the subset of candidate-creation input spec.md names as
/// invariants: non-empty product list drawn from the closed vocabulary,
/// positive truck_count and capacity.
pub fn validate_candidate_input(
    products: &[String],
    truck_count: i64,
    capacity_tons_per_day: i64,
) -> Result<(), CandidateValidationError> {
    if products.is_empty() {
        return Err(CandidateValidationError::InvalidProduct {
            product: String::new(),
            allowed: ALLOWED_PRODUCTS,
        });
    }
    for product in products {
        if !ALLOWED_PRODUCTS.contains(&product.as_str()) {
            return Err(CandidateValidationError::InvalidProduct {
                product: product.clone(),
                allowed: ALLOWED_PRODUCTS,
            });
        }
    }
    if truck_count <= 0 {
        return Err(CandidateValidationError::NonPositiveTruckCount);
    }
    if capacity_tons_per_day <= 0 {
        return Err(CandidateValidationError::NonPositiveCapacity);
    }
    Ok(())
}

pub fn validate_rejection_reason(reason: Option<&str>) -> Result<(), CandidateValidationError> {
    match reason {
        Some(r) if r.len() > 1000 => Err(CandidateValidationError::RejectionReasonTooLong),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_candidate_input() {
        let products = vec!["apples".to_string(), "oranges".to_string()];
        assert!(validate_candidate_input(&products, 3, 10).is_ok());
    }

    #[test]
    fn rejects_product_outside_vocabulary() {
        let products = vec!["pineapples".to_string()];
        assert!(validate_candidate_input(&products, 3, 10).is_err());
    }

    #[test]
    fn rejects_empty_product_list() {
        assert!(validate_candidate_input(&[], 3, 10).is_err());
    }

    #[test]
    fn rejects_non_positive_truck_count_or_capacity() {
        let products = vec!["apples".to_string()];
        assert!(validate_candidate_input(&products, 0, 10).is_err());
        assert!(validate_candidate_input(&products, 3, 0).is_err());
    }
}
