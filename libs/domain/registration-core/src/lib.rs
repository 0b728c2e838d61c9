mod candidate;
mod pagination;

pub use candidate::{
    validate_candidate_input, validate_rejection_reason, CandidateStatus, CandidateValidationError,
    ALLOWED_PRODUCTS,
};
pub use pagination::{resolve_pagination, Pagination};
