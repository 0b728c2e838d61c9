use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeightCoreError {
    #[error("weight {weight} kg is out of range (0, {ceiling}]")]
    WeightOutOfRange { weight: i64, ceiling: i64 },

    #[error("container id '{0}' is invalid: must be 1-15 alphanumeric characters plus '-'/'_'")]
    InvalidContainerId(String),

    #[error("at least one container is required")]
    EmptyContainerList,

    #[error("invalid timestamp '{0}', expected yyyymmddhhmmss")]
    InvalidTimestamp(String),

    #[error("date range invalid: from ({from}) is after to ({to})")]
    InvalidDateRange { from: String, to: String },
}
