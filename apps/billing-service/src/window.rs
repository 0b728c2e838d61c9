/// Validates the `yyyymmddhhmmss` timestamp contract used throughout (§6).
/// Unlike the weight-service's query window, `GET /bill/{id}` has no
/// documented default — both bounds are required.
pub fn validate_timestamp(raw: &str) -> Result<(), crate::errors::ApiError> {
    if raw.len() == 14 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(crate::errors::ApiError::Validation(format!(
            "invalid timestamp '{raw}', expected yyyymmddhhmmss"
        )))
    }
}

pub fn validate_window(from: &str, to: &str) -> Result<(), crate::errors::ApiError> {
    validate_timestamp(from)?;
    validate_timestamp(to)?;
    if from > to {
        return Err(crate::errors::ApiError::Validation(format!("from ({from}) is after to ({to})")));
    }
    Ok(())
}
