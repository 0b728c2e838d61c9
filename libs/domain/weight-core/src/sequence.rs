use thiserror::Error;

/// Errors specific to weighing sequence validation (C4), kept separate from
/// [`crate::WeightCoreError`] since they map to a distinct HTTP kind
/// (`SequenceViolation` / `ContainerUnknown`) rather than plain validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("an open session already exists for this truck/container combination")]
    DuplicateOpenSession,

    #[error("no matching open session found for this truck/container combination")]
    NoMatchingOpenSession,

    #[error("container '{0}' has no registered tare weight")]
    ContainerTareUnknown(String),
}

/// Whether an OUT completion has every container tare it needs to compute
/// `truck_tara`/`neto`. `unknown_containers` must be the subset of the
/// OUT's container list with no registered tare.
pub fn can_compute_out_weights(unknown_containers: &[String]) -> Result<(), SequenceError> {
    match unknown_containers.first() {
        Some(id) => Err(SequenceError::ContainerTareUnknown(id.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_with_known_tares_succeeds() {
        assert!(can_compute_out_weights(&[]).is_ok());
    }

    #[test]
    fn out_with_unknown_tare_is_rejected() {
        assert_eq!(
            can_compute_out_weights(&["C9".to_string()]),
            Err(SequenceError::ContainerTareUnknown("C9".to_string()))
        );
    }
}
