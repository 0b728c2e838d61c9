use crate::errors::WeightCoreError;

const MAX_CONTAINER_ID_LEN: usize = 15;

/// Validates a container id: 1-15 chars, alphanumeric plus `-`/`_`.
pub fn validate_container_id(id: &str) -> Result<(), WeightCoreError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_CONTAINER_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(WeightCoreError::InvalidContainerId(id.to_string()))
    }
}

/// Splits a comma-separated container list, trimming whitespace around each
/// id and dropping empty segments.
pub fn parse_container_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates every id in a parsed container list, and that the list is
/// non-empty.
pub fn validate_container_ids(ids: &[String]) -> Result<(), WeightCoreError> {
    if ids.is_empty() {
        return Err(WeightCoreError::EmptyContainerList);
    }
    for id in ids {
        validate_container_id(id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace_around_commas() {
        assert_eq!(parse_container_list(" C1 , C2,C3 "), vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn rejects_ids_over_max_length() {
        assert!(validate_container_id("A123456789012345").is_err());
        assert!(validate_container_id("A12345678901234").is_ok());
    }

    #[test]
    fn rejects_ids_with_disallowed_characters() {
        assert!(validate_container_id("C1!").is_err());
        assert!(validate_container_id("C1-A_2").is_ok());
    }

    #[test]
    fn rejects_empty_container_list() {
        assert!(validate_container_ids(&[]).is_err());
    }
}
