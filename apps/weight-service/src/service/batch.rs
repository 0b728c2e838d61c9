use std::path::{Path, PathBuf};

use libsql::Connection;
use scalehouse_weight_core::{lbs_to_kg, validate_container_id, validate_weight_kg, Unit};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::BatchUpsertResult;
use crate::repo::container_repo::{self, UpsertOutcome};

const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
/// Legacy heuristic: a two-column CSV row with weight above this is
/// assumed to be in pounds rather than kilograms (§4.2, §9).
const LBS_HEURISTIC_THRESHOLD: i64 = 500;

pub struct ParsedRow {
    pub id: String,
    pub weight: Option<i64>,
    pub unit: Unit,
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    id: String,
    weight: Option<i64>,
    #[serde(default)]
    unit: Option<Unit>,
}

/// Resolves `file_name` under `ingest_dir`, rejecting any attempt to
/// traverse outside it (`..`, absolute paths, symlink escapes).
pub fn resolve_ingest_path(ingest_dir: &Path, file_name: &str) -> Result<PathBuf, ApiError> {
    if file_name.contains("..") || Path::new(file_name).is_absolute() {
        return Err(ApiError::Validation("file name must not escape the ingest directory".to_string()));
    }

    let candidate = ingest_dir.join(file_name);
    let base = ingest_dir
        .canonicalize()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("ingest directory unavailable: {e}")))?;
    let resolved = candidate
        .canonicalize()
        .map_err(|_| ApiError::NotFound(format!("file '{file_name}' not found")))?;

    if !resolved.starts_with(&base) {
        return Err(ApiError::Validation("file name must not escape the ingest directory".to_string()));
    }

    Ok(resolved)
}

pub fn check_file_size(bytes: &[u8]) -> Result<(), ApiError> {
    if bytes.len() as u64 > MAX_FILE_SIZE_BYTES {
        return Err(ApiError::Validation(format!(
            "file exceeds the {MAX_FILE_SIZE_BYTES}-byte ingest limit"
        )));
    }
    Ok(())
}

fn looks_like_header(first_field: &str) -> bool {
    let lower = first_field.trim().to_ascii_lowercase();
    lower == "id" || lower == "container" || lower == "container_id"
}

/// Parses the two-format CSV contract: two columns (`id,weight`, unit
/// auto-detected) or three columns (`id,weight,unit`). An optional header
/// row is detected by the presence of a recognised keyword in column one.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ParsedRow>, ApiError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ApiError::Validation("file is not valid UTF-8".to_string()))?;
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if line_no == 0 && looks_like_header(fields[0]) {
            continue;
        }

        match fields.as_slice() {
            [id, weight] => {
                let weight: i64 = weight
                    .parse()
                    .map_err(|_| ApiError::Validation(format!("row {}: weight must be an integer", line_no + 1)))?;
                let unit = if weight > LBS_HEURISTIC_THRESHOLD {
                    tracing::warn!(line = line_no + 1, weight, "falling back to lbs auto-detect heuristic");
                    Unit::Lbs
                } else {
                    Unit::Kg
                };
                rows.push(ParsedRow { id: id.to_string(), weight: Some(weight), unit });
            }
            [id, weight, unit] => {
                let weight: i64 = weight
                    .parse()
                    .map_err(|_| ApiError::Validation(format!("row {}: weight must be an integer", line_no + 1)))?;
                let unit = match unit.to_ascii_lowercase().as_str() {
                    "kg" => Unit::Kg,
                    "lbs" => Unit::Lbs,
                    other => {
                        return Err(ApiError::Validation(format!("row {}: unknown unit '{other}'", line_no + 1)))
                    }
                };
                rows.push(ParsedRow { id: id.to_string(), weight: Some(weight), unit });
            }
            _ => return Err(ApiError::Validation(format!("row {}: expected 2 or 3 columns", line_no + 1))),
        }
    }

    Ok(rows)
}

/// Parses the JSON array contract: `[{"id": ..., "weight": ..., "unit"?}]`,
/// defaulting absent `unit` to kg.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<ParsedRow>, ApiError> {
    let rows: Vec<JsonRow> =
        serde_json::from_slice(bytes).map_err(|e| ApiError::Validation(format!("malformed JSON batch: {e}")))?;

    Ok(rows
        .into_iter()
        .map(|r| ParsedRow { id: r.id, weight: r.weight, unit: r.unit.unwrap_or(Unit::Kg) })
        .collect())
}

/// Ingests a batch of parsed rows (C2's `BatchUpsert`). Each row is
/// validated independently; a failed row produces a diagnostic and does
/// not abort the batch. At least one row must succeed for the batch call
/// to succeed.
pub async fn ingest(
    conn: &Connection,
    rows: Vec<ParsedRow>,
    allow_updates: bool,
    skip_duplicates: bool,
) -> Result<BatchUpsertResult, ApiError> {
    let mut result = BatchUpsertResult { processed: 0, updated: 0, skipped: 0, errors: Vec::new() };

    for row in rows {
        if let Err(e) = validate_container_id(&row.id) {
            result.errors.push(format!("{}: {e}", row.id));
            continue;
        }

        let weight_kg = match row.weight {
            Some(w) => {
                let kg = match row.unit {
                    Unit::Kg => w,
                    Unit::Lbs => lbs_to_kg(w),
                };
                if let Err(e) = validate_weight_kg(kg) {
                    result.errors.push(format!("{}: {e}", row.id));
                    continue;
                }
                Some(kg)
            }
            None => None,
        };

        match container_repo::upsert(conn, &row.id, weight_kg, row.unit, allow_updates).await {
            Ok(UpsertOutcome::Created) => result.processed += 1,
            Ok(UpsertOutcome::Updated) => {
                result.processed += 1;
                result.updated += 1;
            }
            Ok(UpsertOutcome::Rejected(reason)) => {
                if skip_duplicates {
                    result.skipped += 1;
                } else {
                    result.errors.push(reason);
                }
            }
            Err(e) => result.errors.push(format!("{}: {e}", row.id)),
        }
    }

    if result.processed == 0 {
        return Err(ApiError::Validation(format!(
            "batch failed entirely: {}",
            result.errors.join("; ")
        )));
    }

    Ok(result)
}
