//! Structural schema detection for stored and imported documents.

use crate::errors::{AppError, AppResult};
use crate::models::{ItemStatus, Status, StoredDocument};
use serde::Deserialize;
use serde_json::Value;

/// Decode a raw JSON document into either known shape.
///
/// Invalid JSON and unknown shapes both map to [`AppError::Import`].
pub fn decode_document(raw: &str) -> AppResult<StoredDocument> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::Import(format!("not a JSON document ({e})")))?;

    StoredDocument::deserialize(&value).map_err(|_| {
        AppError::Import(
            "expected {\"groups\": [...]} or {\"programs\", \"drivers\", \"extensions\"}"
                .to_string(),
        )
    })
}

/// Status entries decoded one by one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedStatuses {
    pub statuses: Vec<ItemStatus>,
    /// Entries that could not be turned into a status and were left out.
    pub dropped: usize,
}

/// Decode the stored status list entry by entry.
///
/// Entries whose status is spelled differently ("DONE", "ok") are kept; only
/// entries without a usable id or status are dropped. A value that is not a
/// JSON array is [`AppError::Corrupt`].
pub fn decode_statuses(raw: &str) -> AppResult<DecodedStatuses> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::Corrupt(format!("status list is not JSON ({e})")))?;
    let Value::Array(entries) = value else {
        return Err(AppError::Corrupt("status list is not an array".to_string()));
    };

    let mut decoded = DecodedStatuses::default();
    for entry in &entries {
        match status_entry(entry) {
            Some(s) => decoded.statuses.push(s),
            None => decoded.dropped += 1,
        }
    }
    Ok(decoded)
}

fn status_entry(entry: &Value) -> Option<ItemStatus> {
    if let Ok(s) = ItemStatus::deserialize(entry) {
        return Some(s);
    }

    let id = entry.get("id")?.as_str()?;
    let status = Status::from_code(entry.get("status")?.as_str()?)?;
    Some(ItemStatus {
        id: id.to_string(),
        status,
    })
}
