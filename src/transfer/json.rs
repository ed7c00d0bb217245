use std::path::Path;

use serde_json::Value;

use crate::error::{AppError, ImportError};
use crate::state::record::Record;
use super::download::Download;

pub const FILE_NAME: &str = "requests.json";

/// Pretty-printed (2-space indent) JSON array of every record.
pub fn to_json(records: &[Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

pub fn download(records: &[Record]) -> Result<Download, AppError> {
    Ok(Download {
        file_name: FILE_NAME,
        content_type: mime::APPLICATION_JSON,
        body: to_json(records)?,
    })
}

/// Parse an import file. The text must be a JSON array whose elements are
/// objects with string `url`, `payload`, `response` and a known `method`.
/// Extra keys are ignored. Positions in errors are 1-based.
pub fn parse_records(text: &str) -> Result<Vec<Record>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Malformed)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray(kind_of(&value)));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let position = i + 1;
            if !item.is_object() {
                return Err(ImportError::NotAnObject { position, found: kind_of(&item) });
            }
            serde_json::from_value::<Record>(item)
                .map_err(|source| ImportError::InvalidRecord { position, source })
        })
        .collect()
}

/// Read and parse an import file without blocking the UI task.
pub async fn read_file(path: &Path) -> Result<Vec<Record>, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::ReadImport { path: path.to_path_buf(), source })?;
    Ok(parse_records(&text)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
