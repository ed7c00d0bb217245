use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid content type: {0}")]
    Mime(#[from] mime::FromStrError),
    #[error("could not read {path}: {source}")]
    ReadImport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("import failed: {0}")]
    Import(#[from] ImportError),
}

/// Reasons an import file is rejected. The store is never touched when one
/// of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("expected a JSON array of requests, found {0}")]
    NotAnArray(&'static str),
    #[error("request {position} is not an object (found {found})")]
    NotAnObject { position: usize, found: &'static str },
    #[error("request {position} is invalid: {source}")]
    InvalidRecord {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no request at index {index} (store holds {len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("URL is required")]
    EmptyUrl,
    #[error(transparent)]
    Store(#[from] StoreError),
}
