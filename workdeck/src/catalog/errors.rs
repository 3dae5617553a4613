use thiserror::Error;

/// Errors emitted while loading or refreshing a workspace catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("workspace id `{id}` appears more than once")]
    DuplicateId { id: String },
}
