use thiserror::Error;

/// Result type for projection export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced while persisting a projected model.
///
/// The projection itself is infallible on a well-formed graph; malformed
/// pieces are skipped rather than raised.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the model failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
