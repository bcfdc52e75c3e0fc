use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An element names a parent that is itself, unknown, or its own descendant.
    #[error("element `{id}` has invalid parent `{parent}`")]
    InvalidParent { id: String, parent: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Dom(#[from] creative_dom::DomError),
    #[error(transparent)]
    Scroll(#[from] creative_dom::ScrollError),
}
