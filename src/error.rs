use pagebuilder_document::DocumentError;
use pagebuilder_format::FormatError;
use pagebuilder_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Format configuration error: {0}")]
    Format(#[from] FormatError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(String),
}
