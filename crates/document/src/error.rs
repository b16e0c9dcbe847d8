use pagebuilder_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Page index {index} is out of range for a document with {len} pages")]
    PageIndexOutOfRange { index: usize, len: usize },
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
