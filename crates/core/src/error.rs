//! The error taxonomy callers of the export pipeline see.

use folio_render_core::RenderError;
use folio_style::OptionsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The resume cannot be laid out at all. Raised before any drawing.
    #[error("Invalid resume data: {0}")]
    InvalidInput(String),

    /// Layout or serialisation failed. `message` is safe to show to users.
    #[error("{message}")]
    RenderFailure {
        message: String,
        #[source]
        source: RenderError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<OptionsError> for ExportError {
    fn from(e: OptionsError) -> Self {
        match e {
            OptionsError::Json(inner) => ExportError::Json(inner),
        }
    }
}

impl ExportError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ExportError::InvalidInput(_))
    }
}
