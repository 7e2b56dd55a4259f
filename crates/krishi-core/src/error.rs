use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KrishiError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("crop '{crop}' is not in the dosage table. Consult your local Krushi Seva Kendra or an agriculture expert")]
    UnknownCrop { crop: String },

    #[error("failed to load dosage table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid dosage table: {0}")]
    TableInvalid(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KrishiError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        KrishiError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors caused by user input that should be re-prompted or
    /// explained rather than treated as a failure of the tool.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            KrishiError::Validation { .. } | KrishiError::UnknownCrop { .. }
        )
    }
}
