// src/variants/error.rs
use thiserror::Error;

/// Fatal build failures. Nothing is produced when one of these comes back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Missing [{0}] header.")]
    MissingRequiredColumn(&'static str),

    #[error("Template row {index} is out of range (dataset has {rows} row(s)).")]
    TemplateOutOfRange { index: usize, rows: usize },
}

/// Non-fatal findings. The build carries on and reports these alongside the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The requested distinguishing parameter matched no PARAMETER column;
    /// every parameter column is treated by the common/non-common rule alone.
    UnresolvedParameterColumn { requested: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::UnresolvedParameterColumn { requested } => write!(
                f,
                "Parameter column {requested:?} not found; building without a distinguishing parameter"
            ),
        }
    }
}
