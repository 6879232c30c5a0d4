use crate::types::PanelId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid descriptor for panel '{id}': {reason}")]
    InvalidDescriptor { id: PanelId, reason: String },

    #[error("available height must be a non-negative number, got {0}")]
    InvalidAvailableHeight(f64),

    #[error("unknown panel '{0}'")]
    UnknownPanel(PanelId),
}

#[derive(Debug, thiserror::Error)]
pub enum PanelKitError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Other(String),
}
