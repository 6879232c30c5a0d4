use panelkit_common::PanelId;
use serde::{Deserialize, Serialize};

/// A registered sidebar panel. Sizing inputs are measured live at layout
/// time; the registration only carries identity and the configured flex
/// weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    /// `None` marks the panel as non-flexible: it keeps whatever height
    /// its content takes.
    pub flex: Option<f64>,
}

impl Panel {
    pub fn fixed(id: impl Into<PanelId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            flex: None,
        }
    }

    pub fn flexible(id: impl Into<PanelId>, title: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            flex: Some(weight),
        }
    }
}
