use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sidebar panel. The host environment keys panels by
/// element-id strings, so this is a string newtype rather than a counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Panels without an id have nowhere to keep per-panel state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PanelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Fold state of a single panel. A folded panel shows only its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldState {
    Unfolded,
    Folded,
}

impl FoldState {
    pub fn toggled(self) -> Self {
        match self {
            FoldState::Unfolded => FoldState::Folded,
            FoldState::Folded => FoldState::Unfolded,
        }
    }

    pub fn is_folded(self) -> bool {
        matches!(self, FoldState::Folded)
    }

    pub fn as_token(self) -> &'static str {
        match self {
            FoldState::Unfolded => "unfolded",
            FoldState::Folded => "folded",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "unfolded" => Some(FoldState::Unfolded),
            "folded" => Some(FoldState::Folded),
            _ => None,
        }
    }
}

impl fmt::Display for FoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Collapse state of the whole sidebar. The string forms are the CSS
/// class tokens the host environment applies to its chrome elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidebarState {
    Expanded,
    Folded,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Folded,
            SidebarState::Folded => SidebarState::Expanded,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SidebarState::Expanded => "sidebar-expanded",
            SidebarState::Folded => "sidebar-folded",
        }
    }

    pub fn from_css_class(class: &str) -> Option<Self> {
        match class {
            "sidebar-expanded" => Some(SidebarState::Expanded),
            "sidebar-folded" => Some(SidebarState::Folded),
            _ => None,
        }
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
