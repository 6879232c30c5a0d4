use std::collections::HashMap;

use panelkit_common::PanelId;

/// Live sizing of one panel as reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMeasurements {
    /// Chrome around the content: header, borders, padding.
    pub fixed_height: f64,
    /// Height the content renders at when unconstrained.
    pub natural_content_height: f64,
}

/// Capability to read current panel sizes. Implemented by the rendering
/// host; the solver and manager never touch the environment directly.
pub trait MeasurePanels {
    /// Current measurements for a panel, or `None` if it is not rendered.
    fn measure(&self, id: &PanelId) -> Option<PanelMeasurements>;

    /// Total height available to the sidebar.
    fn viewport_height(&self) -> f64;
}

/// Map-backed measurements for tests and headless callers.
#[derive(Debug, Clone, Default)]
pub struct FixedMeasurements {
    viewport_height: f64,
    panels: HashMap<PanelId, PanelMeasurements>,
}

impl FixedMeasurements {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            panels: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        id: impl Into<PanelId>,
        fixed_height: f64,
        natural_content_height: f64,
    ) {
        self.panels.insert(
            id.into(),
            PanelMeasurements {
                fixed_height,
                natural_content_height,
            },
        );
    }

    pub fn with_panel(
        mut self,
        id: impl Into<PanelId>,
        fixed_height: f64,
        natural_content_height: f64,
    ) -> Self {
        self.insert(id, fixed_height, natural_content_height);
        self
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }
}

impl MeasurePanels for FixedMeasurements {
    fn measure(&self, id: &PanelId) -> Option<PanelMeasurements> {
        self.panels.get(id).copied()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_measurements_lookup() {
        let env = FixedMeasurements::new(600.0).with_panel("a", 20.0, 300.0);
        assert_eq!(env.viewport_height(), 600.0);
        let m = env.measure(&PanelId::from("a")).unwrap();
        assert_eq!(m.fixed_height, 20.0);
        assert_eq!(m.natural_content_height, 300.0);
        assert!(env.measure(&PanelId::from("missing")).is_none());
    }

    #[test]
    fn viewport_height_is_mutable() {
        let mut env = FixedMeasurements::new(600.0);
        env.set_viewport_height(450.0);
        assert_eq!(env.viewport_height(), 450.0);
    }
}
