use panelkit_common::{LayoutError, PanelId};
use serde::{Deserialize, Serialize};

/// Snapshot of one panel's sizing inputs, taken fresh from the host
/// environment before each solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub id: PanelId,
    /// Space the panel consumes outside its resizable content (header,
    /// borders, chrome). For a non-flexible panel this is its full
    /// current height.
    pub fixed_height: f64,
    /// Relative share of the distributable space. `None` marks the panel
    /// as non-flexible: the solver never shrinks or grows it.
    pub flex_weight: Option<f64>,
    /// Height the content would occupy if left unconstrained.
    pub natural_content_height: f64,
}

impl PanelDescriptor {
    /// A panel the solver leaves alone; `height` is its full current height.
    pub fn fixed(id: impl Into<PanelId>, height: f64) -> Self {
        Self {
            id: id.into(),
            fixed_height: height,
            flex_weight: None,
            natural_content_height: 0.0,
        }
    }

    /// A panel competing for distributable space.
    pub fn flexible(
        id: impl Into<PanelId>,
        fixed_height: f64,
        weight: f64,
        natural_content_height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            fixed_height,
            flex_weight: Some(weight),
            natural_content_height,
        }
    }

    pub fn is_flexible(&self) -> bool {
        self.flex_weight.is_some()
    }

    /// Caller contract check: weights must be positive and finite,
    /// heights non-negative. Runs before any space is distributed.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if let Some(weight) = self.flex_weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(self.invalid(format!("flex weight must be positive, got {weight}")));
            }
        }
        if !self.fixed_height.is_finite() || self.fixed_height < 0.0 {
            return Err(self.invalid(format!(
                "fixed height must be non-negative, got {}",
                self.fixed_height
            )));
        }
        if !self.natural_content_height.is_finite() || self.natural_content_height < 0.0 {
            return Err(self.invalid(format!(
                "natural content height must be non-negative, got {}",
                self.natural_content_height
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> LayoutError {
        LayoutError::InvalidDescriptor {
            id: self.id.clone(),
            reason,
        }
    }
}
