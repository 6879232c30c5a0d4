//! Fixed-point space allocation across sidebar panels.
//!
//! Distributes the sidebar's height among flexible panels in proportion
//! to their weights. Any panel whose proportional share would exceed its
//! natural content height is clamped to that natural height and retired
//! from the pool, and the surplus is redistributed among the remaining
//! competitors until a pass completes with no clamp.

use std::collections::HashMap;

use panelkit_common::{LayoutError, PanelId};
use tracing::debug;

use crate::descriptor::PanelDescriptor;

/// Solver tuning. `min_height` floors every assigned height; an
/// oversubscribed sidebar would otherwise produce negative shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub min_height: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { min_height: 0.0 }
    }
}

/// Stateless allocator. Each call works on a fresh snapshot of panel
/// measurements and returns one height per flexible panel; non-flexible
/// panels keep their current height and get no entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelLayoutSolver {
    pub options: SolverOptions,
}

/// Per-panel working state scoped to a single solve call.
struct FlexSlot<'a> {
    desc: &'a PanelDescriptor,
    weight: f64,
    active: bool,
}

impl PanelLayoutSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Assign a height to every flexible panel.
    ///
    /// Errors with [`LayoutError::InvalidDescriptor`] before any space is
    /// distributed if a descriptor violates the caller contract; no
    /// partial mapping is ever returned.
    pub fn solve(
        &self,
        panels: &[PanelDescriptor],
        available_height: f64,
    ) -> Result<HashMap<PanelId, f64>, LayoutError> {
        for panel in panels {
            panel.validate()?;
        }
        if !available_height.is_finite() || available_height < 0.0 {
            return Err(LayoutError::InvalidAvailableHeight(available_height));
        }

        let mut fixed_space = 0.0;
        let mut flex_sum = 0.0;
        let mut slots: Vec<FlexSlot<'_>> = Vec::new();
        for desc in panels {
            match desc.flex_weight {
                Some(weight) => {
                    flex_sum += weight;
                    fixed_space += desc.fixed_height;
                    slots.push(FlexSlot {
                        desc,
                        weight,
                        active: true,
                    });
                }
                // A non flexible panel is never shrunk
                None => fixed_space += desc.fixed_height,
            }
        }
        debug!(
            "solve: available = {available_height}, fixed space = {fixed_space}, \
             flex sum = {flex_sum}"
        );

        // Retire panels that would be sized beyond their natural height
        // and hand their surplus back to the pool. Each restart removes
        // one panel from the active set, so with N flexible panels the
        // loop runs at most N+1 passes.
        let mut space_per_flex = 0.0;
        'passes: loop {
            if flex_sum <= 0.0 {
                break;
            }
            let available_for_flex = available_height - fixed_space;
            space_per_flex = available_for_flex / flex_sum;
            debug!("pass: available for flex = {available_for_flex}, space per flex = {space_per_flex}");

            for slot in slots.iter_mut().filter(|s| s.active) {
                let proposed = slot.weight * space_per_flex;
                // Boundary equality clamps: a share exactly at the natural
                // height is treated as satisfied, not competing.
                if proposed >= slot.desc.natural_content_height {
                    flex_sum -= slot.weight;
                    fixed_space += slot.desc.natural_content_height;
                    slot.active = false;
                    debug!(
                        "clamped '{}' to natural height {}",
                        slot.desc.id, slot.desc.natural_content_height
                    );
                    continue 'passes;
                }
            }
            break;
        }

        let mut heights = HashMap::with_capacity(slots.len());
        for slot in &slots {
            let height = if slot.active {
                slot.weight * space_per_flex
            } else {
                slot.desc.natural_content_height
            };
            heights.insert(slot.desc.id.clone(), height.max(self.options.min_height));
        }
        Ok(heights)
    }
}
