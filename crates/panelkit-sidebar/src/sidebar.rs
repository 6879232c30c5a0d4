//! The SidebarManager coordinates panel registration, fold state, the
//! whole-sidebar collapse toggle, and relayout.

use std::collections::HashMap;

use panelkit_common::{FoldState, LayoutError, PanelId, SidebarState};
use tracing::debug;

use crate::commands::SidebarCommand;
use crate::descriptor::PanelDescriptor;
use crate::measure::MeasurePanels;
use crate::panel::Panel;
use crate::scroll::StateStore;
use crate::solver::PanelLayoutSolver;

const SIDEBAR_STATE_KEY: &str = "panelkit.sidebar";
const FOLD_KEY_PREFIX: &str = "panelkit.fold.";

/// Manages the sidebar state: the panel registry, per-panel fold state,
/// the sidebar collapse toggle, and the layout solver.
pub struct SidebarManager {
    /// Registered panels in registration order. Order matters: when two
    /// shares tie at their natural height, the earlier panel clamps first.
    panels: Vec<Panel>,
    /// Fold state per panel id.
    folds: HashMap<PanelId, FoldState>,
    /// Collapse state of the sidebar as a whole.
    sidebar: SidebarState,
    solver: PanelLayoutSolver,
}

impl SidebarManager {
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            folds: HashMap::new(),
            sidebar: SidebarState::Expanded,
            solver: PanelLayoutSolver::new(),
        }
    }

    /// Create with a custom solver.
    pub fn with_solver(solver: PanelLayoutSolver) -> Self {
        let mut mgr = Self::new();
        mgr.solver = solver;
        mgr
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn fold_state(&self, id: &PanelId) -> Option<FoldState> {
        self.folds.get(id).copied()
    }

    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register a panel. New panels start unfolded. Returns `false` if a
    /// panel with the same id is already registered.
    pub fn register(&mut self, panel: Panel) -> bool {
        if self.panel(&panel.id).is_some() {
            return false;
        }
        self.folds.insert(panel.id.clone(), FoldState::Unfolded);
        self.panels.push(panel);
        true
    }

    // -----------------------------------------------------------------------
    // Folding
    // -----------------------------------------------------------------------

    /// Flip a panel's fold state and return the new state.
    pub fn toggle_fold(&mut self, id: &PanelId) -> Result<FoldState, LayoutError> {
        let state = self
            .folds
            .get_mut(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;
        *state = state.toggled();
        debug!("panel '{id}' is now {state}");
        Ok(*state)
    }

    pub fn set_fold(&mut self, id: &PanelId, state: FoldState) -> Result<(), LayoutError> {
        let slot = self
            .folds
            .get_mut(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;
        *slot = state;
        Ok(())
    }

    /// Toggle the whole-sidebar collapse and return the new state. The
    /// host applies `.css_class()` of the result to its chrome elements.
    pub fn toggle_sidebar(&mut self) -> SidebarState {
        self.sidebar = self.sidebar.toggled();
        self.sidebar
    }

    // -----------------------------------------------------------------------
    // Command dispatch
    // -----------------------------------------------------------------------

    /// Execute a sidebar command. Returns `true` if the command was handled.
    pub fn execute(&mut self, cmd: SidebarCommand) -> bool {
        match cmd {
            SidebarCommand::ToggleFold(id) => self.toggle_fold(&id).is_ok(),
            SidebarCommand::ToggleSidebar => {
                self.toggle_sidebar();
                true
            }
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write fold and sidebar state into a store.
    pub fn save_state(&self, store: &mut impl StateStore) {
        store.set(SIDEBAR_STATE_KEY, self.sidebar.css_class());
        for panel in &self.panels {
            if let Some(state) = self.folds.get(&panel.id) {
                store.set(&format!("{FOLD_KEY_PREFIX}{}", panel.id), state.as_token());
            }
        }
    }

    /// Restore fold and sidebar state from a store. Missing or
    /// unrecognized entries leave the current state untouched.
    pub fn load_state(&mut self, store: &impl StateStore) {
        if let Some(state) = store
            .get(SIDEBAR_STATE_KEY)
            .and_then(|raw| SidebarState::from_css_class(&raw))
        {
            self.sidebar = state;
        }
        for panel in &self.panels {
            let key = format!("{FOLD_KEY_PREFIX}{}", panel.id);
            if let Some(state) = store.get(&key).and_then(|raw| FoldState::from_token(&raw)) {
                self.folds.insert(panel.id.clone(), state);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Layout computation
    // -----------------------------------------------------------------------

    /// Build solver inputs from the registry, fold state, and live
    /// measurements. Unmeasured (unrendered) panels are left out; folded
    /// panels reserve only their chrome; non-flexible panels reserve
    /// their full current height.
    pub fn descriptors(&self, env: &impl MeasurePanels) -> Vec<PanelDescriptor> {
        let mut descriptors = Vec::with_capacity(self.panels.len());
        for panel in &self.panels {
            let Some(m) = env.measure(&panel.id) else {
                debug!("panel '{}' is not rendered, skipping", panel.id);
                continue;
            };
            let folded = self
                .fold_state(&panel.id)
                .is_some_and(FoldState::is_folded);
            let descriptor = if folded {
                PanelDescriptor::fixed(panel.id.clone(), m.fixed_height)
            } else {
                match panel.flex {
                    Some(weight) => PanelDescriptor::flexible(
                        panel.id.clone(),
                        m.fixed_height,
                        weight,
                        m.natural_content_height,
                    ),
                    None => PanelDescriptor::fixed(
                        panel.id.clone(),
                        m.fixed_height + m.natural_content_height,
                    ),
                }
            };
            descriptors.push(descriptor);
        }
        descriptors
    }

    /// Compute content heights for all flexible, unfolded panels from a
    /// fresh measurement snapshot.
    pub fn relayout(
        &self,
        env: &impl MeasurePanels,
    ) -> Result<HashMap<PanelId, f64>, LayoutError> {
        self.solver
            .solve(&self.descriptors(env), env.viewport_height())
    }
}

impl Default for SidebarManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedMeasurements;
    use crate::scroll::MemoryStore;

    fn manager() -> SidebarManager {
        let mut mgr = SidebarManager::new();
        mgr.register(Panel::flexible("TreePanel", "Navigation", 1.0));
        mgr.register(Panel::flexible("ClipboardPanel", "Clipboard", 2.0));
        mgr.register(Panel::fixed("SearchPanel", "Search"));
        mgr
    }

    fn environment() -> FixedMeasurements {
        FixedMeasurements::new(560.0)
            .with_panel("TreePanel", 20.0, 400.0)
            .with_panel("ClipboardPanel", 20.0, 500.0)
            .with_panel("SearchPanel", 20.0, 100.0)
    }

    #[test]
    fn register_and_lookup() {
        let mgr = manager();
        assert_eq!(mgr.panel_count(), 3);
        let panel = mgr.panel(&PanelId::from("TreePanel")).unwrap();
        assert_eq!(panel.title, "Navigation");
        assert_eq!(panel.flex, Some(1.0));
        assert_eq!(
            mgr.fold_state(&PanelId::from("TreePanel")),
            Some(FoldState::Unfolded)
        );
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut mgr = manager();
        assert!(!mgr.register(Panel::fixed("TreePanel", "Again")));
        assert_eq!(mgr.panel_count(), 3);
    }

    #[test]
    fn toggle_fold_round_trip() {
        let mut mgr = manager();
        let id = PanelId::from("TreePanel");
        assert_eq!(mgr.toggle_fold(&id).unwrap(), FoldState::Folded);
        assert_eq!(mgr.toggle_fold(&id).unwrap(), FoldState::Unfolded);
    }

    #[test]
    fn toggle_fold_unknown_panel() {
        let mut mgr = manager();
        let err = mgr.toggle_fold(&PanelId::from("GhostPanel")).unwrap_err();
        assert!(matches!(err, LayoutError::UnknownPanel(_)));
    }

    #[test]
    fn toggle_sidebar_yields_css_tokens() {
        let mut mgr = manager();
        assert_eq!(mgr.sidebar_state(), SidebarState::Expanded);
        assert_eq!(mgr.toggle_sidebar().css_class(), "sidebar-folded");
        assert_eq!(mgr.toggle_sidebar().css_class(), "sidebar-expanded");
    }

    #[test]
    fn relayout_distributes_viewport() {
        let mgr = manager();
        // Fixed panel reserves 120, chrome reserves 2 * 20; the remaining
        // 400 splits 1:2 between the flexible panels.
        let heights = mgr.relayout(&environment()).unwrap();
        assert_eq!(heights.len(), 2);
        assert!((heights[&PanelId::from("TreePanel")] - 400.0 / 3.0).abs() < 1e-9);
        assert!((heights[&PanelId::from("ClipboardPanel")] - 800.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn folded_panel_reserves_only_chrome() {
        let mut mgr = manager();
        mgr.toggle_fold(&PanelId::from("ClipboardPanel")).unwrap();
        let heights = mgr.relayout(&environment()).unwrap();
        // The folded panel no longer competes; everything beyond the
        // fixed panel (120) and the two chromes goes to the tree panel.
        assert_eq!(heights.len(), 1);
        assert!((heights[&PanelId::from("TreePanel")] - 400.0).abs() < 1e-9);
    }

    #[test]
    fn unrendered_panel_is_skipped() {
        let mgr = manager();
        let env = FixedMeasurements::new(300.0).with_panel("TreePanel", 20.0, 400.0);
        let descriptors = mgr.descriptors(&env);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].id, PanelId::from("TreePanel"));
    }

    #[test]
    fn descriptors_preserve_registration_order() {
        let mgr = manager();
        let ids: Vec<_> = mgr
            .descriptors(&environment())
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                PanelId::from("TreePanel"),
                PanelId::from("ClipboardPanel"),
                PanelId::from("SearchPanel"),
            ]
        );
    }

    #[test]
    fn relayout_does_not_mutate_manager() {
        let mgr = manager();
        let first = mgr.relayout(&environment()).unwrap();
        let second = mgr.relayout(&environment()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn execute_command_dispatch() {
        let mut mgr = manager();
        assert!(mgr.execute(SidebarCommand::ToggleFold(PanelId::from("TreePanel"))));
        assert_eq!(
            mgr.fold_state(&PanelId::from("TreePanel")),
            Some(FoldState::Folded)
        );
        assert!(!mgr.execute(SidebarCommand::ToggleFold(PanelId::from("GhostPanel"))));
        assert!(mgr.execute(SidebarCommand::ToggleSidebar));
        assert_eq!(mgr.sidebar_state(), SidebarState::Folded);
    }

    #[test]
    fn state_round_trips_through_store() {
        let mut mgr = manager();
        mgr.toggle_fold(&PanelId::from("ClipboardPanel")).unwrap();
        mgr.toggle_sidebar();

        let mut store = MemoryStore::new();
        mgr.save_state(&mut store);

        let mut restored = manager();
        restored.load_state(&store);
        assert_eq!(
            restored.fold_state(&PanelId::from("ClipboardPanel")),
            Some(FoldState::Folded)
        );
        assert_eq!(
            restored.fold_state(&PanelId::from("TreePanel")),
            Some(FoldState::Unfolded)
        );
        assert_eq!(restored.sidebar_state(), SidebarState::Folded);
    }

    #[test]
    fn load_state_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set("panelkit.sidebar", "sideways");
        store.set("panelkit.fold.TreePanel", "sorta-folded");

        let mut mgr = manager();
        mgr.load_state(&store);
        assert_eq!(mgr.sidebar_state(), SidebarState::Expanded);
        assert_eq!(
            mgr.fold_state(&PanelId::from("TreePanel")),
            Some(FoldState::Unfolded)
        );
    }

    #[test]
    fn default_impl() {
        let mgr = SidebarManager::default();
        assert_eq!(mgr.panel_count(), 0);
        assert_eq!(mgr.sidebar_state(), SidebarState::Expanded);
    }
}
