pub mod commands;
pub mod descriptor;
pub mod measure;
pub mod panel;
pub mod scroll;
pub mod sidebar;
pub mod solver;

pub use commands::SidebarCommand;
pub use descriptor::PanelDescriptor;
pub use measure::{FixedMeasurements, MeasurePanels, PanelMeasurements};
pub use panel::Panel;
pub use scroll::{MemoryStore, ScrollMemory, StateStore};
pub use sidebar::SidebarManager;
pub use solver::{PanelLayoutSolver, SolverOptions};
