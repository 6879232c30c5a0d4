pub mod errors;
pub mod types;

pub use errors::{LayoutError, PanelKitError};
pub use types::{FoldState, PanelId, SidebarState};

pub type Result<T> = std::result::Result<T, PanelKitError>;
