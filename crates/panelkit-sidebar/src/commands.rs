use panelkit_common::PanelId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarCommand {
    ToggleFold(PanelId),
    ToggleSidebar,
}
