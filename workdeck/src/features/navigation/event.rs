/// Intents that change which tab, sidebar state, or workspace is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationEvent {
    SelectTab { tab_id: String },
    OpenSidebar,
    CloseSidebar,
    ToggleSidebar,
    SelectWorkspace { workspace_id: String },
    /// The workspace catalog was refreshed with different records.
    CatalogChanged,
}
