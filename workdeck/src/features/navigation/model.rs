use serde::{Deserialize, Serialize};

/// How selections of ids outside the known tab list or catalog are treated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SelectionPolicy {
    /// Accept any id; unresolvable ids render an empty slot.
    #[default]
    Permissive,
    /// Reject unknown ids and keep the previous selection.
    Strict,
}

/// Read-only copy of the navigation fields for consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavigationSnapshot {
    pub(crate) active_tab_id: String,
    pub(crate) is_sidebar_open: bool,
    pub(crate) active_workspace_id: Option<String>,
}
