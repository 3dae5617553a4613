use thiserror::Error;

/// Rejections produced by the strict selection hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum NavigationError {
    #[error("tab `{id}` is not listed in the sidebar")]
    UnknownTab { id: String },
    #[error("workspace `{id}` is not present in the catalog")]
    UnknownWorkspace { id: String },
}
