use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Progress stage of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum WorkspaceStatus {
    Working,
    NeedsFeedback,
    Planning,
    ReadyToMerge,
}

#[cfg(test)]
impl WorkspaceStatus {
    pub(crate) const ALL: [WorkspaceStatus; 4] = [
        WorkspaceStatus::Working,
        WorkspaceStatus::NeedsFeedback,
        WorkspaceStatus::Planning,
        WorkspaceStatus::ReadyToMerge,
    ];
}

/// A named unit of work supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Workspace {
    id: String,
    name: String,
    status: WorkspaceStatus,
}

impl Workspace {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: WorkspaceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn status(&self) -> WorkspaceStatus {
        self.status
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default = "default_version")]
    pub(crate) version: u32,
    #[serde(default)]
    pub(crate) workspaces: Vec<Workspace>,
}

fn default_version() -> u32 {
    1
}

/// Reject record lists where two workspaces share an id.
pub(crate) fn ensure_unique_ids(
    workspaces: &[Workspace],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(workspaces.len());
    for workspace in workspaces {
        if !seen.insert(workspace.id()) {
            return Err(CatalogError::DuplicateId {
                id: workspace.id().to_string(),
            });
        }
    }
    Ok(())
}
