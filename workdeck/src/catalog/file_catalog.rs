use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::WorkspaceCatalog;
use super::errors::CatalogError;
use super::model::{CatalogFile, Workspace, ensure_unique_ids};

/// Catalog backed by a JSON document on disk.
///
/// `refresh` re-reads the document when its modification time moves and
/// keeps the previous records when the new content is invalid. An invalid
/// revision is reported once, not on every poll.
#[derive(Debug)]
pub(crate) struct FileCatalog {
    path: PathBuf,
    workspaces: Vec<Workspace>,
    modified: Option<SystemTime>,
}

impl FileCatalog {
    /// Read the catalog document at `path`.
    pub(crate) fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let modified = modified_at(&path)?;
        let workspaces = read_workspaces(&path)?;

        Ok(Self {
            path,
            workspaces,
            modified,
        })
    }
}

impl WorkspaceCatalog for FileCatalog {
    fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    fn is_live(&self) -> bool {
        true
    }

    fn refresh(&mut self) -> Result<bool, CatalogError> {
        let modified = modified_at(&self.path)?;
        if modified.is_some() && modified == self.modified {
            return Ok(false);
        }

        self.modified = modified;
        let workspaces = read_workspaces(&self.path)?;
        if workspaces == self.workspaces {
            return Ok(false);
        }

        self.workspaces = workspaces;
        Ok(true)
    }
}

fn read_workspaces(path: &Path) -> Result<Vec<Workspace>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    ensure_unique_ids(&file.workspaces)?;
    Ok(file.workspaces)
}

fn modified_at(path: &Path) -> Result<Option<SystemTime>, CatalogError> {
    let metadata = fs::metadata(path)?;
    Ok(metadata.modified().ok())
}
