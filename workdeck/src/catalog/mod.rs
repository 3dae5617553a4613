mod errors;
mod file_catalog;
mod model;

use std::path::Path;

pub(crate) use errors::CatalogError;
pub(crate) use file_catalog::FileCatalog;
pub(crate) use model::{Workspace, WorkspaceStatus};

/// Source of truth for the workspace records the shell can select.
///
/// The shell never owns the records: it reads them, looks them up by id and,
/// for live sources, asks them to refresh.
pub(crate) trait WorkspaceCatalog {
    /// Return all records in display order.
    fn workspaces(&self) -> &[Workspace];

    /// Look up a record by id.
    fn get(&self, id: &str) -> Option<&Workspace> {
        self.workspaces().iter().find(|workspace| workspace.id() == id)
    }

    /// Return whether a record with the given id exists.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Return the id of the first record, if any.
    fn first_id(&self) -> Option<&str> {
        self.workspaces().first().map(Workspace::id)
    }

    /// Return whether the catalog should be polled for changes.
    fn is_live(&self) -> bool {
        false
    }

    /// Re-read the underlying source and report whether records changed.
    fn refresh(&mut self) -> Result<bool, CatalogError> {
        Ok(false)
    }
}

/// Fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub(crate) struct StaticCatalog {
    workspaces: Vec<Workspace>,
}

impl StaticCatalog {
    /// Sample records shown when no catalog source is configured.
    pub(crate) fn sample() -> Self {
        Self {
            workspaces: vec![
                Workspace::new(
                    "1",
                    "Homepage Redesign",
                    WorkspaceStatus::Working,
                ),
                Workspace::new(
                    "2",
                    "API Integration",
                    WorkspaceStatus::NeedsFeedback,
                ),
                Workspace::new("3", "Bug Fixes", WorkspaceStatus::Planning),
                Workspace::new(
                    "4",
                    "Performance Optimization",
                    WorkspaceStatus::ReadyToMerge,
                ),
            ],
        }
    }
}

impl WorkspaceCatalog for StaticCatalog {
    fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }
}

/// Open the configured catalog source, falling back to the sample records.
pub(crate) fn load_catalog(path: Option<&Path>) -> Box<dyn WorkspaceCatalog> {
    let Some(path) = path else {
        log::info!("no catalog source configured, using sample workspaces");
        return Box::new(StaticCatalog::sample());
    };

    match FileCatalog::open(path) {
        Ok(catalog) => {
            log::info!(
                "loaded {} workspaces from {}",
                catalog.workspaces().len(),
                path.display()
            );
            Box::new(catalog)
        },
        Err(err) => {
            log::warn!(
                "failed to load catalog {}, using sample workspaces: {err}",
                path.display()
            );
            Box::new(StaticCatalog::sample())
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{
        StaticCatalog, Workspace, WorkspaceCatalog, WorkspaceStatus,
        load_catalog,
    };

    #[test]
    fn given_sample_catalog_when_listed_then_four_records_keep_order() {
        let catalog = StaticCatalog::sample();

        let ids: Vec<&str> =
            catalog.workspaces().iter().map(Workspace::id).collect();
        let statuses: Vec<WorkspaceStatus> =
            catalog.workspaces().iter().map(Workspace::status).collect();

        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(statuses, WorkspaceStatus::ALL.to_vec());
    }

    #[test]
    fn given_sample_catalog_when_looking_up_ids_then_present_and_absent_resolve()
     {
        let catalog = StaticCatalog::sample();

        assert_eq!(catalog.first_id(), Some("1"));
        assert_eq!(
            catalog.get("3"),
            Some(&Workspace::new("3", "Bug Fixes", WorkspaceStatus::Planning))
        );
        assert!(catalog.get("missing").is_none());
        assert!(!catalog.contains("missing"));
    }

    #[test]
    fn given_empty_catalog_when_queried_then_first_id_is_absent() {
        let catalog = StaticCatalog::default();

        assert!(catalog.first_id().is_none());
        assert!(!catalog.is_live());
    }

    #[test]
    fn given_static_catalog_when_refreshed_then_nothing_changes() {
        let mut catalog = StaticCatalog::sample();

        let changed = catalog.refresh().expect("refresh should succeed");

        assert!(!changed);
        assert_eq!(catalog.workspaces().len(), 4);
    }

    #[test]
    fn given_no_source_when_loading_then_sample_catalog_is_used() {
        let catalog = load_catalog(None);

        assert_eq!(catalog.workspaces().len(), 4);
        assert!(!catalog.is_live());
    }

    #[test]
    fn given_missing_source_file_when_loading_then_sample_catalog_is_used() {
        let path = Path::new("/nonexistent/workdeck/catalog.json");

        let catalog = load_catalog(Some(path));

        assert_eq!(catalog.first_id(), Some("1"));
        assert!(!catalog.is_live());
    }
}
