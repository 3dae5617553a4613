use super::errors::NavigationError;
use super::model::NavigationSnapshot;
use crate::catalog::{Workspace, WorkspaceCatalog};
use crate::config::ShellTab;

/// Selected tab, sidebar visibility and selected workspace for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavigationState {
    active_tab_id: String,
    sidebar_open: bool,
    active_workspace_id: Option<String>,
}

impl NavigationState {
    /// Start on `default_tab_id` with the sidebar open and the first catalog
    /// entry selected.
    pub(crate) fn new(
        default_tab_id: impl Into<String>,
        catalog: &dyn WorkspaceCatalog,
    ) -> Self {
        Self {
            active_tab_id: default_tab_id.into(),
            sidebar_open: true,
            active_workspace_id: catalog.first_id().map(str::to_string),
        }
    }

    pub(crate) fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub(crate) fn active_workspace_id(&self) -> Option<&str> {
        self.active_workspace_id.as_deref()
    }

    pub(crate) fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            active_tab_id: self.active_tab_id.clone(),
            is_sidebar_open: self.sidebar_open,
            active_workspace_id: self.active_workspace_id.clone(),
        }
    }

    pub(crate) fn select_tab(&mut self, tab_id: String) {
        self.active_tab_id = tab_id;
    }

    pub(crate) fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub(crate) fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub(crate) fn toggle_sidebar(&mut self) {
        if self.sidebar_open {
            self.close_sidebar();
        } else {
            self.open_sidebar();
        }
    }

    /// Point at `workspace_id` without checking catalog membership.
    pub(crate) fn select_workspace(&mut self, workspace_id: String) {
        self.active_workspace_id = Some(workspace_id);
    }

    /// Select a tab only if it is listed in `tabs`.
    pub(crate) fn select_tab_checked(
        &mut self,
        tab_id: String,
        tabs: &[ShellTab],
    ) -> Result<(), NavigationError> {
        if !tabs.iter().any(|tab| tab.id() == tab_id) {
            return Err(NavigationError::UnknownTab { id: tab_id });
        }
        self.select_tab(tab_id);
        Ok(())
    }

    /// Select a workspace only if the catalog holds it.
    pub(crate) fn select_workspace_checked(
        &mut self,
        workspace_id: String,
        catalog: &dyn WorkspaceCatalog,
    ) -> Result<(), NavigationError> {
        if !catalog.contains(&workspace_id) {
            return Err(NavigationError::UnknownWorkspace { id: workspace_id });
        }
        self.select_workspace(workspace_id);
        Ok(())
    }

    /// Resolve the selected workspace against `catalog`.
    pub(crate) fn resolve_active_workspace<'c>(
        &self,
        catalog: &'c dyn WorkspaceCatalog,
    ) -> Option<&'c Workspace> {
        let workspace_id = self.active_workspace_id.as_deref()?;
        catalog.get(workspace_id)
    }

    /// Re-anchor the workspace selection after the catalog changed.
    ///
    /// A selection that no longer resolves moves to the first record, or is
    /// cleared when the catalog is empty. Returns whether it moved.
    pub(crate) fn reconcile(&mut self, catalog: &dyn WorkspaceCatalog) -> bool {
        let resolves = self
            .active_workspace_id
            .as_deref()
            .is_some_and(|id| catalog.contains(id));
        if resolves {
            return false;
        }

        let fallback = catalog.first_id().map(str::to_string);
        if fallback == self.active_workspace_id {
            return false;
        }
        self.active_workspace_id = fallback;
        true
    }
}
