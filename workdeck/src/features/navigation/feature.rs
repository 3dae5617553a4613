use iced::Task;

use super::event::NavigationEvent;
use super::model::{NavigationSnapshot, SelectionPolicy};
use super::state::NavigationState;
use crate::app::Event as AppEvent;
use crate::catalog::{Workspace, WorkspaceCatalog};
use crate::config::ShellTab;
use crate::features::Feature;

/// Runtime context required by the navigation reducer.
pub(crate) struct NavigationCtx<'a> {
    pub(crate) catalog: &'a dyn WorkspaceCatalog,
    pub(crate) tabs: &'a [ShellTab],
    pub(crate) policy: SelectionPolicy,
}

/// Navigation feature root that owns selection state and reduction logic.
#[derive(Debug)]
pub(crate) struct NavigationFeature {
    state: NavigationState,
}

impl NavigationFeature {
    /// Construct navigation state from the configured default tab.
    pub(crate) fn new(
        default_tab_id: &str,
        catalog: &dyn WorkspaceCatalog,
    ) -> Self {
        Self {
            state: NavigationState::new(default_tab_id, catalog),
        }
    }

    /// Return the selected sidebar tab id.
    pub(crate) fn active_tab_id(&self) -> &str {
        self.state.active_tab_id()
    }

    /// Return whether the sidebar is shown.
    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.state.is_sidebar_open()
    }

    /// Return the selected workspace id, resolved or not.
    pub(crate) fn active_workspace_id(&self) -> Option<&str> {
        self.state.active_workspace_id()
    }

    /// Return the selected workspace if the catalog holds it.
    pub(crate) fn resolve_active_workspace<'c>(
        &self,
        catalog: &'c dyn WorkspaceCatalog,
    ) -> Option<&'c Workspace> {
        self.state.resolve_active_workspace(catalog)
    }

    pub(crate) fn snapshot(&self) -> NavigationSnapshot {
        self.state.snapshot()
    }

    fn reduce_select_tab(&mut self, tab_id: String, ctx: &NavigationCtx<'_>) {
        match ctx.policy {
            SelectionPolicy::Permissive => self.state.select_tab(tab_id),
            SelectionPolicy::Strict => {
                if let Err(err) =
                    self.state.select_tab_checked(tab_id, ctx.tabs)
                {
                    log::warn!("tab selection rejected: {err}");
                }
            },
        }
    }

    fn reduce_select_workspace(
        &mut self,
        workspace_id: String,
        ctx: &NavigationCtx<'_>,
    ) {
        match ctx.policy {
            SelectionPolicy::Permissive => {
                self.state.select_workspace(workspace_id)
            },
            SelectionPolicy::Strict => {
                if let Err(err) = self
                    .state
                    .select_workspace_checked(workspace_id, ctx.catalog)
                {
                    log::warn!("workspace selection rejected: {err}");
                }
            },
        }
    }
}

impl Feature for NavigationFeature {
    type Event = NavigationEvent;
    type Ctx<'a>
        = NavigationCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: NavigationEvent,
        ctx: &NavigationCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            NavigationEvent::SelectTab { tab_id } => {
                self.reduce_select_tab(tab_id, ctx);
            },
            NavigationEvent::OpenSidebar => self.state.open_sidebar(),
            NavigationEvent::CloseSidebar => self.state.close_sidebar(),
            NavigationEvent::ToggleSidebar => self.state.toggle_sidebar(),
            NavigationEvent::SelectWorkspace { workspace_id } => {
                self.reduce_select_workspace(workspace_id, ctx);
            },
            NavigationEvent::CatalogChanged => {
                if self.state.reconcile(ctx.catalog) {
                    log::info!(
                        "active workspace no longer in catalog, now {:?}",
                        self.state.active_workspace_id()
                    );
                }
            },
        }

        log::debug!("navigation state: {:?}", self.state.snapshot());
        Task::none()
    }
}
