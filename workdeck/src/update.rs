use iced::Task;

use super::{App, Event};
use crate::features::Feature;
use crate::features::chrome::ChromeEvent;
use crate::features::navigation::{NavigationCtx, NavigationEvent};
use crate::ui::widgets::{sidebar, tab_content, top_bar, workspace_tabs};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        TopBar(event) => handle_top_bar(app, event),
        Sidebar(event) => handle_sidebar(app, event),
        WorkspaceTabs(event) => handle_workspace_tabs(app, event),
        TabContent(tab_content::TabContentEvent::ShowSidebar) => {
            reduce_navigation(app, NavigationEvent::OpenSidebar)
        },
        CatalogTick => refresh_catalog(app),
    }
}

fn handle_top_bar(app: &mut App, event: top_bar::TopBarEvent) -> Task<Event> {
    use top_bar::TopBarEvent::*;

    match event {
        ToggleSidebar => reduce_navigation(app, NavigationEvent::ToggleSidebar),
        OpenSidebar => reduce_navigation(app, NavigationEvent::OpenSidebar),
        ToggleFullScreen => reduce_chrome(app, ChromeEvent::ToggleFullScreen),
        MinimizeWindow => reduce_chrome(app, ChromeEvent::MinimizeWindow),
        CloseWindow => reduce_chrome(app, ChromeEvent::CloseWindow),
        StartWindowDrag => reduce_chrome(app, ChromeEvent::StartWindowDrag),
    }
}

fn handle_sidebar(app: &mut App, event: sidebar::SidebarEvent) -> Task<Event> {
    match event {
        sidebar::SidebarEvent::SelectTab(tab_id) => {
            reduce_navigation(app, NavigationEvent::SelectTab { tab_id })
        },
        sidebar::SidebarEvent::Collapse => {
            reduce_navigation(app, NavigationEvent::CloseSidebar)
        },
    }
}

fn handle_workspace_tabs(
    app: &mut App,
    event: workspace_tabs::WorkspaceTabsEvent,
) -> Task<Event> {
    use workspace_tabs::WorkspaceTabsEvent::*;

    match event {
        SelectWorkspace(workspace_id) => reduce_navigation(
            app,
            NavigationEvent::SelectWorkspace { workspace_id },
        ),
        CollapseSidebar => {
            reduce_navigation(app, NavigationEvent::CloseSidebar)
        },
        ExpandSidebar => reduce_navigation(app, NavigationEvent::OpenSidebar),
        AddWorkspace => {
            log::info!("workspace creation is owned by the catalog source");
            Task::none()
        },
    }
}

fn reduce_navigation(app: &mut App, event: NavigationEvent) -> Task<Event> {
    let ctx = NavigationCtx {
        catalog: app.catalog.as_ref(),
        tabs: app.config.tabs(),
        policy: app.config.selection_policy(),
    };
    app.features.navigation_mut().reduce(event, &ctx)
}

fn reduce_chrome(app: &mut App, event: ChromeEvent) -> Task<Event> {
    app.features.chrome_mut().reduce(event, &())
}

fn refresh_catalog(app: &mut App) -> Task<Event> {
    match app.catalog.refresh() {
        Ok(true) => {
            log::info!(
                "workspace catalog reloaded with {} records",
                app.catalog.workspaces().len()
            );
            reduce_navigation(app, NavigationEvent::CatalogChanged)
        },
        Ok(false) => Task::none(),
        Err(err) => {
            log::warn!("workspace catalog refresh failed: {err}");
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::update;
    use crate::app::{App, Event};
    use crate::catalog::{
        CatalogError, Workspace, WorkspaceCatalog, WorkspaceStatus,
    };
    use crate::config::ShellConfig;
    use crate::features::Features;
    use crate::fonts::FontsConfig;
    use crate::theme::ThemeManager;
    use crate::ui::widgets::{sidebar, tab_content, workspace_tabs};

    /// Live catalog whose next refresh outcome is set by the test.
    struct ScriptedCatalog {
        workspaces: Vec<Workspace>,
        next: Option<Result<Vec<Workspace>, CatalogError>>,
    }

    impl WorkspaceCatalog for ScriptedCatalog {
        fn workspaces(&self) -> &[Workspace] {
            &self.workspaces
        }

        fn is_live(&self) -> bool {
            true
        }

        fn refresh(&mut self) -> Result<bool, CatalogError> {
            match self.next.take() {
                Some(Ok(workspaces)) => {
                    self.workspaces = workspaces;
                    Ok(true)
                },
                Some(Err(err)) => Err(err),
                None => Ok(false),
            }
        }
    }

    fn alpha() -> Workspace {
        Workspace::new("a", "Alpha", WorkspaceStatus::Working)
    }

    fn beta() -> Workspace {
        Workspace::new("b", "Beta", WorkspaceStatus::Planning)
    }

    fn app_with(
        next: Option<Result<Vec<Workspace>, CatalogError>>,
    ) -> App {
        let catalog = ScriptedCatalog {
            workspaces: vec![alpha(), beta()],
            next,
        };
        let config = ShellConfig::default();
        let features = Features::new(&config, &catalog);

        App {
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            config,
            catalog: Box::new(catalog),
            features,
        }
    }

    #[test]
    fn given_reloaded_catalog_when_tick_handled_then_dangling_selection_moves()
    {
        let mut app = app_with(Some(Ok(vec![beta()])));
        assert_eq!(app.features.navigation().active_workspace_id(), Some("a"));

        let _task = update(&mut app, Event::CatalogTick);

        assert_eq!(app.features.navigation().active_workspace_id(), Some("b"));
        assert_eq!(app.title(), "Beta - Workdeck");
    }

    #[test]
    fn given_failed_refresh_when_tick_handled_then_selection_is_kept() {
        let mut app = app_with(Some(Err(CatalogError::DuplicateId {
            id: String::from("a"),
        })));
        let _task = update(
            &mut app,
            Event::WorkspaceTabs(
                workspace_tabs::WorkspaceTabsEvent::SelectWorkspace(
                    String::from("b"),
                ),
            ),
        );

        let _task = update(&mut app, Event::CatalogTick);

        assert_eq!(app.features.navigation().active_workspace_id(), Some("b"));
        assert_eq!(app.catalog.workspaces().len(), 2);
    }

    #[test]
    fn given_unchanged_catalog_when_tick_handled_then_state_is_untouched() {
        let mut app = app_with(None);
        let before = app.features.navigation().snapshot();

        let _task = update(&mut app, Event::CatalogTick);

        assert_eq!(app.features.navigation().snapshot(), before);
    }

    #[test]
    fn given_closed_sidebar_when_empty_state_button_pressed_then_it_opens() {
        let mut app = app_with(None);
        let _task = update(
            &mut app,
            Event::Sidebar(sidebar::SidebarEvent::Collapse),
        );
        assert!(!app.features.navigation().is_sidebar_open());

        let _task = update(
            &mut app,
            Event::TabContent(tab_content::TabContentEvent::ShowSidebar),
        );

        assert!(app.features.navigation().is_sidebar_open());
    }

    #[test]
    fn given_add_workspace_press_when_handled_then_navigation_is_unchanged() {
        let mut app = app_with(None);
        let before = app.features.navigation().snapshot();

        let _task = update(
            &mut app,
            Event::WorkspaceTabs(
                workspace_tabs::WorkspaceTabsEvent::AddWorkspace,
            ),
        );

        assert_eq!(app.features.navigation().snapshot(), before);
        assert_eq!(app.catalog.workspaces().len(), 2);
    }
}
