#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};

use crate::catalog::{self, WorkspaceCatalog};
use crate::config::{self, ShellConfig};
use crate::features::Features;
use crate::fonts::FontsConfig;
use crate::theme::ThemeManager;
use crate::ui::widgets::{sidebar, tab_content, top_bar, workspace_tabs};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const APP_TITLE: &str = "Workdeck";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    TopBar(top_bar::TopBarEvent),
    Sidebar(sidebar::SidebarEvent),
    WorkspaceTabs(workspace_tabs::WorkspaceTabsEvent),
    TabContent(tab_content::TabContentEvent),
    /// Periodic poll of a live catalog source.
    CatalogTick,
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    fonts: FontsConfig,
    config: ShellConfig,
    catalog: Box<dyn WorkspaceCatalog>,
    features: Features,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let config = config::load_initial_config();
        let catalog = catalog::load_catalog(config.catalog_path());
        let features = Features::new(&config, catalog.as_ref());

        log::info!(
            "shell started with {} workspaces: {:?}",
            catalog.workspaces().len(),
            features.navigation().snapshot()
        );

        let app = App {
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            config,
            catalog,
            features,
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        match self.active_workspace_name() {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => String::from(APP_TITLE),
        }
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Name of the selected workspace when the catalog holds it.
    fn active_workspace_name(&self) -> Option<&str> {
        self.features
            .navigation()
            .resolve_active_workspace(self.catalog.as_ref())
            .map(|workspace| workspace.name())
    }
}
