use iced::Task;

use crate::app::Event as AppEvent;
use crate::catalog::WorkspaceCatalog;
use crate::config::ShellConfig;

pub(crate) mod chrome;
pub(crate) mod navigation;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the shell features.
pub(crate) struct Features {
    chrome: chrome::ChromeFeature,
    navigation: navigation::NavigationFeature,
}

impl Features {
    /// Create the features seeded from config and the loaded catalog.
    pub(crate) fn new(
        config: &ShellConfig,
        catalog: &dyn WorkspaceCatalog,
    ) -> Self {
        Self {
            chrome: chrome::ChromeFeature::new(),
            navigation: navigation::NavigationFeature::new(
                config.default_tab_id(),
                catalog,
            ),
        }
    }

    /// Return read-only access to window chrome state.
    pub(crate) fn chrome(&self) -> &chrome::ChromeFeature {
        &self.chrome
    }

    /// Return mutable access for routing chrome events.
    pub(crate) fn chrome_mut(&mut self) -> &mut chrome::ChromeFeature {
        &mut self.chrome
    }

    /// Return read-only access to navigation state and queries.
    pub(crate) fn navigation(&self) -> &navigation::NavigationFeature {
        &self.navigation
    }

    /// Return mutable access for routing navigation events.
    pub(crate) fn navigation_mut(
        &mut self,
    ) -> &mut navigation::NavigationFeature {
        &mut self.navigation
    }
}
