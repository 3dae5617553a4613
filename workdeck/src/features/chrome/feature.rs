use iced::{Task, window};

use super::event::ChromeEvent;
use super::state::ChromeState;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Chrome feature root that owns window mode and emits window tasks.
#[derive(Debug, Default)]
pub(crate) struct ChromeFeature {
    state: ChromeState,
}

impl ChromeFeature {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return whether the main window is fullscreen.
    pub(crate) fn is_fullscreen(&self) -> bool {
        self.state.is_fullscreen()
    }
}

impl Feature for ChromeFeature {
    type Event = ChromeEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: ChromeEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            ChromeEvent::ToggleFullScreen => {
                let mode = if self.state.toggle_fullscreen() {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                log::debug!("window mode: {mode:?}");
                window::latest().and_then(move |id| window::set_mode(id, mode))
            },
            ChromeEvent::MinimizeWindow => {
                window::latest().and_then(|id| window::minimize(id, true))
            },
            ChromeEvent::CloseWindow => {
                window::latest().and_then(window::close)
            },
            ChromeEvent::StartWindowDrag => {
                window::latest().and_then(window::drag)
            },
        }
    }
}
