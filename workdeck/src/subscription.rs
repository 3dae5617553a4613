use std::time::Duration;

use iced::Subscription;

use crate::app::{App, Event};

const CATALOG_POLL_MS: u64 = 2000;

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    if !app.catalog.is_live() {
        return Subscription::none();
    }

    iced::time::every(Duration::from_millis(CATALOG_POLL_MS))
        .map(|_| Event::CatalogTick)
}
