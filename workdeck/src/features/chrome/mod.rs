mod event;
mod feature;
mod state;

pub(crate) use event::ChromeEvent;
pub(crate) use feature::ChromeFeature;
