use iced::Font;
use iced::font::Weight;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: 14.0,
        }
    }
}

impl UiFonts {
    /// Return the same family with a heavier weight for emphasized labels.
    pub(crate) fn emphasized(&self) -> Font {
        Font {
            weight: Weight::Semibold,
            ..self.font_type
        }
    }
}

/// Font configuration shared by all shell widgets.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
}
