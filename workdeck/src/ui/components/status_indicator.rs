use iced::widget::{row, text};
use iced::{Color, Element, alignment};

use crate::catalog::WorkspaceStatus;
use crate::theme::{IcedColorPalette, ThemeProps};

const STATUS_GLYPH_SPACING: f32 = 6.0;

/// Palette role used to color a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusTone {
    Progress,
    Attention,
    Neutral,
    Success,
}

/// Props for rendering a status indicator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusIndicatorProps<'a> {
    pub(crate) status: WorkspaceStatus,
    pub(crate) show_label: bool,
    pub(crate) font_size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn glyph(status: WorkspaceStatus) -> &'static str {
    match status {
        WorkspaceStatus::Working => "●",
        WorkspaceStatus::NeedsFeedback => "◆",
        WorkspaceStatus::Planning => "○",
        WorkspaceStatus::ReadyToMerge => "✓",
    }
}

pub(crate) fn label(status: WorkspaceStatus) -> &'static str {
    match status {
        WorkspaceStatus::Working => "Working",
        WorkspaceStatus::NeedsFeedback => "Needs feedback",
        WorkspaceStatus::Planning => "Planning",
        WorkspaceStatus::ReadyToMerge => "Ready to merge",
    }
}

pub(crate) fn tone(status: WorkspaceStatus) -> StatusTone {
    match status {
        WorkspaceStatus::Working => StatusTone::Progress,
        WorkspaceStatus::NeedsFeedback => StatusTone::Attention,
        WorkspaceStatus::Planning => StatusTone::Neutral,
        WorkspaceStatus::ReadyToMerge => StatusTone::Success,
    }
}

/// Render the status glyph, followed by its label when requested.
pub(crate) fn view<'a, Message: 'a>(
    props: StatusIndicatorProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let color = tone_color(tone(props.status), palette);

    let glyph_text =
        text(glyph(props.status)).size(props.font_size).color(color);
    let mut content = row![glyph_text]
        .spacing(STATUS_GLYPH_SPACING)
        .align_y(alignment::Vertical::Center);

    if props.show_label {
        content = content.push(
            text(label(props.status))
                .size(props.font_size)
                .color(palette.dim_white),
        );
    }

    content.into()
}

fn tone_color(tone: StatusTone, palette: &IcedColorPalette) -> Color {
    match tone {
        StatusTone::Progress => palette.blue,
        StatusTone::Attention => palette.yellow,
        StatusTone::Neutral => palette.bright_black,
        StatusTone::Success => palette.green,
    }
}
