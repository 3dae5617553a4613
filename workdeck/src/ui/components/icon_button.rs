use iced::widget::{button, container, svg};
use iced::{Color, Element, Length, alignment};

use crate::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    /// Rendered in the accent color regardless of hover.
    Active,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square icon button used by window and sidebar controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        palette.dim_foreground,
        palette.blue,
        palette.red,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| iced::widget::button::Style::default())
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    default_base: Color,
    accent: Color,
    danger: Color,
) -> (Color, Color) {
    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Active => (accent, accent),
        IconButtonVariant::Danger => (default_base, danger),
    }
}
