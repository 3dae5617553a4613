use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Border, Element, Length, alignment};

use crate::config::ShellTab;
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};

const SIDEBAR_WIDTH: f32 = 184.0;
const SIDEBAR_ITEM_HEIGHT: f32 = 36.0;
const SIDEBAR_ITEM_ICON_SIZE: f32 = 16.0;
const SIDEBAR_ITEM_SPACING: f32 = 8.0;
const SIDEBAR_ITEM_PADDING: f32 = 10.0;
const SIDEBAR_FOOTER_BUTTON_SIZE: f32 = 28.0;
const SIDEBAR_FOOTER_ICON_SIZE: f32 = 18.0;
const SIDEBAR_FOOTER_PADDING: f32 = 6.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;

/// UI events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    SelectTab(String),
    Collapse,
}

/// Props for rendering the sidebar tab list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) tabs: &'a [ShellTab],
    pub(crate) active_tab_id: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar with one entry per shell tab and a collapse control.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.theme.iced_palette();

    let items = props.tabs.iter().fold(column![], |items, tab| {
        items.push(sidebar_item(
            tab,
            tab.id() == props.active_tab_id,
            props.theme,
            props.fonts,
        ))
    });

    let item_scroll = scrollable::Scrollable::with_direction(
        items.width(Length::Fill),
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let collapse_button = icon_button::view(IconButtonProps {
        icon: icons::SIDEBAR_COLLAPSE,
        theme: props.theme,
        size: SIDEBAR_FOOTER_BUTTON_SIZE,
        icon_size: SIDEBAR_FOOTER_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| SidebarEvent::Collapse);

    let footer = row![Space::new().width(Length::Fill), collapse_button]
        .width(Length::Fill)
        .padding(SIDEBAR_FOOTER_PADDING)
        .align_y(alignment::Vertical::Center);

    container(column![item_scroll, footer])
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn sidebar_item<'a>(
    tab: &'a ShellTab,
    is_active: bool,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, SidebarEvent> {
    let palette = theme.theme.iced_palette();
    let base_color = palette.dim_foreground;
    let hover_color = palette.foreground;
    let active_color = palette.blue;

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::SIDEBAR_TAB))
        .width(Length::Fixed(SIDEBAR_ITEM_ICON_SIZE))
        .height(Length::Fixed(SIDEBAR_ITEM_ICON_SIZE))
        .style(move |_, status| {
            let color = if is_active {
                active_color
            } else if status == svg::Status::Hovered {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let title_font = if is_active {
        fonts.ui.emphasized()
    } else {
        fonts.ui.font_type
    };
    let title = text(tab.title())
        .size(fonts.ui.size)
        .font(title_font)
        .color(if is_active {
            palette.foreground
        } else {
            palette.dim_foreground
        });

    let label = row![icon, title]
        .spacing(SIDEBAR_ITEM_SPACING)
        .padding([0.0, SIDEBAR_ITEM_PADDING])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let border_color = if is_active {
        palette.blue
    } else {
        iced::Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let item_background: Option<iced::Background> = if is_active {
        Some(palette.overlay.into())
    } else {
        None
    };

    button(row![border_strip, label].height(Length::Fill))
        .on_press(SidebarEvent::SelectTab(tab.id().to_string()))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(SIDEBAR_ITEM_HEIGHT))
        .style(move |_, _| iced::widget::button::Style {
            background: item_background,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}
