use iced::widget::{MouseArea, Space, Stack, button, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::icons::{
    LOGO_SMALL, SIDEBAR_EXPAND, WINDOW_CLOSE, WINDOW_FULLSCREEN, WINDOW_TRAY,
};
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};

const TOP_BAR_HEIGHT: f32 = 30.0;
const TOP_BAR_TITLE_SCALE: f32 = 0.9;
const TOP_BAR_CONTROL_BUTTON_SIZE: f32 = 24.0;
const TOP_BAR_CONTROL_ICON_SIZE: f32 = 18.0;
const TOP_BAR_LOGO_ICON_SIZE: f32 = 18.0;
const TOP_BAR_HORIZONTAL_PADDING: f32 = 12.0;
const TOP_BAR_RIGHT_PADDING: f32 = 8.0;
const TOP_BAR_LEFT_SPACING: f32 = 8.0;
const TOP_BAR_CONTROLS_SPACING: f32 = 6.0;

/// UI events emitted by the window top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TopBarEvent {
    ToggleSidebar,
    OpenSidebar,
    ToggleFullScreen,
    MinimizeWindow,
    CloseWindow,
    StartWindowDrag,
}

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) is_sidebar_open: bool,
    pub(crate) is_fullscreen: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// The draggable window header with logo, title and window controls.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarEvent> {
    let title_font_size = props.fonts.ui.size * TOP_BAR_TITLE_SCALE;

    let palette = props.theme.theme.iced_palette();

    let title = text(props.title)
        .size(title_font_size)
        .font(props.fonts.ui.emphasized());

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO_SMALL))
        .width(Length::Fixed(TOP_BAR_LOGO_ICON_SIZE))
        .height(Length::Fixed(TOP_BAR_LOGO_ICON_SIZE));

    let logo_button = button(
        container(logo)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(TopBarEvent::ToggleSidebar)
    .padding([0.0, TOP_BAR_HORIZONTAL_PADDING])
    .height(Length::Fill)
    .style(|_, _| iced::widget::button::Style::default());

    let mut left_controls = row![logo_button]
        .spacing(TOP_BAR_LEFT_SPACING)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    if !props.is_sidebar_open {
        left_controls = left_controls.push(
            control_button(
                SIDEBAR_EXPAND,
                IconButtonVariant::Standard,
                props.theme,
            )
            .map(|_| TopBarEvent::OpenSidebar),
        );
    }

    let center_zone = container(title)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, TOP_BAR_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        });

    let fullscreen_variant = if props.is_fullscreen {
        IconButtonVariant::Active
    } else {
        IconButtonVariant::Standard
    };

    let controls_row = row![
        control_button(WINDOW_FULLSCREEN, fullscreen_variant, props.theme)
            .map(|_| TopBarEvent::ToggleFullScreen),
        control_button(WINDOW_TRAY, IconButtonVariant::Standard, props.theme)
            .map(|_| TopBarEvent::MinimizeWindow),
        control_button(WINDOW_CLOSE, IconButtonVariant::Danger, props.theme)
            .map(|_| TopBarEvent::CloseWindow),
    ]
    .spacing(TOP_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let controls_container = container(controls_row)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, TOP_BAR_RIGHT_PADDING]);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(TopBarEvent::StartWindowDrag)
    .on_double_click(TopBarEvent::ToggleFullScreen);

    let base_row = row![
        left_controls,
        Space::new().width(Length::Fill),
        controls_container
    ]
    .spacing(TOP_BAR_LEFT_SPACING)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Stack::new()
        .push(drag_surface)
        .push(center_zone)
        .push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn control_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: TOP_BAR_CONTROL_BUTTON_SIZE,
        icon_size: TOP_BAR_CONTROL_ICON_SIZE,
        variant,
    })
}
