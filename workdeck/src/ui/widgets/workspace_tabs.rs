use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length};

use crate::catalog::Workspace;
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::ui::components::status_indicator::{self, StatusIndicatorProps};

const WORKSPACE_TABS_HEIGHT: f32 = 30.0;
const WORKSPACE_TAB_WIDTH: f32 = 200.0;
const WORKSPACE_TAB_SPACING: f32 = 8.0;
const WORKSPACE_TAB_PADDING: f32 = 10.0;
const WORKSPACE_TAB_LABEL_SCALE: f32 = 0.93;
const WORKSPACE_TOGGLE_BUTTON_SIZE: f32 = 30.0;
const WORKSPACE_TOGGLE_ICON_SIZE: f32 = 18.0;

/// UI events emitted by the workspace tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkspaceTabsEvent {
    SelectWorkspace(String),
    CollapseSidebar,
    ExpandSidebar,
    AddWorkspace,
}

/// Props for rendering the workspace tab strip.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkspaceTabsProps<'a> {
    pub(crate) workspaces: &'a [Workspace],
    pub(crate) active_workspace_id: Option<&'a str>,
    pub(crate) is_sidebar_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar toggle, one tab per catalog workspace and the add
/// button.
pub(crate) fn view<'a>(
    props: WorkspaceTabsProps<'a>,
) -> Element<'a, WorkspaceTabsEvent> {
    let (toggle_icon, toggle_event) = if props.is_sidebar_open {
        (icons::SIDEBAR_COLLAPSE, WorkspaceTabsEvent::CollapseSidebar)
    } else {
        (icons::SIDEBAR_EXPAND, WorkspaceTabsEvent::ExpandSidebar)
    };

    let toggle = icon_button::view(IconButtonProps {
        icon: toggle_icon,
        theme: props.theme,
        size: WORKSPACE_TOGGLE_BUTTON_SIZE,
        icon_size: WORKSPACE_TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(move |_| toggle_event.clone());

    let add = icon_button::view(IconButtonProps {
        icon: icons::WORKSPACE_ADD,
        theme: props.theme,
        size: WORKSPACE_TOGGLE_BUTTON_SIZE,
        icon_size: WORKSPACE_TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| WorkspaceTabsEvent::AddWorkspace);

    let tabs_row = props
        .workspaces
        .iter()
        .fold(row![], |tabs, workspace| {
            tabs.push(workspace_tab(
                workspace,
                props.active_workspace_id == Some(workspace.id()),
                props.theme,
                props.fonts,
            ))
        })
        .push(add)
        .align_y(Alignment::Center);

    let scroll = scrollable::Scrollable::with_direction(
        tabs_row,
        scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill);

    let palette = props.theme.theme.iced_palette();

    container(row![toggle, scroll].align_y(Alignment::Center))
        .height(Length::Fixed(WORKSPACE_TABS_HEIGHT))
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            text_color: None,
            ..Default::default()
        })
        .into()
}

fn workspace_tab<'a>(
    workspace: &'a Workspace,
    is_active: bool,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, WorkspaceTabsEvent> {
    let palette = theme.theme.iced_palette();
    let foreground = palette.foreground;
    let dim_foreground = palette.dim_foreground;
    let background = palette.background;
    let dim_black = palette.dim_black;
    let font_size = fonts.ui.size * WORKSPACE_TAB_LABEL_SCALE;

    let indicator = status_indicator::view(StatusIndicatorProps {
        status: workspace.status(),
        show_label: false,
        font_size,
        theme,
    });

    let name = text(workspace.name())
        .size(font_size)
        .width(Length::Fill)
        .wrapping(Wrapping::None);

    let pill_content = row![indicator, name]
        .spacing(WORKSPACE_TAB_SPACING)
        .align_y(Alignment::Center)
        .height(Length::Fill);

    let pill = container(pill_content)
        .padding([0.0, WORKSPACE_TAB_PADDING])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| {
            if is_active {
                workspace_tab_style(background, foreground)
            } else {
                workspace_tab_style(dim_black, dim_foreground)
            }
        });

    button(pill)
        .on_press(WorkspaceTabsEvent::SelectWorkspace(
            workspace.id().to_string(),
        ))
        .padding(0)
        .width(Length::Fixed(WORKSPACE_TAB_WIDTH))
        .height(Length::Fill)
        .into()
}

fn workspace_tab_style(
    background: Color,
    foreground: Color,
) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(background.into()),
        text_color: Some(foreground),
        ..Default::default()
    }
}
