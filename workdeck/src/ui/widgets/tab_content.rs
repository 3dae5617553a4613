use iced::widget::{button, column, container, text};
use iced::{Element, Length, alignment};

use crate::catalog::Workspace;
use crate::config::ShellTab;
use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;
use crate::ui::components::status_indicator::{self, StatusIndicatorProps};

const TAB_CONTENT_PADDING: f32 = 16.0;
const TAB_CONTENT_SPACING: f32 = 10.0;
const TAB_CONTENT_TITLE_SCALE: f32 = 1.3;
const TAB_CONTENT_BUTTON_PADDING: f32 = 6.0;

/// UI events emitted by the tab content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TabContentEvent {
    ShowSidebar,
}

/// Props for rendering the content hosted for the active tab.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TabContentProps<'a> {
    /// Workspace resolved from the active id, if the catalog holds it.
    pub(crate) workspace: Option<&'a Workspace>,
    pub(crate) active_workspace_id: Option<&'a str>,
    /// Sidebar tab matching the active id, if one is listed.
    pub(crate) tab: Option<&'a ShellTab>,
    pub(crate) active_tab_id: &'a str,
    pub(crate) is_sidebar_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the placeholder host for the active workspace and tab.
pub(crate) fn view<'a>(
    props: TabContentProps<'a>,
) -> Element<'a, TabContentEvent> {
    let palette = props.theme.theme.iced_palette();
    let font_size = props.fonts.ui.size;

    let body: Element<'a, TabContentEvent> = match props.workspace {
        Some(workspace) => {
            let title = text(workspace.name())
                .size(font_size * TAB_CONTENT_TITLE_SCALE)
                .font(props.fonts.ui.emphasized());
            let status = status_indicator::view(StatusIndicatorProps {
                status: workspace.status(),
                show_label: true,
                font_size,
                theme: props.theme,
            });
            let tab_title =
                props.tab.map_or(props.active_tab_id, ShellTab::title);
            let tab_line = text(format!("{tab_title} session"))
                .size(font_size)
                .color(palette.dim_foreground);

            column![title, status, tab_line]
                .spacing(TAB_CONTENT_SPACING)
                .into()
        },
        None => empty_state(props),
    };

    container(body)
        .padding(TAB_CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn empty_state<'a>(
    props: TabContentProps<'a>,
) -> Element<'a, TabContentEvent> {
    let palette = props.theme.theme.iced_palette();
    let message = match props.active_workspace_id {
        Some(id) => format!("Workspace \"{id}\" is not available"),
        None => String::from("No workspace selected"),
    };

    let mut content = column![
        text(message)
            .size(props.fonts.ui.size)
            .color(palette.dim_foreground)
    ]
    .spacing(TAB_CONTENT_SPACING)
    .align_x(alignment::Horizontal::Center);

    if !props.is_sidebar_open {
        let show = button(text("Show sidebar").size(props.fonts.ui.size))
            .on_press(TabContentEvent::ShowSidebar)
            .padding(TAB_CONTENT_BUTTON_PADDING);
        content = content.push(show);
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
