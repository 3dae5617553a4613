use iced::widget::{Space, column, container, row};
use iced::{Element, Length, Theme};

use super::{APP_TITLE, App, Event};
use crate::theme::ThemeProps;
use crate::ui::widgets::{sidebar, tab_content, top_bar, workspace_tabs};

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SIDEBAR_SEPARATOR_WIDTH: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let navigation = app.features.navigation();

    let header = view_header(app, theme_props);

    let workspace_tabs =
        workspace_tabs::view(workspace_tabs::WorkspaceTabsProps {
            workspaces: app.catalog.workspaces(),
            active_workspace_id: navigation.active_workspace_id(),
            is_sidebar_open: navigation.is_sidebar_open(),
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(Event::WorkspaceTabs);

    let active_tab_id = navigation.active_tab_id();
    let content = tab_content::view(tab_content::TabContentProps {
        workspace: navigation.resolve_active_workspace(app.catalog.as_ref()),
        active_workspace_id: navigation.active_workspace_id(),
        tab: app.config.tab(active_tab_id),
        active_tab_id,
        is_sidebar_open: navigation.is_sidebar_open(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(Event::TabContent);

    let main_column = column![workspace_tabs, content]
        .width(Length::Fill)
        .height(Length::Fill);

    let body: Element<'_, Event, Theme, iced::Renderer> =
        if navigation.is_sidebar_open() {
            let sidebar = sidebar::view(sidebar::SidebarProps {
                tabs: app.config.tabs(),
                active_tab_id,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(Event::Sidebar);

            row![
                sidebar,
                separator(
                    theme_props,
                    Length::Fixed(SIDEBAR_SEPARATOR_WIDTH),
                    Length::Fill
                ),
                main_column
            ]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        } else {
            main_column.into()
        };

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the top bar and its bottom separator line.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let navigation = app.features.navigation();
    let title = app.active_workspace_name().unwrap_or(APP_TITLE);

    let header = top_bar::view(top_bar::TopBarProps {
        title,
        is_sidebar_open: navigation.is_sidebar_open(),
        is_fullscreen: app.features.chrome().is_fullscreen(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(Event::TopBar);

    column![
        header,
        separator(
            theme_props,
            Length::Fill,
            Length::Fixed(HEADER_SEPARATOR_HEIGHT)
        )
    ]
    .width(Length::Fill)
    .height(Length::Shrink)
    .into()
}

fn separator<'a>(
    theme_props: ThemeProps<'a>,
    width: Length,
    height: Length,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();

    container(Space::new())
        .width(width)
        .height(height)
        .style(move |_| {
            let mut background = palette.dim_white;
            background.a = SEPARATOR_ALPHA;
            iced::widget::container::Style {
                background: Some(background.into()),
                ..Default::default()
            }
        })
        .into()
}
