/// Window control requests raised by the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeEvent {
    ToggleFullScreen,
    MinimizeWindow,
    CloseWindow,
    StartWindowDrag,
}
