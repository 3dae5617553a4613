pub(crate) const WINDOW_FULLSCREEN: &[u8] =
    include_bytes!("../../assets/svg/fullscreen.svg");
pub(crate) const WINDOW_TRAY: &[u8] =
    include_bytes!("../../assets/svg/tray.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../../assets/svg/window_close.svg");
pub(crate) const LOGO_SMALL: &[u8] =
    include_bytes!("../../assets/svg/logo-small.svg");
pub(crate) const SIDEBAR_TAB: &[u8] =
    include_bytes!("../../assets/svg/terminal.svg");
pub(crate) const SIDEBAR_COLLAPSE: &[u8] =
    include_bytes!("../../assets/svg/sidebar-collapse.svg");
pub(crate) const SIDEBAR_EXPAND: &[u8] =
    include_bytes!("../../assets/svg/sidebar-expand.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../assets/logo/logo-small.png");
pub(crate) const WORKSPACE_ADD: &[u8] =
    include_bytes!("../../assets/svg/plus.svg");
