pub(crate) mod sidebar;
pub(crate) mod tab_content;
pub(crate) mod top_bar;
pub(crate) mod workspace_tabs;
