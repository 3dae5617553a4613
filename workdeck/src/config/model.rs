use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::features::navigation::SelectionPolicy;

const DEFAULT_TAB_ID: &str = "1";

/// A top-level navigational slot listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ShellTab {
    id: String,
    title: String,
}

impl ShellTab {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }
}

/// Startup configuration of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    default_tab_id: String,
    tabs: Vec<ShellTab>,
    catalog_path: Option<PathBuf>,
    selection_policy: SelectionPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_tab_id: String::from(DEFAULT_TAB_ID),
            tabs: vec![
                ShellTab::new("1", "Terminal"),
                ShellTab::new("2", "Changes"),
                ShellTab::new("3", "Notes"),
            ],
            catalog_path: None,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl ShellConfig {
    pub(crate) fn default_tab_id(&self) -> &str {
        &self.default_tab_id
    }

    pub(crate) fn tabs(&self) -> &[ShellTab] {
        &self.tabs
    }

    /// Look up a sidebar tab by id.
    pub(crate) fn tab(&self, id: &str) -> Option<&ShellTab> {
        self.tabs.iter().find(|tab| tab.id() == id)
    }

    pub(crate) fn catalog_path(&self) -> Option<&std::path::Path> {
        self.catalog_path.as_deref()
    }

    pub(crate) fn selection_policy(&self) -> SelectionPolicy {
        self.selection_policy
    }
}
