use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub explorer: ExplorerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    /// Horizontal indent per tree level, in pixels.
    pub indent_width: u16,
    /// Open the target folder after a child is added to it.
    pub expand_on_create: bool,
    pub root_open: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            indent_width: 16,
            expand_on_create: true,
            root_open: false,
        }
    }
}
