use compact_str::CompactString;

use crate::kernel::language::language_id_for_name;
use crate::kernel::services::ports::{ExplorerSettings, Settings};
use crate::models::{FileTree, FileTreeError, FileTreeRow, Node, NodeId, NodeKind, NodeRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineInputKind {
    NewFile { parent_id: CompactString },
    NewFolder { parent_id: CompactString },
    Rename { node_id: CompactString },
}

impl InlineInputKind {
    pub fn new_child(parent_id: CompactString, kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Self::NewFile { parent_id },
            NodeKind::Folder => Self::NewFolder { parent_id },
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::NewFile { .. } => "New file",
            Self::NewFolder { .. } => "New folder",
            Self::Rename { .. } => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineInputState {
    pub visible: bool,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InlineInputKind>,
}

impl InlineInputState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open(&mut self, kind: InlineInputKind, value: String) {
        self.cursor = value.len();
        self.value = value;
        self.error = None;
        self.kind = Some(kind);
        self.visible = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub inline_input: InlineInputState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarState {
    pub line: u32,
    pub column: u32,
    pub line_count: u32,
    pub selected_name: Option<CompactString>,
    pub language_id: Option<&'static str>,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            line_count: 1,
            selected_name: None,
            language_id: None,
        }
    }
}

impl StatusBarState {
    /// Positions are 1-based; zero is clamped to the first line/column.
    pub fn set_cursor(&mut self, line: u32, column: u32) -> bool {
        let line = line.max(1);
        let column = column.max(1);
        if self.line == line && self.column == column {
            return false;
        }
        self.line = line;
        self.column = column;
        true
    }

    pub fn set_line_count(&mut self, line_count: u32) -> bool {
        let line_count = line_count.max(1);
        if self.line_count == line_count {
            return false;
        }
        self.line_count = line_count;
        true
    }

    pub fn set_selection(&mut self, node: Option<NodeRef<'_>>) -> bool {
        let name = node.map(|n| CompactString::from(n.name));
        let language_id = node
            .filter(|n| n.kind == NodeKind::File)
            .map(|n| language_id_for_name(n.name));
        if self.selected_name == name && self.language_id == language_id {
            return false;
        }
        self.selected_name = name;
        self.language_id = language_id;
        true
    }

    pub fn position_label(&self) -> String {
        format!("{}:{}", self.line, self.column)
    }

    pub fn cursor_label(&self) -> String {
        format!("Ln {}, Col {}", self.line, self.column)
    }

    pub fn selected_label(&self) -> Option<String> {
        self.selected_name
            .as_ref()
            .map(|name| format!("Selected: {name}"))
    }
}

pub struct ExplorerState {
    tree: FileTree,
    pub rows: Vec<FileTreeRow>,
    /// Bumped on every structural change or rename.
    pub version: u64,
    pub indent_width: u16,
    pub expand_on_create: bool,
}

impl std::fmt::Debug for ExplorerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerState")
            .field("version", &self.version)
            .field("nodes", &self.tree.node_count())
            .field("rows_len", &self.rows.len())
            .field("selected", &self.tree.selected().map(|n| n.id))
            .finish()
    }
}

impl ExplorerState {
    pub fn new(mut tree: FileTree, settings: &ExplorerSettings) -> Self {
        if settings.root_open {
            let root = tree.root_id().to_string();
            tree.set_open(&root, true);
        }
        let mut state = Self {
            tree,
            rows: Vec::new(),
            version: 0,
            indent_width: settings.indent_width,
            expand_on_create: settings.expand_on_create,
        };
        state.refresh_rows();
        state
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn snapshot(&self) -> Node {
        self.tree.snapshot()
    }

    pub fn selected(&self) -> Option<NodeRef<'_>> {
        self.tree.selected()
    }

    pub fn row_indent(&self, row: &FileTreeRow) -> u32 {
        u32::from(row.depth) * u32::from(self.indent_width)
    }

    fn refresh_rows(&mut self) {
        self.rows = self.tree.flatten_for_view();
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.refresh_rows();
    }

    pub fn add_child(
        &mut self,
        parent_id: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, FileTreeError> {
        let key = self.tree.add_child(parent_id, name, kind)?;
        if self.expand_on_create {
            self.tree.set_open(parent_id, true);
        }
        self.bump_version();
        Ok(key)
    }

    pub fn rename(&mut self, node_id: &str, new_name: &str) -> Result<bool, FileTreeError> {
        let changed = self.tree.rename(node_id, new_name)?;
        if changed {
            self.bump_version();
        }
        Ok(changed)
    }

    pub fn delete_child(&mut self, parent_id: &str, node_id: &str) -> Result<usize, FileTreeError> {
        let removed = self.tree.delete_child(parent_id, node_id)?;
        self.bump_version();
        Ok(removed)
    }

    pub fn toggle_open(&mut self, node_id: &str) -> bool {
        if !self.tree.toggle_open(node_id) {
            return false;
        }
        self.refresh_rows();
        true
    }

    pub fn set_open(&mut self, node_id: &str, open: bool) -> bool {
        if !self.tree.set_open(node_id, open) {
            return false;
        }
        self.refresh_rows();
        true
    }

    pub fn select(&mut self, node_id: &str) -> bool {
        if !self.tree.select(node_id) {
            return false;
        }
        self.refresh_rows();
        true
    }

    pub fn select_row(&mut self, row: usize) -> bool {
        let Some(id) = self.rows.get(row).map(|r| r.id.clone()) else {
            return false;
        };
        self.select(&id)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub ui: UiState,
    pub explorer: ExplorerState,
    pub status: StatusBarState,
}

impl AppState {
    pub fn new(tree: FileTree, settings: Settings) -> Self {
        let explorer = ExplorerState::new(tree, &settings.explorer);
        let mut status = StatusBarState::default();
        status.set_selection(explorer.selected());
        Self {
            settings,
            ui: UiState::default(),
            explorer,
            status,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
