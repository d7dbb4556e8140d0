use compact_str::CompactString;

use crate::models::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ExplorerAddChild {
        parent_id: CompactString,
        name: String,
        kind: NodeKind,
    },
    ExplorerRename {
        node_id: CompactString,
        new_name: String,
    },
    ExplorerDelete {
        parent_id: CompactString,
        node_id: CompactString,
    },
    ExplorerToggleOpen {
        node_id: CompactString,
    },
    ExplorerSelect {
        node_id: CompactString,
    },
    ExplorerSelectRow {
        row: usize,
    },
    InlineInputBeginAdd {
        parent_id: CompactString,
        kind: NodeKind,
    },
    InlineInputBeginRename {
        node_id: CompactString,
    },
    InlineInputAppend(char),
    InlineInputBackspace,
    InlineInputCursorLeft,
    InlineInputCursorRight,
    InlineInputAccept,
    InlineInputCancel,
    EditorCursorMoved {
        line: u32,
        column: u32,
    },
    EditorContentChanged {
        line_count: u32,
    },
}
