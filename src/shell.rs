//! Line commands for the headless shell and plain-text rendering of the store.

use std::fmt::Write as _;

use treeshell::kernel::{Action, AppState, Effect, InlineInputKind, InlineInputState, LanguageId};
use treeshell::models::NodeKind;

pub const USAGE: &str = "commands: tree | json | status | logs (log dir) | quit | \
add <parent> file|folder <name> | rename <id> <name> | rm <parent> <id> | \
toggle <id> | select <id> | row <n> | new <parent> file|folder | edit <id> | \
type <text> | backspace | left | right | enter | esc | cursor <line> <col> | lines <n>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tree,
    Json,
    Status,
    Logs,
    Quit,
    Dispatch(Vec<Action>),
}

fn parse_kind(value: &str) -> Option<NodeKind> {
    match value.to_ascii_lowercase().as_str() {
        "file" | "f" => Some(NodeKind::File),
        "folder" | "dir" | "d" => Some(NodeKind::Folder),
        _ => None,
    }
}

fn single(action: Action) -> Option<ShellCommand> {
    Some(ShellCommand::Dispatch(vec![action]))
}

/// Parses one input line. `None` means the line is not a known command.
pub fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let args: Vec<&str> = rest.split_whitespace().collect();

    match (head, args.as_slice()) {
        ("tree", []) => Some(ShellCommand::Tree),
        ("json", []) => Some(ShellCommand::Json),
        ("status", []) => Some(ShellCommand::Status),
        ("logs", []) => Some(ShellCommand::Logs),
        ("quit" | "exit", []) => Some(ShellCommand::Quit),
        ("add", [parent, kind, name]) => single(Action::ExplorerAddChild {
            parent_id: (*parent).into(),
            name: (*name).to_string(),
            kind: parse_kind(kind)?,
        }),
        ("rename", [id, name]) => single(Action::ExplorerRename {
            node_id: (*id).into(),
            new_name: (*name).to_string(),
        }),
        ("rm", [parent, id]) => single(Action::ExplorerDelete {
            parent_id: (*parent).into(),
            node_id: (*id).into(),
        }),
        ("toggle", [id]) => single(Action::ExplorerToggleOpen {
            node_id: (*id).into(),
        }),
        ("select", [id]) => single(Action::ExplorerSelect {
            node_id: (*id).into(),
        }),
        ("row", [n]) => single(Action::ExplorerSelectRow { row: n.parse().ok()? }),
        ("new", [parent, kind]) => single(Action::InlineInputBeginAdd {
            parent_id: (*parent).into(),
            kind: parse_kind(kind)?,
        }),
        ("edit", [id]) => single(Action::InlineInputBeginRename {
            node_id: (*id).into(),
        }),
        // Typed text keeps inner spaces, so use the raw remainder.
        ("type", _) if !rest.is_empty() => Some(ShellCommand::Dispatch(
            rest.chars().map(Action::InlineInputAppend).collect(),
        )),
        ("backspace", []) => single(Action::InlineInputBackspace),
        ("left", []) => single(Action::InlineInputCursorLeft),
        ("right", []) => single(Action::InlineInputCursorRight),
        ("enter", []) => single(Action::InlineInputAccept),
        ("esc", []) => single(Action::InlineInputCancel),
        ("cursor", [line, column]) => single(Action::EditorCursorMoved {
            line: line.parse().ok()?,
            column: column.parse().ok()?,
        }),
        ("lines", [n]) => single(Action::EditorContentChanged {
            line_count: n.parse().ok()?,
        }),
        _ => None,
    }
}

pub fn render_tree(state: &AppState) -> String {
    let explorer = &state.explorer;
    let mut out = String::new();
    for row in &explorer.rows {
        let indent = (explorer.row_indent(row) / 8) as usize;
        let cursor = if row.is_selected { '>' } else { ' ' };
        let marker = match (row.kind, row.is_open) {
            (NodeKind::Folder, true) => "v ",
            (NodeKind::Folder, false) => "> ",
            (NodeKind::File, _) => "  ",
        };
        let _ = writeln!(out, "{cursor}{:indent$}{marker}{}", "", row.name);
    }
    out
}

fn inline_label(input: &InlineInputState) -> String {
    match &input.kind {
        Some(InlineInputKind::Rename { node_id }) => format!("rename {node_id}"),
        Some(kind) => kind.placeholder().to_ascii_lowercase(),
        None => String::new(),
    }
}

/// One notice line for an effect, read against the state after the dispatch.
pub fn render_effect(state: &AppState, effect: &Effect) -> String {
    match effect {
        Effect::FocusInlineInput => {
            let input = &state.ui.inline_input;
            format!("[{}] type a name, then enter or esc", inline_label(input))
        }
        Effect::TreeChanged { version } => format!("tree updated (version {version})"),
        Effect::SelectionChanged { node_id: None } => "selection cleared".to_string(),
        Effect::SelectionChanged {
            node_id: Some(node_id),
        } => match state.explorer.tree().get(node_id) {
            Some(node) if !node.is_folder() => {
                let language = LanguageId::from_name(node.name)
                    .map_or("Plain Text", LanguageId::display_name);
                format!("selected {node_id} ({language})")
            }
            _ => format!("selected {node_id}"),
        },
    }
}

pub fn render_status(state: &AppState) -> String {
    let status = &state.status;
    let mut out = format!(
        "{} | {} | {} lines",
        status.position_label(),
        status.cursor_label(),
        status.line_count
    );
    if let Some(selected) = status.selected_label() {
        let _ = write!(out, " | {selected}");
    }
    if let Some(language) = status.language_id {
        let _ = write!(out, " | {language}");
    }

    let input = &state.ui.inline_input;
    if input.visible {
        let _ = write!(out, "\n[{}] {}", inline_label(input), input.value);
        if let Some(error) = &input.error {
            let _ = write!(out, "  ({error})");
        }
    }
    out
}
