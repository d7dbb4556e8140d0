use compact_str::CompactString;

use crate::models::FileTreeError;

use super::{Action, AppState, Effect, InlineInputKind};

mod explorer;
mod inline_input;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Session container. All state changes go through [`Store::dispatch`].
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let prev_selected = self.state.explorer.selected().map(|n| n.key);

        let mut result = match action {
            Action::ExplorerAddChild { .. }
            | Action::ExplorerRename { .. }
            | Action::ExplorerDelete { .. }
            | Action::ExplorerToggleOpen { .. }
            | Action::ExplorerSelect { .. }
            | Action::ExplorerSelectRow { .. } => self.reduce_explorer_action(action),
            Action::InlineInputBeginAdd { .. }
            | Action::InlineInputBeginRename { .. }
            | Action::InlineInputAppend(_)
            | Action::InlineInputBackspace
            | Action::InlineInputCursorLeft
            | Action::InlineInputCursorRight
            | Action::InlineInputAccept
            | Action::InlineInputCancel => self.reduce_inline_input_action(action),
            Action::EditorCursorMoved { line, column } => {
                DispatchResult::changed(self.state.status.set_cursor(line, column))
            }
            Action::EditorContentChanged { line_count } => {
                DispatchResult::changed(self.state.status.set_line_count(line_count))
            }
        };

        if self.drop_stale_inline_input() {
            result.state_changed = true;
        }

        let selected = self.state.explorer.selected();
        if selected.map(|n| n.key) != prev_selected {
            result.effects.push(Effect::SelectionChanged {
                node_id: selected.map(|n| CompactString::from(n.id)),
            });
            result.state_changed = true;
        }
        if self.state.status.set_selection(selected) {
            result.state_changed = true;
        }

        result
    }

    /// Closes the inline input when the node it points at was removed.
    fn drop_stale_inline_input(&mut self) -> bool {
        let input = &self.state.ui.inline_input;
        let Some(kind) = input.kind.as_ref() else {
            return false;
        };
        let target = match kind {
            InlineInputKind::NewFile { parent_id } | InlineInputKind::NewFolder { parent_id } => {
                parent_id
            }
            InlineInputKind::Rename { node_id } => node_id,
        };
        if self.state.explorer.tree().contains(target) {
            return false;
        }
        self.state.ui.inline_input.reset();
        true
    }

    fn tree_mutation_result(
        &self,
        op: &'static str,
        target: &str,
        result: Result<bool, FileTreeError>,
    ) -> DispatchResult {
        match result {
            Ok(true) => {
                let version = self.state.explorer.version;
                tracing::info!(
                    target: "treeshell::explorer",
                    op,
                    node = target,
                    version,
                    "tree updated"
                );
                DispatchResult {
                    effects: vec![Effect::TreeChanged { version }],
                    state_changed: true,
                }
            }
            Ok(false) => DispatchResult::unchanged(),
            Err(err) => {
                tracing::debug!(
                    target: "treeshell::explorer",
                    op,
                    node = target,
                    error = %err,
                    "tree mutation ignored"
                );
                DispatchResult::unchanged()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
