use crate::kernel::{Action, Effect, InlineInputKind};
use crate::models::{FileTreeError, NodeKind};

impl super::Store {
    pub(super) fn reduce_inline_input_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InlineInputBeginAdd { parent_id, kind } => {
                let is_folder = self
                    .state
                    .explorer
                    .tree()
                    .get(&parent_id)
                    .is_some_and(|n| n.is_folder());
                if !is_folder {
                    return super::DispatchResult::unchanged();
                }

                // The pending row renders inside the folder, so it has to be open.
                self.state.explorer.set_open(&parent_id, true);
                self.state
                    .ui
                    .inline_input
                    .open(InlineInputKind::new_child(parent_id, kind), String::new());
                super::DispatchResult {
                    effects: vec![Effect::FocusInlineInput],
                    state_changed: true,
                }
            }
            Action::InlineInputBeginRename { node_id } => {
                let Some(name) = self
                    .state
                    .explorer
                    .tree()
                    .get(&node_id)
                    .map(|n| n.name.to_string())
                else {
                    return super::DispatchResult::unchanged();
                };

                self.state
                    .ui
                    .inline_input
                    .open(InlineInputKind::Rename { node_id }, name);
                super::DispatchResult {
                    effects: vec![Effect::FocusInlineInput],
                    state_changed: true,
                }
            }
            Action::InlineInputAppend(ch) => {
                let input = &mut self.state.ui.inline_input;
                if !input.visible {
                    return super::DispatchResult::unchanged();
                }

                input.error = None;
                if input.cursor > input.value.len() {
                    input.cursor = input.value.len();
                }
                input.value.insert(input.cursor, ch);
                input.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InlineInputBackspace => {
                let input = &mut self.state.ui.inline_input;
                if !input.visible || input.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                input.error = None;
                let prev = input.value[..input.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                input.value.drain(prev..input.cursor);
                input.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InlineInputCursorLeft => {
                let input = &mut self.state.ui.inline_input;
                if !input.visible || input.cursor == 0 {
                    return super::DispatchResult::unchanged();
                }

                let prev = input.value[..input.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != input.cursor;
                input.cursor = prev;
                super::DispatchResult::changed(changed)
            }
            Action::InlineInputCursorRight => {
                let input = &mut self.state.ui.inline_input;
                if !input.visible || input.cursor >= input.value.len() {
                    return super::DispatchResult::unchanged();
                }

                let next = input.value[input.cursor..]
                    .chars()
                    .next()
                    .map(|ch| input.cursor + ch.len_utf8())
                    .unwrap_or(input.value.len());
                let changed = next != input.cursor;
                input.cursor = next;
                super::DispatchResult::changed(changed)
            }
            Action::InlineInputAccept => self.accept_inline_input(),
            Action::InlineInputCancel => {
                let input = &mut self.state.ui.inline_input;
                if !input.visible {
                    return super::DispatchResult::unchanged();
                }
                input.reset();
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-inline-input action passed to reduce_inline_input_action"),
        }
    }

    fn accept_inline_input(&mut self) -> super::DispatchResult {
        let input = &mut self.state.ui.inline_input;
        if !input.visible {
            return super::DispatchResult::unchanged();
        }

        // Empty submissions are ignored and the field stays open.
        if input.value.is_empty() {
            return super::DispatchResult::unchanged();
        }

        let Some(kind) = input.kind.clone() else {
            input.reset();
            return super::DispatchResult::changed(true);
        };
        let value = input.value.clone();

        let (op, target, result) = match &kind {
            InlineInputKind::NewFile { parent_id } => (
                "add",
                parent_id,
                self.state
                    .explorer
                    .add_child(parent_id, &value, NodeKind::File)
                    .map(|_| true),
            ),
            InlineInputKind::NewFolder { parent_id } => (
                "add",
                parent_id,
                self.state
                    .explorer
                    .add_child(parent_id, &value, NodeKind::Folder)
                    .map(|_| true),
            ),
            InlineInputKind::Rename { node_id } => (
                "rename",
                node_id,
                self.state.explorer.rename(node_id, &value),
            ),
        };

        let message = match &result {
            Err(FileTreeError::DuplicateName) | Err(FileTreeError::IdExists) => {
                Some("Name already exists")
            }
            Err(FileTreeError::InvalidName) => Some("Invalid name"),
            _ => None,
        };

        if let Some(message) = message {
            let input = &mut self.state.ui.inline_input;
            let prev = input.error.replace(message.to_string());
            let mut dispatch = self.tree_mutation_result(op, target, result);
            dispatch.state_changed = prev.as_deref() != Some(message);
            return dispatch;
        }

        self.state.ui.inline_input.reset();
        let mut dispatch = self.tree_mutation_result(op, target, result);
        dispatch.state_changed = true;
        dispatch
    }
}
