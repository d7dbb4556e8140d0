use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerAddChild {
                parent_id,
                name,
                kind,
            } => {
                let result = self
                    .state
                    .explorer
                    .add_child(&parent_id, &name, kind)
                    .map(|_| true);
                self.tree_mutation_result("add", &parent_id, result)
            }
            Action::ExplorerRename { node_id, new_name } => {
                let result = self.state.explorer.rename(&node_id, &new_name);
                self.tree_mutation_result("rename", &node_id, result)
            }
            Action::ExplorerDelete { parent_id, node_id } => {
                let result = self
                    .state
                    .explorer
                    .delete_child(&parent_id, &node_id)
                    .map(|_| true);
                self.tree_mutation_result("delete", &node_id, result)
            }
            Action::ExplorerToggleOpen { node_id } => {
                super::DispatchResult::changed(self.state.explorer.toggle_open(&node_id))
            }
            Action::ExplorerSelect { node_id } => {
                super::DispatchResult::changed(self.state.explorer.select(&node_id))
            }
            Action::ExplorerSelectRow { row } => {
                super::DispatchResult::changed(self.state.explorer.select_row(row))
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }
}
