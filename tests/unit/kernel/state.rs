use super::*;
use crate::models::seed_tree;

fn explorer() -> ExplorerState {
    ExplorerState::new(seed_tree(), &ExplorerSettings::default())
}

#[test]
fn status_bar_starts_at_first_line() {
    let status = StatusBarState::default();
    assert_eq!(status.position_label(), "1:1");
    assert_eq!(status.cursor_label(), "Ln 1, Col 1");
    assert_eq!(status.line_count, 1);
    assert_eq!(status.selected_label(), None);
}

#[test]
fn status_bar_cursor_labels() {
    let mut status = StatusBarState::default();
    assert!(status.set_cursor(3, 7));
    assert!(!status.set_cursor(3, 7));
    assert_eq!(status.position_label(), "3:7");
    assert_eq!(status.cursor_label(), "Ln 3, Col 7");

    assert!(status.set_cursor(0, 0));
    assert_eq!(status.position_label(), "1:1");
}

#[test]
fn status_bar_line_count_is_at_least_one() {
    let mut status = StatusBarState::default();
    assert!(status.set_line_count(42));
    assert!(status.set_line_count(0));
    assert_eq!(status.line_count, 1);
}

#[test]
fn status_bar_selection_tracks_language() {
    let tree = seed_tree();
    let mut status = StatusBarState::default();

    assert!(status.set_selection(tree.get("src/index.js")));
    assert_eq!(status.selected_label().as_deref(), Some("Selected: index.js"));
    assert_eq!(status.language_id, Some("javascript"));

    assert!(status.set_selection(tree.get("src")));
    assert_eq!(status.language_id, None);

    assert!(status.set_selection(tree.get("public/favicon.ico")));
    assert_eq!(status.language_id, Some("plaintext"));

    assert!(status.set_selection(None));
    assert_eq!(status.selected_label(), None);
}

#[test]
fn explorer_starts_with_root_row_only() {
    let state = explorer();
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].id, "root");
    assert_eq!(state.version, 0);
}

#[test]
fn explorer_root_open_setting_expands_root() {
    let settings = ExplorerSettings {
        root_open: true,
        ..ExplorerSettings::default()
    };
    let state = ExplorerState::new(seed_tree(), &settings);
    assert_eq!(state.rows.len(), 5);
    assert_eq!(state.row_indent(&state.rows[1]), 16);
}

#[test]
fn explorer_add_child_opens_parent_and_bumps_version() {
    let mut state = explorer();
    state.add_child("src", "utils.js", NodeKind::File).unwrap();
    assert_eq!(state.version, 1);
    assert!(state.tree().is_open("src"));
}

#[test]
fn explorer_add_child_without_expand_on_create() {
    let settings = ExplorerSettings {
        expand_on_create: false,
        ..ExplorerSettings::default()
    };
    let mut state = ExplorerState::new(seed_tree(), &settings);
    state.add_child("src", "utils.js", NodeKind::File).unwrap();
    assert!(!state.tree().is_open("src"));
}

#[test]
fn explorer_failed_mutation_keeps_version() {
    let mut state = explorer();
    assert!(state.add_child("src", "", NodeKind::File).is_err());
    assert!(state.rename("missing", "x").is_err());
    assert!(state.delete_child("root", "src/index.js").is_err());
    assert_eq!(state.rename("src", "src"), Ok(false));
    assert_eq!(state.version, 0);
}

#[test]
fn explorer_select_row_marks_row() {
    let mut state = explorer();
    state.toggle_open("root");
    assert!(state.select_row(2));
    assert_eq!(state.selected().map(|n| n.id), Some("public"));
    assert!(state.rows[2].is_selected);
    assert!(!state.select_row(2));
    assert!(!state.select_row(99));
}
