use super::*;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_at_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path), Some(Settings::default()));

    std::fs::write(&path, r#"{ "explorer": { "indent_width": 24 } }"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.explorer.indent_width, 24);
    assert!(settings.explorer.expand_on_create);
}

#[test]
fn load_settings_from_rejects_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), None);
}

#[test]
fn load_settings_from_missing_file_is_none() {
    let dir = tempdir().unwrap();
    assert_eq!(load_settings_from(&dir.path().join("missing.json")), None);
}

#[test]
fn settings_path_uses_app_dir() {
    let Some(path) = get_settings_path() else {
        return;
    };
    assert!(path.ends_with(Path::new(SETTINGS_DIR).join(SETTINGS_FILE)));
}
