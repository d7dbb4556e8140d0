use crate::kernel::language::{language_id_for_name, LanguageId, PLAIN_TEXT};

#[test]
fn from_name_maps_seed_extensions() {
    let cases = [
        ("index.js", Some(LanguageId::JavaScript)),
        ("styles.css", Some(LanguageId::Css)),
        ("index.html", Some(LanguageId::Html)),
        ("package.json", Some(LanguageId::Json)),
        ("README.md", Some(LanguageId::Markdown)),
        ("favicon.ico", None),
        ("Makefile", None),
    ];

    for (name, expected) in cases {
        assert_eq!(LanguageId::from_name(name), expected, "{name}");
    }
}

#[test]
fn from_name_uses_last_extension() {
    assert_eq!(
        LanguageId::from_name("app.test.tsx"),
        Some(LanguageId::Tsx)
    );
    assert_eq!(LanguageId::from_name(".bashrc"), None);
}

#[test]
fn editor_language_id_mapping() {
    let cases = [
        (LanguageId::JavaScript, "javascript"),
        (LanguageId::Jsx, "javascriptreact"),
        (LanguageId::Tsx, "typescriptreact"),
        (LanguageId::Markdown, "markdown"),
        (LanguageId::Bash, "shell"),
    ];

    for (lang, expected) in cases {
        assert_eq!(lang.language_id(), expected);
    }
}

#[test]
fn unknown_names_fall_back_to_plain_text() {
    assert_eq!(language_id_for_name("favicon.ico"), PLAIN_TEXT);
    assert_eq!(language_id_for_name("utils.js"), "javascript");
}

#[test]
fn display_names_are_human_readable() {
    assert_eq!(LanguageId::JavaScript.display_name(), "JavaScript");
    assert_eq!(LanguageId::Cpp.display_name(), "C++");
    assert_eq!(LanguageId::Json.display_name(), "JSON");
}
