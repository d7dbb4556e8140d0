use std::path::Path;

/// Language ids understood by the embedded editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
    C,
    Cpp,
    Java,
    Json,
    Yaml,
    Html,
    Xml,
    Css,
    Toml,
    Markdown,
    Bash,
}

pub const PLAIN_TEXT: &str = "plaintext";

impl LanguageId {
    pub fn from_name(name: &str) -> Option<Self> {
        match Path::new(name).extension().and_then(|s| s.to_str())? {
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "py" | "pyi" => Some(Self::Python),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "c" => Some(Self::C),
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" | "h" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "html" | "htm" => Some(Self::Html),
            "xml" | "xsl" | "svg" => Some(Self::Xml),
            "css" => Some(Self::Css),
            "toml" => Some(Self::Toml),
            "md" | "markdown" => Some(Self::Markdown),
            "sh" | "bash" | "zsh" => Some(Self::Bash),
            _ => None,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Jsx => "javascriptreact",
            Self::Tsx => "typescriptreact",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Css => "css",
            Self::Toml => "toml",
            Self::Markdown => "markdown",
            Self::Bash => "shell",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Jsx => "JSX",
            Self::Tsx => "TSX",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Html => "HTML",
            Self::Xml => "XML",
            Self::Css => "CSS",
            Self::Toml => "TOML",
            Self::Markdown => "Markdown",
            Self::Bash => "Shell",
        }
    }
}

/// Language id for a file name, falling back to plain text.
pub fn language_id_for_name(name: &str) -> &'static str {
    LanguageId::from_name(name)
        .map(LanguageId::language_id)
        .unwrap_or(PLAIN_TEXT)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
