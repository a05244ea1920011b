//! Filename-based language hints for syntax highlighting.
//!
//! The server strips display extensions from document keys, so `/xyz.py`
//! loads document `xyz`; the extension only tells the client which syntax to
//! highlight with and which label to show.

/// Trailing extension of the last path segment, lowercased check left to the
/// caller. `None` for extension-less paths and dotfiles.
pub fn display_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Human-readable label for a file extension, for status display.
pub fn language_label(ext: &str) -> Option<&'static str> {
    let label = match ext.to_ascii_lowercase().as_str() {
        "c" | "h" => "C",
        "cpp" | "cc" | "hpp" => "C++",
        "cs" => "C#",
        "css" => "CSS",
        "go" => "Go",
        "hs" => "Haskell",
        "html" | "htm" => "HTML",
        "java" => "Java",
        "js" | "mjs" | "cjs" => "JavaScript",
        "json" => "JSON",
        "lua" => "Lua",
        "md" | "markdown" => "Markdown",
        "php" => "PHP",
        "pl" => "Perl",
        "py" | "pyw" => "Python",
        "rb" => "Ruby",
        "rs" => "Rust",
        "scala" => "Scala",
        "sh" | "bash" => "Shell",
        "sql" => "SQL",
        "tex" => "LaTeX",
        "toml" => "TOML",
        "xml" => "XML",
        "yaml" | "yml" => "YAML",
        _ => return None,
    };
    Some(label)
}
