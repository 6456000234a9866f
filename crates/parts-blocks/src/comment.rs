//! Comment style resolution
//!
//! Markers must be valid comments in the aggregate file's language so they
//! do not break parsing or execution of that file. A style is chosen from a
//! token given by the user:
//!
//! - one of the predefined keys in [`PREDEFINED_STYLES`],
//! - `auto`, which picks a predefined key from the file extension,
//! - anything else, used verbatim as a line-comment prefix.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Token that selects a style from the aggregate file's extension.
pub const AUTO_STYLE: &str = "auto";

/// Style key used when auto-detection finds no matching extension.
const DEFAULT_STYLE_KEY: &str = "#";

/// Predefined styles as `(start, end)`. The key of each entry is its `start`.
pub const PREDEFINED_STYLES: &[(&str, &str)] = &[
    ("#", ""),       // Shell, Python, YAML, SSH config
    ("//", ""),      // Go, JavaScript, C++
    ("--", ""),      // SQL, Lua, Haskell
    ("/*", "*/"),    // C, CSS
    (";", ""),       // Lisp, INI
    ("%", ""),       // LaTeX, Erlang
    ("<!--", "-->"), // HTML, XML
    ("'", ""),       // VB
    ("rem", ""),     // Batch
    ("::", ""),      // Batch (alternate)
];

/// The delimiters used to render markers as comments.
///
/// An empty `end` means a line comment; otherwise the pair is a block
/// comment opener and closer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CommentStyle {
    start: String,
    end: String,
}

impl CommentStyle {
    /// A line-comment style such as `#` or `//`.
    pub fn line(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: String::new(),
        }
    }

    /// A block-comment style such as `/*` ... `*/`.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Resolve a style token against the aggregate file name.
    ///
    /// Never fails: an unknown token becomes a custom line-comment prefix.
    ///
    /// # Example
    /// ```
    /// use parts_blocks::CommentStyle;
    ///
    /// assert_eq!(CommentStyle::resolve("auto", "styles.css"), CommentStyle::block("/*", "*/"));
    /// assert_eq!(CommentStyle::resolve("//", "anything"), CommentStyle::line("//"));
    /// assert_eq!(CommentStyle::resolve("@@", "anything"), CommentStyle::line("@@"));
    /// ```
    pub fn resolve(token: &str, filename: impl AsRef<Path>) -> Self {
        if token == AUTO_STYLE {
            let key = detect_style_key(filename);
            if let Some(style) = Self::predefined(key) {
                return style;
            }
        }

        Self::predefined(token).unwrap_or_else(|| Self::line(token))
    }

    /// Look up a predefined style by key.
    pub fn predefined(key: &str) -> Option<Self> {
        PREDEFINED_STYLES
            .iter()
            .find(|(start, _)| *start == key)
            .map(|(start, end)| Self::block(*start, *end))
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether this style has a closing delimiter.
    pub fn is_block(&self) -> bool {
        !self.end.is_empty()
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_block() {
            write!(f, "{} ... {}", self.start, self.end)
        } else {
            write!(f, "{}", self.start)
        }
    }
}

/// Pick a predefined style key from a file name's extension.
///
/// The match is case-insensitive and only the last extension counts. A name
/// that is only an extension (`.bashrc`) is treated as having one. Unknown
/// or missing extensions fall back to `#`.
pub fn detect_style_key(filename: impl AsRef<Path>) -> &'static str {
    let Some(name) = filename.as_ref().file_name() else {
        return DEFAULT_STYLE_KEY;
    };
    let name = name.to_string_lossy();
    let Some(idx) = name.rfind('.') else {
        return DEFAULT_STYLE_KEY;
    };

    match name[idx + 1..].to_lowercase().as_str() {
        "sh" | "bash" | "zsh" | "py" | "yml" | "yaml" | "conf" | "config" => "#",
        "go" | "js" | "ts" | "cpp" | "c" | "h" | "java" | "cs" | "php" | "scss" | "less" => "//",
        "sql" | "lua" | "hs" => "--",
        "css" => "/*",
        "lisp" | "ini" => ";",
        "tex" => "%",
        "html" | "xml" => "<!--",
        "vb" => "'",
        "bat" | "cmd" => "rem",
        _ => DEFAULT_STYLE_KEY,
    }
}
