//! Symbolic name derivation for string-pool values.
//!
//! Turns an arbitrary string-pool value into a short C identifier.
//!
//! # Derivation Steps
//!
//! | Step | Example input | Example output |
//! |------|---------------|----------------|
//! | trim whitespace | `"  hello "` | `hello` |
//! | keep last `/` segment | `"ui/login/title"` | `title` |
//! | empty text | `""` | `empty` |
//! | leading digit | `"3d"` | `_3d` |
//! | `%` marker | `"%d items"` | `FMT_d_items` |
//! | non-word runs | `"foo?!bar"` | `foo_bar` |
//! | truncate | 30 letters | first 20 letters |

/// Longest symbolic name the generator emits.
pub const MAX_NAME_LEN: usize = 20;

/// Name used for values that are empty after trimming and slicing.
pub const EMPTY_NAME: &str = "empty";

/// Replacement for every `%` in a value.
pub const FORMAT_MARKER: &str = "FMT_";

/// A derived name plus whether it lost characters to truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DerivedName {
    pub name: String,
    pub truncated: bool,
}

/// Derive the symbolic name for a raw string-pool value.
///
/// Path-like values are named after their final segment.
///
/// # Examples
///
/// ```
/// use strpool_codegen::naming::derive_name;
///
/// assert_eq!(derive_name("hello"), "hello");
/// assert_eq!(derive_name("a/b/c"), "c");
/// assert_eq!(derive_name("   "), "empty");
/// ```
pub fn derive_name(raw: &str) -> String {
    derive(raw).name
}

pub(crate) fn derive(raw: &str) -> DerivedName {
    let trimmed = raw.trim();
    let segment = match trimmed.rsplit_once('/') {
        Some((_, last)) => last,
        None => trimmed,
    };

    normalize_tracked(segment)
}

/// Normalize text into an identifier-safe name of at most [`MAX_NAME_LEN`] chars.
///
/// # Examples
///
/// ```
/// use strpool_codegen::naming::normalize;
///
/// assert_eq!(normalize(""), "empty");
/// assert_eq!(normalize("50%"), "_50FMT_");
/// assert_eq!(normalize("foo!"), "foo_");
/// ```
pub fn normalize(text: &str) -> String {
    normalize_tracked(text).name
}

fn normalize_tracked(text: &str) -> DerivedName {
    if text.is_empty() {
        return DerivedName {
            name: EMPTY_NAME.to_string(),
            truncated: false,
        };
    }

    let mut full = String::with_capacity(text.len() + 1);
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        full.push('_');
    }

    let mut in_separator_run = false;
    for c in text.replace('%', FORMAT_MARKER).chars() {
        if is_word_char(c) {
            full.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            full.push('_');
            in_separator_run = true;
        }
    }

    let full = full.trim();
    let name: String = full.chars().take(MAX_NAME_LEN).collect();
    let truncated = name.len() < full.len();

    DerivedName { name, truncated }
}

/// Whether `c` may appear in a symbolic name.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check that `name` is a C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(is_word_char),
        _ => false,
    }
}

/// Check that `name` is a C identifier no longer than [`MAX_NAME_LEN`].
///
/// # Examples
///
/// ```
/// use strpool_codegen::naming::is_valid_name;
///
/// assert!(is_valid_name("_50FMT_"));
/// assert!(!is_valid_name("50FMT_"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name.len() <= MAX_NAME_LEN && is_identifier(name)
}
