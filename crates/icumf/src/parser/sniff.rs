//! Cheap pre-checks that decide whether a string needs directive parsing.
//!
//! Most translation strings are plain text, so they never reach the parser.

use std::sync::LazyLock;

use regex::Regex;

/// Reserved prefix that forces parsing regardless of sniffing.
pub const FORCE_PREFIX: &str = "icu:";

static DIRECTIVE_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*\w+\s*,").expect("directive pattern is valid"));

static TAG_OPENING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z][\w:-]*(?:\s[^<>]*)?>").expect("tag pattern is valid")
});

/// Returns true if `pattern` contains a directive or inline tag opening.
///
/// # Examples
///
/// ```
/// use icumf::parser::needs_parsing;
///
/// assert!(needs_parsing("{count, plural, one {# item} other {# items}}"));
/// assert!(needs_parsing("Click <a href=\"/x\">here</a>"));
/// assert!(!needs_parsing("Hello, {name}!"));
/// assert!(!needs_parsing("1 < 2"));
/// ```
pub fn needs_parsing(pattern: &str) -> bool {
    DIRECTIVE_OPENING.is_match(pattern) || TAG_OPENING.is_match(pattern)
}

/// Strips the forcing prefix, returning the remainder if it was present.
pub fn strip_force_prefix(pattern: &str) -> Option<&str> {
    pattern.strip_prefix(FORCE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_opening_allows_whitespace() {
        assert!(needs_parsing("{ n , count}"));
        assert!(needs_parsing("You have {n,count} messages"));
        assert!(!needs_parsing("{ n }"));
        assert!(!needs_parsing("{,}"));
    }

    #[test]
    fn tag_opening_allows_attributes() {
        assert!(needs_parsing("<b>bold</b>"));
        assert!(needs_parsing("<span class=\"x\">y</span>"));
        assert!(!needs_parsing("a <> b"));
        assert!(!needs_parsing("x < y > z"));
    }

    #[test]
    fn force_prefix_is_stripped() {
        assert_eq!(strip_force_prefix("icu:{x}"), Some("{x}"));
        assert_eq!(strip_force_prefix("{x}"), None);
    }
}
