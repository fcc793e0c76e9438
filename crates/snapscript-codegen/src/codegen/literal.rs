//! Python literal spelling

/// Token emitted wherever a value is missing
pub const NONE: &str = "None";

/// Single-quoted string literal
///
/// Backslashes, quotes and line breaks are escaped; everything else is
/// reproduced verbatim.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quoted literal, or `None` when absent
pub fn quote_opt(text: Option<&str>) -> String {
    text.map(quote).unwrap_or_else(|| NONE.to_string())
}

/// `True` / `False`
pub fn boolean(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Variable name, or `None` when the reference did not resolve
pub fn identifier(name: Option<&str>) -> &str {
    name.unwrap_or(NONE)
}

/// Replace line breaks with single spaces
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a.dat", "'a.dat'")]
    #[case("", "''")]
    #[case("it's", r"'it\'s'")]
    #[case(r"C:\data\a.dim", r"'C:\\data\\a.dim'")]
    #[case("line1\nline2", r"'line1\nline2'")]
    #[case("\"quoted\"", "'\"quoted\"'")]
    fn test_quote(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(quote(text), expected);
    }

    #[test]
    fn test_quote_opt() {
        assert_eq!(quote_opt(Some("x")), "'x'");
        assert_eq!(quote_opt(None), "None");
    }

    #[test]
    fn test_boolean() {
        assert_eq!(boolean(true), "True");
        assert_eq!(boolean(false), "False");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier(Some("artifact1")), "artifact1");
        assert_eq!(identifier(None), "None");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb\r\nc\rd"), "a b c d");
    }
}
