//! HTML escaping.

/// Escape text content.
///
/// Each of `< > & / " '` becomes a single entity. Nothing else is touched.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '/' => result.push_str("&#x2F;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted attribute value. Slashes are kept so URLs stay readable.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_each_special_character() {
        for (input, expected) in [
            ("<", "&lt;"),
            (">", "&gt;"),
            ("&", "&amp;"),
            ("/", "&#x2F;"),
            ("\"", "&quot;"),
            ("'", "&#x27;"),
        ] {
            assert_eq!(escape_html(input), expected);
        }
    }

    #[test]
    fn test_escape_html_leaves_other_text() {
        assert_eq!(escape_html("plain text, ünïcode 🚀 = ok"), "plain text, ünïcode 🚀 = ok");
        assert_eq!(escape_html("</script>"), "&lt;&#x2F;script&gt;");
    }

    #[test]
    fn test_escape_attr_keeps_slashes() {
        assert_eq!(
            escape_attr(r#"https://example.com/a?b=1&c="2""#),
            "https://example.com/a?b=1&amp;c=&quot;2&quot;"
        );
    }
}
