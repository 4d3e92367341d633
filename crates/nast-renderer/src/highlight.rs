//! Pluggable syntax highlighting for code blocks.

/// Turns source code into highlighted markup.
///
/// Implementations receive raw text and are responsible for escaping it.
/// `language` is a highlighter identifier from
/// [`code_language`](crate::code_language), never a display name.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, code: &str, language: &str) -> String;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn highlight(&self, code: &str, language: &str) -> String {
        self(code, language)
    }
}
