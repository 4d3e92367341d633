//! Styled-string runs to inline HTML.

use nast_types::{Style, TextRun, Warning, Warnings, resolve};
use nast_url::to_local_anchor;

use crate::escape::{escape_attr, escape_html};
use crate::highlight::Highlighter;

/// Render one run: escape the text, then apply its markers.
#[must_use]
pub fn render_run(text: &str, styles: &[Style], warnings: &mut Warnings) -> String {
    apply_styles(escape_html(text), styles, warnings)
}

/// Wrap already rendered markup in the markers of a run.
///
/// Markers are applied last to first, so the first marker is the outermost
/// wrapper: `[Bold, Italic]` gives `<strong><em>x</em></strong>`. Mentions
/// replace the inner markup. Unknown markers push a warning and are skipped.
#[must_use]
pub fn apply_styles(inner: String, styles: &[Style], warnings: &mut Warnings) -> String {
    let mut html = inner;
    for style in styles.iter().rev() {
        html = match style {
            Style::Bold => format!("<strong>{html}</strong>"),
            Style::Italic => format!("<em>{html}</em>"),
            Style::Strike => format!("<del>{html}</del>"),
            Style::Underline => format!("<u>{html}</u>"),
            Style::Code => format!("<code>{html}</code>"),
            Style::Link(target) => format!(
                r#"<a href="{}">{html}</a>"#,
                escape_attr(&to_local_anchor(target))
            ),
            Style::Color(token) => format!(
                r#"<span class="{}">{html}</span>"#,
                escape_attr(resolve(Some(token.as_str()), ""))
            ),
            Style::UserMention(id) => {
                format!(r#"<span class="color-mention">@user_id:{}</span>"#, escape_html(id))
            }
            Style::PageMention(id) => {
                format!(r#"<span class="color-mention">@page_id:{}</span>"#, escape_html(id))
            }
            Style::Date(date) => format!(
                r#"<span class="color-mention">@{}</span>"#,
                escape_html(&date.start_date)
            ),
            Style::Comment(_) => format!(r#"<span class="color-comment">{html}</span>"#),
            Style::Unknown(code) => {
                warnings.push(Warning::UnsupportedStyle { code: code.clone() });
                html
            }
        };
    }
    html
}

/// Concatenated markup of a list of runs.
#[must_use]
pub fn render_runs(runs: &[TextRun], warnings: &mut Warnings) -> String {
    runs.iter()
        .map(|run| render_run(&run.text, &run.styles, warnings))
        .collect()
}

/// Runs wrapped in a `<span>`.
#[must_use]
pub fn render_title(runs: &[TextRun], warnings: &mut Warnings) -> String {
    format!("<span>{}</span>", render_runs(runs, warnings))
}

/// Runs of a code block wrapped in a `<span>`.
///
/// With a highlighter and a known language the highlighter owns escaping.
/// Otherwise the text is escaped as usual.
#[must_use]
pub fn render_code_title(
    runs: &[TextRun],
    language: Option<&str>,
    highlighter: Option<&dyn Highlighter>,
    warnings: &mut Warnings,
) -> String {
    let html: String = runs
        .iter()
        .map(|run| {
            let code = match (highlighter, language) {
                (Some(highlighter), Some(language)) => highlighter.highlight(&run.text, language),
                _ => escape_html(&run.text),
            };
            apply_styles(code, &run.styles, warnings)
        })
        .collect();
    format!("<span>{html}</span>")
}
