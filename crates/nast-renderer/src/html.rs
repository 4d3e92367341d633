//! Document tree to HTML.
//!
//! Output layout:
//! - Every child is wrapped in `<div id="{no-dash id}">`. Synthetic nodes get
//!   an empty id.
//! - Every block is wrapped in `<{tag} class="block block--{type} {color}">`.
//! - Nested blocks of a text-like block follow its content inside
//!   `<div class="block__children">`.
//! - The root page renders its header and content. Pages below the root are
//!   links to their canonical URI.

use std::collections::BTreeMap;
use std::fmt::Write;

use nast_types::{ListKind, Media, Node, NodeKind, TextRun, Warning, Warnings, plain_text, resolve_class};
use nast_url::{block_uri, to_no_dash_id};

use crate::escape::{escape_attr, escape_html};
use crate::highlight::Highlighter;
use crate::language::code_language;
use crate::style::{render_code_title, render_runs, render_title};

/// Result of rendering a tree.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML fragment, or a full document in standalone mode.
    pub html: String,
    /// Plain-text title of the root page.
    pub title: Option<String>,
    /// Warnings raised while rendering (unsupported style markers).
    pub warnings: Vec<Warning>,
}

/// Renders document trees to HTML.
///
/// Holds configuration only. One renderer can be shared across threads and
/// used for any number of trees.
pub struct HtmlRenderer {
    highlighter: Option<Box<dyn Highlighter>>,
    default_color: String,
    standalone: bool,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: None,
            default_color: String::new(),
            standalone: false,
        }
    }

    /// Highlight code blocks whose language has a mapping.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }

    /// Class used for blocks without a color.
    #[must_use]
    pub fn with_default_color(mut self, class: impl Into<String>) -> Self {
        self.default_color = class.into();
        self
    }

    /// Wrap the fragment in a minimal HTML document.
    #[must_use]
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Render a tree.
    ///
    /// Never fails. Malformed style data is under-styled and reported in
    /// [`RenderResult::warnings`].
    pub fn render(&self, root: &Node) -> RenderResult {
        tracing::debug!(nodes = root.count(), standalone = self.standalone, "Rendering tree");
        let mut render = Render {
            renderer: self,
            warnings: Warnings::new(),
        };

        let body = match &root.kind {
            NodeKind::Page { .. } => render.root_page(root),
            _ => render.children(std::slice::from_ref(root)),
        };

        let title = match &root.kind {
            NodeKind::Page { title, .. } => Some(plain_text(title)),
            _ => None,
        };

        let html = if self.standalone {
            document(title.as_deref().unwrap_or_default(), &body)
        } else {
            body
        };

        RenderResult {
            html,
            title,
            warnings: render.warnings.into_vec(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// State of one render call.
struct Render<'a> {
    renderer: &'a HtmlRenderer,
    warnings: Warnings,
}

impl Render<'_> {
    fn root_page(&mut self, page: &Node) -> String {
        let NodeKind::Page {
            title,
            icon,
            cover,
            full_width,
        } = &page.kind
        else {
            return String::new();
        };

        let mut out = String::new();
        let class = if *full_width { "page page--full-width" } else { "page" };
        write!(out, r#"<article id="{}" class="{class}">"#, anchor_id(page)).unwrap();
        if let Some(cover) = cover {
            write!(out, r#"<img class="page__cover" src="{}" alt="">"#, escape_attr(cover)).unwrap();
        }
        out.push_str(r#"<header class="page__header">"#);
        if let Some(icon) = icon {
            out.push_str(&render_icon(icon, "page__icon"));
        }
        write!(
            out,
            r#"<h1 class="page__title">{}</h1></header>"#,
            render_title(title, &mut self.warnings)
        )
        .unwrap();
        out.push_str(&self.children(&page.children));
        out.push_str("</article>");
        out
    }

    /// Each child wrapped in `<div id>`.
    fn children(&mut self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            let html = self.node(node);
            write!(out, r#"<div id="{}">{html}</div>"#, anchor_id(node)).unwrap();
        }
        out
    }

    /// Children of a text-like block, if any.
    fn nested(&mut self, node: &Node) -> String {
        if node.children.is_empty() {
            return String::new();
        }
        format!(
            r#"<div class="block__children">{}</div>"#,
            self.children(&node.children)
        )
    }

    fn title(&mut self, runs: &[TextRun]) -> String {
        render_title(runs, &mut self.warnings)
    }

    fn block(&self, node: &Node, tag: &str, content: &str) -> String {
        self.block_with(node, tag, "", content)
    }

    fn block_with(&self, node: &Node, tag: &str, attrs: &str, content: &str) -> String {
        let color = resolve_class(node.color.as_ref(), &self.renderer.default_color);
        let mut class = format!("block block--{}", node.type_name());
        if !color.is_empty() {
            class.push(' ');
            class.push_str(&escape_attr(color));
        }
        format!(r#"<{tag} class="{class}"{attrs}>{content}</{tag}>"#)
    }

    #[allow(clippy::too_many_lines)]
    fn node(&mut self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Page { title, icon, .. } => {
                let href = node.id.as_deref().map(block_uri).unwrap_or_default();
                let icon = icon
                    .as_deref()
                    .map(|icon| render_icon(icon, "page__icon"))
                    .unwrap_or_default();
                let content = format!(
                    r#"<a class="page__link" href="{}">{icon}{}</a>"#,
                    escape_attr(&href),
                    self.title(title)
                );
                self.block(node, "div", &content)
            }
            NodeKind::Text { text } => {
                let content = self.title(text) + &self.nested(node);
                self.block(node, "div", &content)
            }
            NodeKind::Heading { depth, text } => {
                let tag = format!("h{}", (*depth).clamp(1, 3));
                let content = self.title(text);
                self.block(node, &tag, &content) + &self.nested(node)
            }
            NodeKind::ToDo { text, checked } => {
                let checkbox = if *checked {
                    r#"<input type="checkbox" disabled checked>"#
                } else {
                    r#"<input type="checkbox" disabled>"#
                };
                let content = format!("{checkbox}{}{}", self.title(text), self.nested(node));
                self.block(node, "div", &content)
            }
            NodeKind::ListItem { text, .. } => {
                let content = self.title(text) + &self.nested(node);
                self.block(node, "div", &content)
            }
            NodeKind::List { list } => {
                let tag = match list {
                    ListKind::Bulleted => "ul",
                    ListKind::Numbered => "ol",
                };
                let mut items = String::new();
                for item in &node.children {
                    let html = self.node(item);
                    write!(items, r#"<li id="{}">{html}</li>"#, anchor_id(item)).unwrap();
                }
                self.block(node, tag, &items)
            }
            NodeKind::Toggle { text } => {
                let content = format!(
                    "<summary>{}</summary>{}",
                    self.title(text),
                    self.children(&node.children)
                );
                self.block(node, "details", &content)
            }
            NodeKind::Quote { text } => {
                let content = self.title(text) + &self.nested(node);
                self.block(node, "blockquote", &content)
            }
            NodeKind::Callout { text, icon } => {
                let icon = icon
                    .as_deref()
                    .map(|icon| render_icon(icon, "callout__icon"))
                    .unwrap_or_default();
                let content = format!(
                    r#"{icon}<div class="callout__content">{}{}</div>"#,
                    self.title(text),
                    self.nested(node)
                );
                self.block(node, "div", &content)
            }
            NodeKind::Divider => self.block(node, "div", "<hr>"),
            NodeKind::Code {
                text,
                language,
                wrap,
            } => {
                let language = language.as_deref().and_then(code_language);
                let code = render_code_title(
                    text,
                    language,
                    self.renderer.highlighter.as_deref(),
                    &mut self.warnings,
                );
                let mut class = language.map(|l| format!("language-{l}")).unwrap_or_default();
                if *wrap {
                    if !class.is_empty() {
                        class.push(' ');
                    }
                    class.push_str("code--wrap");
                }
                let content = if class.is_empty() {
                    format!("<pre><code>{code}</code></pre>")
                } else {
                    format!(r#"<pre class="{class}"><code>{code}</code></pre>"#)
                };
                self.block(node, "div", &content)
            }
            NodeKind::Equation { expression } => {
                let content = format!(r#"<span class="equation">{}</span>"#, escape_html(expression));
                self.block(node, "div", &content)
            }
            NodeKind::Image(media) => {
                let img = media.source.as_deref().map_or_else(String::new, |src| {
                    let width = media
                        .width
                        .map(|w| format!(r#" width="{w}""#))
                        .unwrap_or_default();
                    format!(r#"<img src="{}" alt=""{width}>"#, escape_attr(src))
                });
                let content = img + &self.caption(media);
                self.block(node, "figure", &content)
            }
            NodeKind::Video(media) => {
                let player = media.source.as_deref().map_or_else(String::new, |src| {
                    if is_video_file(src) {
                        format!(r#"<video src="{}" controls></video>"#, escape_attr(src))
                    } else {
                        iframe(src)
                    }
                });
                let content = player + &self.caption(media);
                self.block(node, "figure", &content)
            }
            NodeKind::Audio(media) => {
                let player = media.source.as_deref().map_or_else(String::new, |src| {
                    format!(r#"<audio src="{}" controls></audio>"#, escape_attr(src))
                });
                let content = player + &self.caption(media);
                self.block(node, "figure", &content)
            }
            NodeKind::Embed(media) => {
                let frame = media.source.as_deref().map_or_else(String::new, iframe);
                let content = frame + &self.caption(media);
                self.block(node, "figure", &content)
            }
            NodeKind::File {
                title,
                source,
                size,
            } => {
                let href = source.as_deref().unwrap_or_default();
                let mut content = format!(
                    r#"<a class="file__link" href="{}">{}</a>"#,
                    escape_attr(href),
                    self.title(title)
                );
                if let Some(size) = size {
                    write!(content, r#"<span class="file__size">{}</span>"#, escape_html(size)).unwrap();
                }
                self.block(node, "div", &content)
            }
            NodeKind::Bookmark {
                link,
                title,
                description,
                icon,
                cover,
            } => {
                let link = link.as_deref().unwrap_or_default();
                let title = if title.is_empty() {
                    escape_html(link)
                } else {
                    render_runs(title, &mut self.warnings)
                };
                let mut content = format!(
                    r#"<a class="bookmark__link" href="{}"><div class="bookmark__text"><div class="bookmark__title">{title}</div>"#,
                    escape_attr(link)
                );
                if !description.is_empty() {
                    write!(
                        content,
                        r#"<div class="bookmark__description">{}</div>"#,
                        render_runs(description, &mut self.warnings)
                    )
                    .unwrap();
                }
                write!(content, r#"<div class="bookmark__url">{}</div></div>"#, escape_html(link)).unwrap();
                if let Some(icon) = icon {
                    write!(content, r#"<img class="bookmark__icon" src="{}" alt="">"#, escape_attr(icon)).unwrap();
                }
                if let Some(cover) = cover {
                    write!(content, r#"<img class="bookmark__cover" src="{}" alt="">"#, escape_attr(cover)).unwrap();
                }
                content.push_str("</a>");
                self.block(node, "div", &content)
            }
            NodeKind::ColumnList => {
                let content = self.children(&node.children);
                self.block(node, "div", &content)
            }
            NodeKind::Column { ratio } => {
                let style = ratio
                    .filter(|r| r.is_finite() && *r > 0.0)
                    .map(|r| format!(r#" style="width: {}%""#, r * 100.0))
                    .unwrap_or_default();
                let content = self.children(&node.children);
                self.block_with(node, "div", &style, &content)
            }
            NodeKind::Table {
                column_order,
                column_header,
                row_header,
            } => {
                let mut rows = String::new();
                for (i, row) in node.children.iter().enumerate() {
                    let NodeKind::TableRow { cells } = &row.kind else {
                        continue;
                    };
                    write!(rows, r#"<tr id="{}">"#, anchor_id(row)).unwrap();
                    for (j, column) in column_order.iter().enumerate() {
                        let tag = if (*column_header && i == 0) || (*row_header && j == 0) {
                            "th"
                        } else {
                            "td"
                        };
                        let cell = cells
                            .get(column)
                            .map(|runs| render_runs(runs, &mut self.warnings))
                            .unwrap_or_default();
                        write!(rows, "<{tag}>{cell}</{tag}>").unwrap();
                    }
                    rows.push_str("</tr>");
                }
                self.block(node, "table", &format!("<tbody>{rows}</tbody>"))
            }
            NodeKind::TableRow { cells } => {
                let content = self.loose_cells(cells);
                self.block(node, "div", &content)
            }
            NodeKind::Alias { target, title } => {
                let label = if title.is_empty() {
                    escape_html(&to_no_dash_id(target))
                } else {
                    render_runs(title, &mut self.warnings)
                };
                let content = format!(
                    r##"<a class="alias" href="#{}">{label}</a>"##,
                    escape_attr(&to_no_dash_id(target))
                );
                self.block(node, "div", &content)
            }
            NodeKind::Unsupported { .. } => {
                let content = self.nested(node);
                self.block(node, "div", &content)
            }
        }
    }

    fn caption(&mut self, media: &Media) -> String {
        if media.caption.is_empty() {
            return String::new();
        }
        format!("<figcaption>{}</figcaption>", self.title(&media.caption))
    }

    /// Cells of a row rendered outside a table, in column id order.
    fn loose_cells(&mut self, cells: &BTreeMap<String, Vec<TextRun>>) -> String {
        cells
            .values()
            .map(|runs| format!("<span>{}</span>", render_runs(runs, &mut self.warnings)))
            .collect()
    }
}

/// Element id of a node: the no-dash block id, or empty for synthetic nodes.
fn anchor_id(node: &Node) -> String {
    node.id.as_deref().map(to_no_dash_id).unwrap_or_default()
}

/// An emoji as text, anything URL-like as an image.
fn render_icon(icon: &str, class: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") {
        format!(r#"<img class="{class}" src="{}" alt="">"#, escape_attr(icon))
    } else {
        format!(r#"<span class="{class}">{}</span>"#, escape_html(icon))
    }
}

fn iframe(src: &str) -> String {
    format!(
        r#"<iframe src="{}" loading="lazy" allowfullscreen></iframe>"#,
        escape_attr(src)
    )
}

fn is_video_file(src: &str) -> bool {
    let path = src.split_once('?').map_or(src, |(path, _)| path);
    let path = path.to_ascii_lowercase();
    [".mp4", ".webm", ".ogg", ".mov"]
        .iter()
        .any(|ext| path.ends_with(ext))
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}
