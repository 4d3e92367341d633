//! HTML rendering of Notion document trees.
//!
//! [`HtmlRenderer`] walks a [`Node`](nast_types::Node) tree built by
//! `nast-transform` and produces one HTML string. Inline text goes through the
//! style span renderer ([`render_run`]), code blocks through an optional
//! [`Highlighter`].
//!
//! # Example
//!
//! ```
//! use nast_renderer::HtmlRenderer;
//! use nast_types::{Node, NodeKind, Style, TextRun};
//!
//! let node = Node::synthetic(
//!     NodeKind::Text {
//!         text: vec![TextRun::styled("Hi", vec![Style::Bold, Style::Italic])],
//!     },
//!     Vec::new(),
//! );
//!
//! let result = HtmlRenderer::new().render(&node);
//! assert!(result.html.contains("<strong><em>Hi</em></strong>"));
//! ```

mod escape;
mod highlight;
mod html;
mod language;
mod style;

pub use escape::{escape_attr, escape_html};
pub use highlight::Highlighter;
pub use html::{HtmlRenderer, RenderResult};
pub use language::code_language;
pub use style::{apply_styles, render_code_title, render_run, render_runs, render_title};
