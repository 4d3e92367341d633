//! Data model for the Notion record → AST → HTML pipeline.
//!
//! - [`Block`] and [`RecordMap`]: raw records as delivered by the service
//! - [`TextRun`] and [`Style`]: styled-string runs used by every text property
//! - [`Node`] and [`NodeKind`]: the normalized tree produced by `nast-transform`
//! - [`ThemeColor`]: block and text colors mapped to output class names
//! - [`Warning`] and [`Warnings`]: the non-fatal reporting channel
//!
//! Raw records are loosely typed. `properties` and `format` are kept as JSON
//! maps and read through accessors that return `Option`, so an unexpected
//! shape degrades to "absent" instead of failing the whole page.

pub mod color;
mod node;
mod record;
mod text;
mod warning;

pub use color::{ThemeColor, resolve, resolve_class};
pub use node::{ListKind, Media, Node, NodeKind};
pub use record::{Block, ChildIndex, RecordMap, RecordMapError};
pub use text::{DateMention, Style, TextRun, plain_text};
pub use warning::{Warning, Warnings};
