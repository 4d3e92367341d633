//! Built-in transformers, one per raw block type.
//!
//! Every transformer has the [`TransformFn`](crate::TransformFn) shape: it
//! receives the record and its already transformed children and returns one
//! node. Transformers never fail. Missing or malformed fields become `None`,
//! `false` or an empty run list.

mod layout;
mod media;
mod page;
mod text;

pub use layout::{column, column_list, table, table_row};
pub use media::{audio, bookmark, embed, file, image, video};
pub use page::{alias, page, unsupported};
pub use text::{
    bulleted_list, callout, code, divider, equation, header, numbered_list, quote, sub_header,
    sub_sub_header, text, to_do, toggle,
};

use nast_types::{Block, Node, NodeKind, ThemeColor};
use nast_url::normalize_image_url;

/// Build a node carrying the record's id, color and timestamps.
#[must_use]
pub fn node(block: &Block, kind: NodeKind, children: Vec<Node>) -> Node {
    Node {
        id: Some(block.id.clone()),
        kind,
        color: block.block_color().and_then(ThemeColor::parse),
        created_time: block.created_time,
        last_edited_time: block.last_edited_time,
        children,
    }
}

/// Emoji or public URL of the record's icon. Aliases have none.
#[must_use]
pub fn icon(block: &Block) -> Option<String> {
    if block.is_alias() {
        return None;
    }
    block
        .page_icon()
        .filter(|icon| !icon.is_empty())
        .map(|icon| normalize_image_url(&block.id, icon, None))
}
