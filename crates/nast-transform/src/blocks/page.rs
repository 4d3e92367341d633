//! Pages, aliases and the fallback for unknown types.

use nast_types::{Block, Node, NodeKind};
use nast_url::{normalize_image_url, to_dash_id};

use super::{icon, node};

/// Page with its title, icon, cover and full-width flag.
pub fn page(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Page {
            title: block.title(),
            icon: icon(block),
            cover: block
                .format_str("page_cover")
                .map(|cover| normalize_image_url(&block.id, cover, None)),
            full_width: block.format_bool("page_full_width").unwrap_or(false),
        },
        children,
    )
}

/// Reference to the block named by `format.alias_pointer.id`.
///
/// The title stays empty here; the assembler fills it from the target record.
pub fn alias(block: &Block, children: Vec<Node>) -> Node {
    let target = block
        .format_value("alias_pointer")
        .and_then(|pointer| pointer.get("id"))
        .and_then(|id| id.as_str())
        .map(to_dash_id)
        .unwrap_or_default();

    node(
        block,
        NodeKind::Alias {
            target,
            title: Vec::new(),
        },
        children,
    )
}

/// Passthrough node for types without a registered transformer.
pub fn unsupported(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Unsupported {
            block_type: block.block_type.clone(),
        },
        children,
    )
}
