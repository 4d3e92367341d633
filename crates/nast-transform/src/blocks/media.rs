//! Images, embeds, files and bookmarks.

use nast_types::{Block, Media, Node, NodeKind};
use nast_url::{normalize_file_url, normalize_image_url};

use super::node;

/// Raw source: `format.display_source`, falling back to `properties.source`.
fn raw_source(block: &Block) -> Option<&str> {
    block
        .format_str("display_source")
        .or_else(|| block.first_text("source"))
        .filter(|source| !source.is_empty())
}

fn media(block: &Block, source: Option<String>) -> Media {
    Media {
        source,
        width: block.block_width(),
        full_width: block.format_bool("block_full_width").unwrap_or(false),
        caption: block.property_runs("caption").unwrap_or_default(),
    }
}

fn file_media(block: &Block) -> Media {
    let source = raw_source(block).map(|url| normalize_file_url(&block.id, url));
    media(block, source)
}

/// Source is resolved with the block width as a size hint.
pub fn image(block: &Block, children: Vec<Node>) -> Node {
    let source =
        raw_source(block).map(|url| normalize_image_url(&block.id, url, block.block_width()));
    node(block, NodeKind::Image(media(block, source)), children)
}

/// Video with the source resolved as a file URL.
pub fn video(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Video(file_media(block)), children)
}

/// Audio clip.
pub fn audio(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Audio(file_media(block)), children)
}

/// Generic embeds and the service-specific ones (tweet, gist, codepen, ...).
pub fn embed(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Embed(file_media(block)), children)
}

/// Attached file with its title and size.
pub fn file(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::File {
            title: block.title(),
            source: raw_source(block).map(|url| normalize_file_url(&block.id, url)),
            size: block.first_text("size").map(str::to_owned),
        },
        children,
    )
}

/// Link preview with title, description, icon and cover.
pub fn bookmark(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Bookmark {
            link: block.first_text("link").map(str::to_owned),
            title: block.title(),
            description: block.property_runs("description").unwrap_or_default(),
            icon: block.format_str("bookmark_icon").map(str::to_owned),
            cover: block.format_str("bookmark_cover").map(str::to_owned),
        },
        children,
    )
}
