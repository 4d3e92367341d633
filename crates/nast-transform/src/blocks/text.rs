//! Text-bearing blocks.

use nast_types::{Block, ListKind, Node, NodeKind, plain_text};

use super::{icon, node};

/// Paragraph.
pub fn text(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Text { text: block.title() }, children)
}

fn heading(block: &Block, depth: u8, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Heading {
            depth,
            text: block.title(),
        },
        children,
    )
}

/// Level 1 heading.
pub fn header(block: &Block, children: Vec<Node>) -> Node {
    heading(block, 1, children)
}

/// Level 2 heading.
pub fn sub_header(block: &Block, children: Vec<Node>) -> Node {
    heading(block, 2, children)
}

/// Level 3 heading.
pub fn sub_sub_header(block: &Block, children: Vec<Node>) -> Node {
    heading(block, 3, children)
}

/// Checked only when the first run of `properties.checked` is exactly `Yes`.
pub fn to_do(block: &Block, children: Vec<Node>) -> Node {
    let checked = block.first_text("checked") == Some("Yes");
    node(
        block,
        NodeKind::ToDo {
            text: block.title(),
            checked,
        },
        children,
    )
}

/// Bulleted list item. Grouping into a list happens later.
pub fn bulleted_list(block: &Block, children: Vec<Node>) -> Node {
    list_item(block, ListKind::Bulleted, children)
}

/// Numbered list item.
pub fn numbered_list(block: &Block, children: Vec<Node>) -> Node {
    list_item(block, ListKind::Numbered, children)
}

fn list_item(block: &Block, list: ListKind, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::ListItem {
            list,
            text: block.title(),
        },
        children,
    )
}

/// Collapsible block; the title is the summary.
pub fn toggle(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Toggle { text: block.title() }, children)
}

/// Block quote.
pub fn quote(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Quote { text: block.title() }, children)
}

/// Callout with an optional icon.
pub fn callout(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Callout {
            text: block.title(),
            icon: icon(block),
        },
        children,
    )
}

/// Horizontal rule.
pub fn divider(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::Divider, children)
}

/// Language comes from `properties.language`, wrapping from `format.code_wrap`.
pub fn code(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Code {
            text: block.title(),
            language: block.first_text("language").map(str::to_owned),
            wrap: block.format_bool("code_wrap").unwrap_or(false),
        },
        children,
    )
}

/// Block equation; the title holds the expression.
pub fn equation(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Equation {
            expression: plain_text(&block.title()),
        },
        children,
    )
}
