//! Dispatch from raw block type to transformer.

use std::collections::HashMap;
use std::fmt;

use nast_types::{Block, Node, Warning, Warnings};

use crate::blocks;
use crate::list::group_list_items;

/// Transform one record and its already built children into a node.
pub type TransformFn = fn(&Block, Vec<Node>) -> Node;

/// Built-in registrations.
const BUILTINS: &[(&str, TransformFn)] = &[
    ("page", blocks::page),
    ("text", blocks::text),
    ("header", blocks::header),
    ("sub_header", blocks::sub_header),
    ("sub_sub_header", blocks::sub_sub_header),
    ("to_do", blocks::to_do),
    ("bulleted_list", blocks::bulleted_list),
    ("numbered_list", blocks::numbered_list),
    ("toggle", blocks::toggle),
    ("quote", blocks::quote),
    ("callout", blocks::callout),
    ("divider", blocks::divider),
    ("code", blocks::code),
    ("equation", blocks::equation),
    ("image", blocks::image),
    ("video", blocks::video),
    ("audio", blocks::audio),
    ("embed", blocks::embed),
    ("tweet", blocks::embed),
    ("gist", blocks::embed),
    ("codepen", blocks::embed),
    ("figma", blocks::embed),
    ("maps", blocks::embed),
    ("pdf", blocks::embed),
    ("file", blocks::file),
    ("bookmark", blocks::bookmark),
    ("column_list", blocks::column_list),
    ("column", blocks::column),
    ("table", blocks::table),
    ("table_row", blocks::table_row),
    ("alias", blocks::alias),
];

/// Table mapping raw `type` tags to transformers.
///
/// Tags without a registration produce an
/// [`Unsupported`](nast_types::NodeKind::Unsupported) node and a warning.
#[derive(Clone)]
pub struct Registry {
    transformers: HashMap<String, TransformFn>,
}

impl Registry {
    /// Registry with every built-in transformer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transformers: BUILTINS
                .iter()
                .map(|&(tag, transform)| (tag.to_owned(), transform))
                .collect(),
        }
    }

    /// Registry with no transformers at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transformers: HashMap::new(),
        }
    }

    /// Register a transformer, replacing any existing one for `tag`.
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, transform: TransformFn) -> Self {
        self.transformers.insert(tag.into(), transform);
        self
    }

    #[must_use]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.transformers.contains_key(tag)
    }

    /// Transform a record whose children are already built.
    ///
    /// Consecutive list items among `children` are grouped first. Never fails:
    /// unknown types fall back to a passthrough node and push one warning.
    pub fn transform(&self, block: &Block, children: Vec<Node>, warnings: &mut Warnings) -> Node {
        let children = group_list_items(children);
        match self.transformers.get(block.block_type.as_str()) {
            Some(transform) => transform(block, children),
            None => {
                warnings.push(Warning::UnsupportedBlockType {
                    id: block.id.clone(),
                    block_type: block.block_type.clone(),
                });
                blocks::unsupported(block, children)
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.transformers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("Registry").field("tags", &tags).finish()
    }
}
