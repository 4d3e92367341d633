//! Normalized document tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::ThemeColor;
use crate::text::TextRun;

/// One node of the document tree.
///
/// Nodes are built once by the transformer with their children already in
/// place, and are not mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    /// Dashed block id. Synthetic nodes such as list groups have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node that does not correspond to any record.
    #[must_use]
    pub fn synthetic(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            id: None,
            kind,
            color: None,
            created_time: None,
            last_edited_time: None,
            children,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Count this node and all of its descendants.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// Bullet style of a list item or list group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// Fields shared by image, video, audio and embed nodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Media {
    /// Normalized source URL.
    pub source: Option<String>,
    /// Display width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub full_width: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caption: Vec<TextRun>,
}

/// Type-specific part of a [`Node`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Page {
        title: Vec<TextRun>,
        icon: Option<String>,
        cover: Option<String>,
        full_width: bool,
    },
    Text {
        text: Vec<TextRun>,
    },
    Heading {
        /// 1 to 3.
        depth: u8,
        text: Vec<TextRun>,
    },
    ToDo {
        text: Vec<TextRun>,
        checked: bool,
    },
    ListItem {
        list: ListKind,
        text: Vec<TextRun>,
    },
    /// Group of consecutive list items of the same kind.
    List {
        list: ListKind,
    },
    Toggle {
        text: Vec<TextRun>,
    },
    Quote {
        text: Vec<TextRun>,
    },
    Callout {
        text: Vec<TextRun>,
        icon: Option<String>,
    },
    Divider,
    Code {
        text: Vec<TextRun>,
        language: Option<String>,
        wrap: bool,
    },
    Equation {
        expression: String,
    },
    Image(Media),
    Video(Media),
    Audio(Media),
    Embed(Media),
    File {
        title: Vec<TextRun>,
        source: Option<String>,
        size: Option<String>,
    },
    Bookmark {
        link: Option<String>,
        title: Vec<TextRun>,
        description: Vec<TextRun>,
        icon: Option<String>,
        cover: Option<String>,
    },
    ColumnList,
    Column {
        /// Fraction of the row width.
        ratio: Option<f64>,
    },
    Table {
        column_order: Vec<String>,
        column_header: bool,
        row_header: bool,
    },
    TableRow {
        /// Cell runs keyed by column id.
        cells: BTreeMap<String, Vec<TextRun>>,
    },
    /// Reference to another block.
    Alias {
        target: String,
        title: Vec<TextRun>,
    },
    /// Record whose type has no registered transformer.
    Unsupported {
        block_type: String,
    },
}

impl NodeKind {
    /// Snake-case name used in output class names.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Page { .. } => "page",
            Self::Text { .. } => "text",
            Self::Heading { .. } => "heading",
            Self::ToDo { .. } => "to_do",
            Self::ListItem {
                list: ListKind::Bulleted,
                ..
            } => "bulleted_list_item",
            Self::ListItem {
                list: ListKind::Numbered,
                ..
            } => "numbered_list_item",
            Self::List {
                list: ListKind::Bulleted,
            } => "bulleted_list",
            Self::List {
                list: ListKind::Numbered,
            } => "numbered_list",
            Self::Toggle { .. } => "toggle",
            Self::Quote { .. } => "quote",
            Self::Callout { .. } => "callout",
            Self::Divider => "divider",
            Self::Code { .. } => "code",
            Self::Equation { .. } => "equation",
            Self::Image(_) => "image",
            Self::Video(_) => "video",
            Self::Audio(_) => "audio",
            Self::Embed(_) => "embed",
            Self::File { .. } => "file",
            Self::Bookmark { .. } => "bookmark",
            Self::ColumnList => "column_list",
            Self::Column { .. } => "column",
            Self::Table { .. } => "table",
            Self::TableRow { .. } => "table_row",
            Self::Alias { .. } => "alias",
            Self::Unsupported { .. } => "unsupported",
        }
    }

    /// Primary text of the node, if its kind has one.
    #[must_use]
    pub fn text(&self) -> Option<&[TextRun]> {
        match self {
            Self::Page { title, .. } | Self::File { title, .. } | Self::Alias { title, .. } => {
                Some(title)
            }
            Self::Text { text }
            | Self::Heading { text, .. }
            | Self::ToDo { text, .. }
            | Self::ListItem { text, .. }
            | Self::Toggle { text }
            | Self::Quote { text }
            | Self::Callout { text, .. }
            | Self::Code { text, .. } => Some(text),
            _ => None,
        }
    }
}
