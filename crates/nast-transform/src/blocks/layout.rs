//! Column layouts and tables.

use std::collections::BTreeMap;

use nast_types::{Block, Node, NodeKind, TextRun};
use serde_json::Value;

use super::node;

/// Row of columns.
pub fn column_list(block: &Block, children: Vec<Node>) -> Node {
    node(block, NodeKind::ColumnList, children)
}

/// One column; `format.column_ratio` is its share of the row width.
pub fn column(block: &Block, children: Vec<Node>) -> Node {
    node(
        block,
        NodeKind::Column {
            ratio: block.format_f64("column_ratio"),
        },
        children,
    )
}

/// Table with column order and header flags from `format`.
pub fn table(block: &Block, children: Vec<Node>) -> Node {
    let column_order = block
        .format_value("table_block_column_order")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    node(
        block,
        NodeKind::Table {
            column_order,
            column_header: block
                .format_bool("table_block_column_header")
                .unwrap_or(false),
            row_header: block.format_bool("table_block_row_header").unwrap_or(false),
        },
        children,
    )
}

/// Cells are the row's properties keyed by column id.
pub fn table_row(block: &Block, children: Vec<Node>) -> Node {
    let cells: BTreeMap<String, Vec<TextRun>> = block
        .properties
        .iter()
        .flatten()
        .filter_map(|(column, _)| Some((column.clone(), block.property_runs(column)?)))
        .collect();

    node(block, NodeKind::TableRow { cells }, children)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_column_ratio() {
        let b = block(json!({"id": "c1", "type": "column", "format": {"column_ratio": 0.25}}));
        assert_eq!(column(&b, Vec::new()).kind, NodeKind::Column { ratio: Some(0.25) });
        assert_eq!(
            column(&Block::new("c2", "column"), Vec::new()).kind,
            NodeKind::Column { ratio: None }
        );
    }

    #[test]
    fn test_table_format() {
        let b = block(json!({
            "id": "t1", "type": "table",
            "format": {
                "table_block_column_order": ["a", "b", 3],
                "table_block_column_header": true
            }
        }));
        assert_eq!(
            table(&b, Vec::new()).kind,
            NodeKind::Table {
                column_order: vec!["a".to_owned(), "b".to_owned()],
                column_header: true,
                row_header: false,
            }
        );
    }

    #[test]
    fn test_table_row_cells() {
        let b = block(json!({
            "id": "r1", "type": "table_row",
            "properties": {"a": [["1"]], "b": [["2", [["b"]]]], "bad": 7}
        }));
        let NodeKind::TableRow { cells } = table_row(&b, Vec::new()).kind else {
            panic!("expected table row");
        };
        assert_eq!(cells.len(), 2);
        assert_eq!(cells["a"], vec![TextRun::plain("1")]);
    }
}
