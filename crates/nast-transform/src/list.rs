//! Grouping of list items into list nodes.
//!
//! Records store each list item as a sibling block. There is no record for
//! the list itself, so consecutive items of the same kind are wrapped in a
//! synthetic [`NodeKind::List`] node.

use nast_types::{ListKind, Node, NodeKind};

/// Wrap each maximal run of same-kind list items in a synthetic list node.
///
/// Order is preserved and all other nodes are left where they are.
#[must_use]
pub fn group_list_items(nodes: Vec<Node>) -> Vec<Node> {
    let mut grouped = Vec::with_capacity(nodes.len());
    let mut open: Option<(ListKind, Vec<Node>)> = None;

    for node in nodes {
        let NodeKind::ListItem { list, .. } = node.kind else {
            close(&mut grouped, open.take());
            grouped.push(node);
            continue;
        };

        match &mut open {
            Some((kind, items)) if *kind == list => items.push(node),
            _ => {
                close(&mut grouped, open.take());
                open = Some((list, vec![node]));
            }
        }
    }
    close(&mut grouped, open);

    grouped
}

fn close(grouped: &mut Vec<Node>, open: Option<(ListKind, Vec<Node>)>) {
    if let Some((list, items)) = open {
        grouped.push(Node::synthetic(NodeKind::List { list }, items));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str, list: ListKind) -> Node {
        Node {
            id: Some(id.to_owned()),
            ..Node::synthetic(
                NodeKind::ListItem {
                    list,
                    text: Vec::new(),
                },
                Vec::new(),
            )
        }
    }

    fn divider(id: &str) -> Node {
        Node {
            id: Some(id.to_owned()),
            ..Node::synthetic(NodeKind::Divider, Vec::new())
        }
    }

    fn shape(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| match &n.id {
                Some(id) => id.clone(),
                None => format!(
                    "{}[{}]",
                    n.type_name(),
                    n.children
                        .iter()
                        .filter_map(|c| c.id.as_deref())
                        .collect::<Vec<_>>()
                        .join(",")
                ),
            })
            .collect()
    }

    #[test]
    fn test_groups_consecutive_items() {
        let nodes = vec![
            item("a", ListKind::Bulleted),
            item("b", ListKind::Bulleted),
            divider("d"),
            item("c", ListKind::Bulleted),
        ];
        assert_eq!(
            shape(&group_list_items(nodes)),
            vec!["bulleted_list[a,b]", "d", "bulleted_list[c]"]
        );
    }

    #[test]
    fn test_kind_change_starts_new_group() {
        let nodes = vec![
            item("a", ListKind::Bulleted),
            item("b", ListKind::Numbered),
            item("c", ListKind::Numbered),
        ];
        assert_eq!(
            shape(&group_list_items(nodes)),
            vec!["bulleted_list[a]", "numbered_list[b,c]"]
        );
    }

    #[test]
    fn test_no_items_unchanged() {
        let nodes = vec![divider("a"), divider("b")];
        assert_eq!(shape(&group_list_items(nodes)), vec!["a", "b"]);
    }

    #[test]
    fn test_empty() {
        assert!(group_list_items(Vec::new()).is_empty());
    }
}
