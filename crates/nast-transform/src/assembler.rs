//! Tree assembly from a flat record set.
//!
//! The assembler walks the parent to children index from a root id, builds
//! every child before its parent, and hands each record to the [`Registry`].
//!
//! # Policy
//!
//! - A missing root is a [`TransformError::MissingRecord`].
//! - A missing child is skipped with a warning ([`MissingChildPolicy::Skip`],
//!   the default) or fails the call ([`MissingChildPolicy::Fail`]).
//! - A record listing one of its ancestors as a child fails the call with
//!   [`TransformError::CyclicStructure`]. The same record appearing twice as
//!   siblings is not a cycle.
//! - Children marked as deleted (`alive: false`) are left out.
//! - Pages below the root and aliases are references. Their children are
//!   not descended into.

use std::collections::HashSet;

use nast_types::{Block, ChildIndex, Node, NodeKind, RecordMap, Warning, Warnings};
use nast_url::to_dash_id;

use crate::error::TransformError;
use crate::registry::Registry;

/// What to do when a declared child id has no record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingChildPolicy {
    /// Drop the child and record an [`Warning::UnresolvedChild`].
    #[default]
    Skip,
    /// Fail with [`TransformError::UnresolvedChild`].
    Fail,
}

/// A finished tree and the warnings raised while building it.
#[derive(Clone, Debug)]
pub struct Assembled {
    pub root: Node,
    pub warnings: Vec<Warning>,
}

/// Builds a document tree from records and a child index.
#[derive(Debug)]
pub struct Assembler<'a> {
    records: &'a RecordMap,
    children: &'a ChildIndex,
    registry: Registry,
    missing_children: MissingChildPolicy,
}

/// Mutable state of a single walk.
struct Walk {
    ancestors: HashSet<String>,
    warnings: Warnings,
}

impl<'a> Assembler<'a> {
    #[must_use]
    pub fn new(records: &'a RecordMap, children: &'a ChildIndex) -> Self {
        Self {
            records,
            children,
            registry: Registry::new(),
            missing_children: MissingChildPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_missing_child_policy(mut self, policy: MissingChildPolicy) -> Self {
        self.missing_children = policy;
        self
    }

    /// Build the tree rooted at `root_id`.
    pub fn assemble(&self, root_id: &str) -> Result<Assembled, TransformError> {
        let root = self
            .records
            .get(root_id)
            .ok_or_else(|| TransformError::MissingRecord {
                id: to_dash_id(root_id),
            })?;

        let mut walk = Walk {
            ancestors: HashSet::new(),
            warnings: Warnings::new(),
        };
        let node = self.build(root, true, &mut walk)?;

        tracing::debug!(
            root = %root.id,
            nodes = node.count(),
            warnings = walk.warnings.len(),
            "Assembled tree"
        );

        Ok(Assembled {
            root: node,
            warnings: walk.warnings.into_vec(),
        })
    }

    /// Ids reachable from `root_id` through the child index that have no record.
    ///
    /// Follows the same descent rules as [`assemble`](Self::assemble), so a
    /// fetch layer can load exactly these ids before assembling. A missing
    /// root is reported as the only id.
    #[must_use]
    pub fn unresolved_ids(&self, root_id: &str) -> Vec<String> {
        let mut missing = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![(to_dash_id(root_id), true)];

        while let Some((id, is_root)) = stack.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            let Some(block) = self.records.get(&id) else {
                missing.push(id);
                continue;
            };
            if !is_root && !block.is_alive() {
                continue;
            }
            if is_root || !is_reference(block) {
                // Reversed so that ids come out in document order
                for child in self.children.children_of(&block.id).iter().rev() {
                    stack.push((child.clone(), false));
                }
            }
        }

        missing
    }

    fn build(&self, block: &Block, is_root: bool, walk: &mut Walk) -> Result<Node, TransformError> {
        if !walk.ancestors.insert(block.id.clone()) {
            return Err(TransformError::CyclicStructure {
                id: block.id.clone(),
            });
        }

        let mut children = Vec::new();
        if is_root || !is_reference(block) {
            for child_id in self.children.children_of(&block.id) {
                if let Some(child) = self.records.get(child_id) {
                    if child.is_alive() {
                        children.push(self.build(child, false, walk)?);
                    } else {
                        tracing::debug!(id = %child.id, parent = %block.id, "Skipping deleted block");
                    }
                    continue;
                }
                match self.missing_children {
                    MissingChildPolicy::Skip => walk.warnings.push(Warning::UnresolvedChild {
                        parent: block.id.clone(),
                        child: child_id.clone(),
                    }),
                    MissingChildPolicy::Fail => {
                        return Err(TransformError::UnresolvedChild {
                            parent: block.id.clone(),
                            child: child_id.clone(),
                        });
                    }
                }
            }
        }

        let mut node = self.registry.transform(block, children, &mut walk.warnings);
        if let NodeKind::Alias { target, title } = &mut node.kind
            && title.is_empty()
            && let Some(target) = self.records.get(target)
        {
            *title = target.title();
        }

        walk.ancestors.remove(&block.id);
        Ok(node)
    }
}

/// Blocks that point at content owned elsewhere.
fn is_reference(block: &Block) -> bool {
    block.block_type == "page" || block.is_alias()
}

/// Assemble with the built-in registry and the default missing-child policy.
pub fn assemble(
    root_id: &str,
    records: &RecordMap,
    children: &ChildIndex,
) -> Result<Assembled, TransformError> {
    Assembler::new(records, children).assemble(root_id)
}
