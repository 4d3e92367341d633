//! Structural errors raised while assembling a tree.

/// Error assembling a document tree.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The root id has no record.
    #[error("Record not found: {id}")]
    MissingRecord { id: String },

    /// A declared child id has no record and missing children are fatal.
    #[error("Child {child} of {parent} not found")]
    UnresolvedChild { parent: String, child: String },

    /// A record lists one of its own ancestors as a child.
    #[error("Cyclic structure: {id} is its own ancestor")]
    CyclicStructure { id: String },
}
