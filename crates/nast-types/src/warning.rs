//! Non-fatal conditions reported while transforming or rendering.

use std::fmt;

use serde::Serialize;

/// Something was skipped or degraded but processing continued.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No transformer is registered for the record's type.
    UnsupportedBlockType { id: String, block_type: String },
    /// A style marker code the renderer does not know.
    UnsupportedStyle { code: String },
    /// A declared child id has no record.
    UnresolvedChild { parent: String, child: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBlockType { id, block_type } => {
                write!(f, "unsupported block type '{block_type}' ({id})")
            }
            Self::UnsupportedStyle { code } => write!(f, "unsupported style marker '{code}'"),
            Self::UnresolvedChild { parent, child } => {
                write!(f, "child {child} of {parent} not found")
            }
        }
    }
}

/// Collecting sink for [`Warning`]s. Every pushed warning is also logged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        match &warning {
            Warning::UnsupportedBlockType { id, block_type } => {
                tracing::warn!(id = %id, block_type = %block_type, "Unsupported block type");
            }
            Warning::UnsupportedStyle { code } => {
                tracing::warn!(code = %code, "Unsupported style marker");
            }
            Warning::UnresolvedChild { parent, child } => {
                tracing::warn!(parent = %parent, child = %child, "Child record not found, skipping");
            }
        }
        self.0.push(warning);
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Warning> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
