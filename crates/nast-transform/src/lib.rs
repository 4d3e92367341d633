//! Raw Notion records to document tree.
//!
//! Two layers:
//! - [`Registry`]: per-type dispatch from one record plus its built children
//!   to one [`Node`](nast_types::Node). Unknown types degrade to a passthrough
//!   node and a warning.
//! - [`Assembler`]: resolves the parent to children index from a root id,
//!   guards against cycles and applies the missing-child policy.
//!
//! # Example
//!
//! ```
//! use nast_transform::assemble;
//! use nast_types::{ChildIndex, NodeKind, RecordMap};
//!
//! let records = RecordMap::from_json(r#"{"block": {
//!     "0eeee000-cccc-bbbb-aaaa-123450000000": {"value": {
//!         "id": "0eeee000-cccc-bbbb-aaaa-123450000000", "type": "page",
//!         "properties": {"title": [["Home"]]}
//!     }}
//! }}"#).unwrap();
//! let children = ChildIndex::from_records(&records);
//!
//! let assembled = assemble("0eeee000ccccbbbbaaaa123450000000", &records, &children).unwrap();
//! assert!(matches!(assembled.root.kind, NodeKind::Page { .. }));
//! ```

mod assembler;
pub mod blocks;
mod error;
mod list;
mod registry;

pub use assembler::{Assembled, Assembler, MissingChildPolicy, assemble};
pub use error::TransformError;
pub use list::group_list_items;
pub use registry::{Registry, TransformFn};
