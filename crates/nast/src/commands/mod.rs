//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod tree;

pub(crate) use render::RenderArgs;
pub(crate) use tree::TreeArgs;

use std::path::Path;

use nast_config::MissingChildren;
use nast_transform::MissingChildPolicy;
use nast_types::{ChildIndex, RecordMap};

use crate::error::CliError;

/// Records of one dump file and the child index built from them.
pub(crate) struct Dump {
    pub(crate) records: RecordMap,
    pub(crate) children: ChildIndex,
}

impl Dump {
    /// Read and parse a record dump file.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }

    fn parse(input: &str) -> Result<Self, CliError> {
        let records = RecordMap::from_json(input)?;
        let children = ChildIndex::from_records(&records);
        tracing::debug!(records = records.len(), "Loaded record dump");
        Ok(Self { records, children })
    }

    /// The explicit root, or the single page whose parent is not in the dump.
    pub(crate) fn root_id(&self, explicit: Option<&str>) -> Result<String, CliError> {
        if let Some(id) = explicit {
            return Ok(id.to_owned());
        }
        match self.records.root_candidates().as_slice() {
            [root] => Ok((*root).to_owned()),
            [] => Err(CliError::Validation(
                "no root page found in dump, pass --root".to_owned(),
            )),
            roots => Err(CliError::Validation(format!(
                "dump has {} root pages ({}), pass --root",
                roots.len(),
                roots.join(", ")
            ))),
        }
    }
}

pub(crate) fn missing_child_policy(setting: MissingChildren) -> MissingChildPolicy {
    match setting {
        MissingChildren::Skip => MissingChildPolicy::Skip,
        MissingChildren::Fail => MissingChildPolicy::Fail,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) const ROOT: &str = "0eeee000-cccc-bbbb-aaaa-123450000000";

    /// A page with a paragraph, an unknown block and one missing child.
    pub(crate) const DUMP: &str = r#"{
        "block": {
            "0eeee000-cccc-bbbb-aaaa-123450000000": {"value": {
                "type": "page",
                "properties": {"title": [["Hello"]]},
                "content": [
                    "10000000-0000-0000-0000-000000000001",
                    "10000000-0000-0000-0000-000000000002",
                    "10000000-0000-0000-0000-000000000099"
                ],
                "parent_id": "ffffffff-0000-0000-0000-000000000000",
                "parent_table": "space"
            }},
            "10000000-0000-0000-0000-000000000001": {"value": {
                "type": "text",
                "properties": {"title": [["a & b"]]},
                "parent_id": "0eeee000-cccc-bbbb-aaaa-123450000000"
            }},
            "10000000-0000-0000-0000-000000000002": {"value": {
                "type": "widget",
                "parent_id": "0eeee000-cccc-bbbb-aaaa-123450000000"
            }}
        }
    }"#;

    #[test]
    fn test_root_inferred_from_dump() {
        let dump = Dump::parse(DUMP).unwrap();
        assert_eq!(dump.root_id(None).unwrap(), ROOT);
    }

    #[test]
    fn test_explicit_root_wins() {
        let dump = Dump::parse(DUMP).unwrap();
        assert_eq!(
            dump.root_id(Some("10000000-0000-0000-0000-000000000001"))
                .unwrap(),
            "10000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_no_root_page() {
        let dump = Dump::parse(r#"{"block": {}}"#).unwrap();
        let err = dump.root_id(None).unwrap_err();
        assert!(err.to_string().contains("--root"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Dump::parse("not json"),
            Err(CliError::Records(_))
        ));
    }

    #[test]
    fn test_missing_child_policy() {
        assert_eq!(
            missing_child_policy(MissingChildren::Fail),
            MissingChildPolicy::Fail
        );
        assert_eq!(
            missing_child_policy(MissingChildren::Skip),
            MissingChildPolicy::Skip
        );
    }
}
