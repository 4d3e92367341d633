//! Raw block records and the indexes built over them.

use std::collections::HashMap;

use nast_url::to_dash_id;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::text::TextRun;

/// Error decoding a record dump.
#[derive(Debug, thiserror::Error)]
pub enum RecordMapError {
    #[error("Invalid record map JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One block as stored by the document service.
///
/// Only `id` and `type` are common to all blocks. Which `properties` and
/// `format` keys are meaningful depends on the type, so both are kept as raw
/// JSON maps and read through the `Option`-returning accessors below.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub format: Option<Map<String, Value>>,
    /// Ordered child ids.
    #[serde(default)]
    pub content: Option<Vec<String>>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_table: Option<String>,
    #[serde(default)]
    pub alive: Option<bool>,
    #[serde(default)]
    pub created_time: Option<i64>,
    #[serde(default)]
    pub last_edited_time: Option<i64>,
    #[serde(default)]
    pub version: Option<u64>,
}

impl Block {
    /// Create an empty block of the given type.
    #[must_use]
    pub fn new(id: impl Into<String>, block_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            ..Self::default()
        }
    }

    /// Raw value of a property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(name)
    }

    /// A property decoded as styled-string runs.
    ///
    /// Returns `None` when the property is absent or not shaped like runs.
    #[must_use]
    pub fn property_runs(&self, name: &str) -> Option<Vec<TextRun>> {
        Vec::<TextRun>::deserialize(self.property(name)?).ok()
    }

    /// Text of the first run of a property (`properties[name][0][0]`).
    #[must_use]
    pub fn first_text(&self, name: &str) -> Option<&str> {
        self.property(name)?.get(0)?.get(0)?.as_str()
    }

    /// Display title. Absent or malformed titles yield no runs.
    #[must_use]
    pub fn title(&self) -> Vec<TextRun> {
        self.property_runs("title").unwrap_or_default()
    }

    /// Raw value of a format hint.
    #[must_use]
    pub fn format_value(&self, key: &str) -> Option<&Value> {
        self.format.as_ref()?.get(key)
    }

    #[must_use]
    pub fn format_str(&self, key: &str) -> Option<&str> {
        self.format_value(key)?.as_str()
    }

    #[must_use]
    pub fn format_f64(&self, key: &str) -> Option<f64> {
        self.format_value(key)?.as_f64()
    }

    #[must_use]
    pub fn format_bool(&self, key: &str) -> Option<bool> {
        self.format_value(key)?.as_bool()
    }

    /// Block color token. Aliases never carry a color.
    #[must_use]
    pub fn block_color(&self) -> Option<&str> {
        if self.is_alias() {
            return None;
        }
        self.format_str("block_color")
    }

    /// Page icon: an emoji or an image URL.
    #[must_use]
    pub fn page_icon(&self) -> Option<&str> {
        self.format_str("page_icon")
    }

    /// Width hint for media blocks, in pixels.
    #[must_use]
    pub fn block_width(&self) -> Option<f64> {
        self.format_f64("block_width")
    }

    #[must_use]
    pub fn is_alias(&self) -> bool {
        self.block_type == "alias"
    }

    /// False only for blocks explicitly marked as deleted.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive != Some(false)
    }
}

#[derive(Deserialize)]
struct RecordEntry {
    #[serde(default)]
    value: Option<Block>,
}

#[derive(Default, Deserialize)]
struct RawRecordMap {
    #[serde(default)]
    block: HashMap<String, RecordEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped {
        #[serde(rename = "recordMap")]
        record_map: RawRecordMap,
    },
    Bare(RawRecordMap),
}

/// Blocks keyed by their dashed id.
#[derive(Clone, Debug, Default)]
pub struct RecordMap {
    blocks: HashMap<String, Block>,
}

impl RecordMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record dump.
    ///
    /// Accepts `{"block": {...}}` as well as the same map wrapped in
    /// `{"recordMap": ...}`. Entries without a `value` are skipped. Blocks
    /// missing an `id` take the id of their key.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON of that shape.
    pub fn from_json(input: &str) -> Result<Self, RecordMapError> {
        let raw = match serde_json::from_str(input)? {
            Envelope::Wrapped { record_map } | Envelope::Bare(record_map) => record_map,
        };

        let mut map = Self::new();
        for (key, entry) in raw.block {
            let Some(mut block) = entry.value else {
                tracing::debug!(id = %key, "Skipping record without value");
                continue;
            };
            if block.id.is_empty() {
                block.id = key;
            }
            map.insert(block);
        }
        Ok(map)
    }

    /// Insert a block, replacing any block with the same id.
    pub fn insert(&mut self, mut block: Block) -> Option<Block> {
        block.id = to_dash_id(&block.id);
        self.blocks.insert(block.id.clone(), block)
    }

    /// Look up a block by id in either dash or no-dash form.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(&to_dash_id(id))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Pages whose parent is not part of this map, sorted by id.
    ///
    /// A dump of a single page has exactly one such page: the page itself.
    #[must_use]
    pub fn root_candidates(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self
            .iter()
            .filter(|block| block.block_type == "page")
            .filter(|block| block.parent_id.as_deref().is_none_or(|p| !self.contains(p)))
            .map(|block| block.id.as_str())
            .collect();
        roots.sort_unstable();
        roots
    }
}

impl FromIterator<Block> for RecordMap {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        let mut map = Self::new();
        for block in iter {
            map.insert(block);
        }
        map
    }
}

/// Parent id to ordered child ids.
#[derive(Clone, Debug, Default)]
pub struct ChildIndex {
    children: HashMap<String, Vec<String>>,
}

impl ChildIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from each block's `content` list.
    #[must_use]
    pub fn from_records(records: &RecordMap) -> Self {
        records
            .iter()
            .filter_map(|block| Some((block.id.clone(), block.content.clone()?)))
            .collect()
    }

    /// Set the children of a parent, replacing any previous list.
    pub fn insert(&mut self, parent: &str, children: Vec<String>) {
        let children = children.iter().map(|id| to_dash_id(id)).collect();
        self.children.insert(to_dash_id(parent), children);
    }

    /// Ordered child ids of a parent. Unknown parents have no children.
    #[must_use]
    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children
            .get(&to_dash_id(parent))
            .map_or(&[], Vec::as_slice)
    }
}

impl FromIterator<(String, Vec<String>)> for ChildIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (parent, children) in iter {
            index.insert(&parent, children);
        }
        index
    }
}
