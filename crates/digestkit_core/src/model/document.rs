//! Document root aggregate and frontmatter metadata.

use crate::model::entry::EntryId;
use crate::model::section::Section;
use serde::{Deserialize, Serialize};

/// Document metadata emitted as the YAML frontmatter header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: String,
    /// ISO date string; defaulted at render time, not here.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_draft")]
    pub draft: bool,
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            tags: Vec::new(),
            draft: default_draft(),
        }
    }
}

fn default_draft() -> bool {
    true
}

/// User-supplied replacement text for one derived location record.
///
/// Created lazily on first edit and removed only when the referenced entry
/// is deleted. A dangling `entry_id` is tolerated and filtered out at
/// collection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOverride {
    #[serde(rename = "entryId")]
    pub entry_id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocationOverride {
    pub fn new(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            title: None,
            description: None,
        }
    }
}

/// Root aggregate owned by the document store.
///
/// The serialized shape is the save/load and full-import/export contract:
/// `{frontmatter, sections, frontmatterLocations}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
    #[serde(default, rename = "frontmatterLocations")]
    pub frontmatter_locations: Vec<LocationOverride>,
}
