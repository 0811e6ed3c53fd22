//! Section model: a named, ordered bucket of entries.

use crate::model::entry::Entry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a section within one document.
pub type SectionId = Uuid;

/// Fixed catalogue of section kinds.
///
/// The kind only seeds the default display title; the title itself stays
/// user-editable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionType {
    Publications,
    JournalIssues,
    Conferences,
    CallForPapers,
    Festivals,
    Exhibitions,
    News,
    Media,
    QuickLinks,
    Custom,
}

impl SectionType {
    /// Default display title, emoji included.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Publications => "Publications 📚",
            Self::JournalIssues => "New Journal Issues 📖",
            Self::Conferences => "Conferences 📢",
            Self::CallForPapers => "Call for Papers 📝",
            Self::Festivals => "Festivals & Screenings 🎬",
            Self::Exhibitions => "Exhibitions 🖼️",
            Self::News => "News 📰",
            Self::Media => "Media & Podcasts 🎧",
            Self::QuickLinks => "Quick Links 🔗",
            Self::Custom => "Custom Section ✏️",
        }
    }
}

/// One ordered bucket of entries.
///
/// # Invariants
/// - `id` is immutable after creation.
/// - `entries` order is the unsorted fallback order and must survive
///   serialize/deserialize round-trips untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub title: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Section {
    /// Creates an empty section with a generated id.
    ///
    /// `custom_title` wins over the kind's default title when given.
    pub fn new(kind: SectionType, custom_title: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: custom_title
                .map(str::to_string)
                .unwrap_or_else(|| kind.default_title().to_string()),
            entries: Vec::new(),
        }
    }
}
