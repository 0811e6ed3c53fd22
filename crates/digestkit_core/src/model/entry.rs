//! Entry model: the discriminated record kinds inside a section.
//!
//! # Responsibility
//! - Define one tagged variant per entry kind so renderers can dispatch
//!   exhaustively instead of probing for field presence.
//! - Keep the wire shape identical to the editor interchange format:
//!   camelCase keys, a `type` discriminator, common fields flattened next
//!   to variant fields.
//!
//! # Invariants
//! - `id` is globally unique; location overrides cross-reference it.
//! - An absent editorial `signal` round-trips as the empty string.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Stable identifier for an entry.
pub type EntryId = Uuid;

/// Discriminant used when creating a fresh entry with type defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Publication,
    JournalIssue,
    Conference,
    Festival,
    Exhibition,
    CallForPapers,
    Media,
    Text,
}

/// Editorial classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Institutional,
    Methodological,
    Funding,
    Event,
    Debate,
    Resource,
}

impl Signal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Institutional => "institutional",
            Self::Methodological => "methodological",
            Self::Funding => "funding",
            Self::Event => "event",
            Self::Debate => "debate",
            Self::Resource => "resource",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "institutional" => Some(Self::Institutional),
            "methodological" => Some(Self::Methodological),
            "funding" => Some(Self::Funding),
            "event" => Some(Self::Event),
            "debate" => Some(Self::Debate),
            "resource" => Some(Self::Resource),
            _ => None,
        }
    }
}

/// Bibliographic style selector for publication entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PubType {
    Book,
    Article,
    Chapter,
    Thesis,
    #[serde(rename = "Online Article")]
    OnlineArticle,
    #[serde(rename = "Blog Post")]
    BlogPost,
}

impl Default for PubType {
    fn default() -> Self {
        Self::Article
    }
}

/// Media entry format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Video,
    Podcast,
    Audio,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Podcast => "Podcast",
            Self::Audio => "Audio",
        }
    }
}

/// One publication author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationFields {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "pubType")]
    pub pub_type: PubType,
    #[serde(default, rename = "containerTitle")]
    pub container_title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "urlText")]
    pub url_text: String,
    #[serde(default, rename = "openAccess")]
    pub open_access: bool,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub issue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalIssueFields {
    #[serde(default, rename = "journalName")]
    pub journal_name: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default, rename = "guestEditor")]
    pub guest_editor: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "urlText")]
    pub url_text: String,
    #[serde(default, rename = "openAccess")]
    pub open_access: bool,
    #[serde(default)]
    pub description: String,
}

/// Shared payload for the three event-shaped kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default, rename = "dateStart")]
    pub date_start: String,
    #[serde(default, rename = "dateEnd")]
    pub date_end: String,
    #[serde(default, rename = "cfpDeadline")]
    pub cfp_deadline: String,
    /// Free text, conventionally "City, Country".
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub venue: String,
    /// Free text, conventionally "lat, lng".
    #[serde(default)]
    pub coords: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Overrides the derived type label in location records when set.
    #[serde(default, rename = "customEventType")]
    pub custom_event_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallForPapersFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFields {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "mediaType", with = "media_type_wire")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFields {
    #[serde(default)]
    pub content: String,
}

/// Variant payloads, discriminated by the wire `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntryKind {
    Publication(PublicationFields),
    JournalIssue(JournalIssueFields),
    Conference(EventFields),
    Festival(EventFields),
    Exhibition(EventFields),
    CallForPapers(CallForPapersFields),
    Media(MediaFields),
    Text(TextFields),
}

impl EntryKind {
    /// Builds the default payload for a freshly added entry.
    pub fn default_for(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Publication => Self::Publication(PublicationFields {
                authors: vec![Author::default()],
                url_text: "link".to_string(),
                ..PublicationFields::default()
            }),
            EntryType::JournalIssue => Self::JournalIssue(JournalIssueFields {
                url_text: "link".to_string(),
                ..JournalIssueFields::default()
            }),
            EntryType::Conference => Self::Conference(EventFields::default()),
            EntryType::Festival => Self::Festival(EventFields::default()),
            EntryType::Exhibition => Self::Exhibition(EventFields::default()),
            EntryType::CallForPapers => Self::CallForPapers(CallForPapersFields::default()),
            EntryType::Media => Self::Media(MediaFields::default()),
            EntryType::Text => Self::Text(TextFields::default()),
        }
    }

    /// Title used by sorting, deduplication and location records.
    pub fn title(&self) -> &str {
        match self {
            Self::Publication(fields) => &fields.title,
            Self::JournalIssue(_) | Self::Text(_) => "",
            Self::Conference(fields) | Self::Festival(fields) | Self::Exhibition(fields) => {
                &fields.title
            }
            Self::CallForPapers(fields) => &fields.title,
            Self::Media(fields) => &fields.title,
        }
    }

    /// Explicit date used by the sort engine. Only bibliographic kinds
    /// carry one.
    pub fn sort_date(&self) -> &str {
        match self {
            Self::Publication(fields) => &fields.date,
            Self::JournalIssue(fields) => &fields.date,
            _ => "",
        }
    }

    /// Primary link of the entry, used by import deduplication.
    pub fn url(&self) -> &str {
        match self {
            Self::Publication(fields) => &fields.url,
            Self::JournalIssue(fields) => &fields.url,
            Self::Conference(fields) | Self::Festival(fields) | Self::Exhibition(fields) => {
                &fields.url
            }
            Self::CallForPapers(fields) => &fields.url,
            Self::Media(fields) => &fields.url,
            Self::Text(_) => "",
        }
    }

    /// Event payload plus its capitalized type label, for the location
    /// collector. `None` for non-event kinds.
    pub fn event_parts(&self) -> Option<(&'static str, &EventFields)> {
        match self {
            Self::Conference(fields) => Some(("Conference", fields)),
            Self::Festival(fields) => Some(("Festival", fields)),
            Self::Exhibition(fields) => Some(("Exhibition", fields)),
            _ => None,
        }
    }
}

/// One record inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// 1 = major, 3 = minor. Primary sort key.
    #[serde(default = "default_importance")]
    pub importance: u8,
    #[serde(default, rename = "whyItMatters")]
    pub why_it_matters: String,
    #[serde(default, with = "signal_wire")]
    pub signal: Option<Signal>,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl Entry {
    /// Creates an entry with a generated id and type-specific defaults.
    pub fn new(entry_type: EntryType) -> Self {
        Self::with_kind(EntryKind::default_for(entry_type))
    }

    /// Creates an entry around an already-built payload (import path).
    pub fn with_kind(kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            importance: default_importance(),
            why_it_matters: String::new(),
            signal: None,
            kind,
        }
    }
}

fn default_importance() -> u8 {
    2
}

/// Maps the absent signal to/from the empty wire string.
mod signal_wire {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Signal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(signal) => serializer.serialize_str(signal.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Signal>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Signal::parse(trimmed)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown signal tag `{trimmed}`")))
    }
}

/// Maps the absent media type to/from the empty wire string.
mod media_type_wire {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<MediaType>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(media_type) => serializer.serialize_str(media_type.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<MediaType>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim() {
            "" => Ok(None),
            "Video" => Ok(Some(MediaType::Video)),
            "Podcast" => Ok(Some(MediaType::Podcast)),
            "Audio" => Ok(Some(MediaType::Audio)),
            other => Err(D::Error::custom(format!("unknown media type `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryKind, EntryType, Signal};

    #[test]
    fn publication_defaults_match_editor_seed() {
        let entry = Entry::new(EntryType::Publication);
        assert_eq!(entry.importance, 2);
        assert!(entry.signal.is_none());
        match &entry.kind {
            EntryKind::Publication(fields) => {
                assert_eq!(fields.authors.len(), 1);
                assert_eq!(fields.url_text, "link");
                assert!(!fields.open_access);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn entry_wire_shape_uses_type_tag_and_flattened_commons() {
        let entry = Entry::new(EntryType::Conference);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "conference");
        assert_eq!(value["importance"], 2);
        assert_eq!(value["signal"], "");
        assert_eq!(value["dateStart"], "");
    }

    #[test]
    fn blank_signal_round_trips_as_none() {
        let json = r#"{
            "id": "00000000-0000-4000-8000-000000000001",
            "type": "text",
            "signal": "",
            "content": "hello"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.signal.is_none());

        let tagged = json.replace("\"signal\": \"\"", "\"signal\": \"funding\"");
        let entry: Entry = serde_json::from_str(&tagged).unwrap();
        assert_eq!(entry.signal, Some(Signal::Funding));
    }
}
