//! Document store: explicit context object replacing the editor's global
//! singleton state.
//!
//! # Responsibility
//! - Hold the `Document` and run all mutations through one place.
//! - Deliver synchronous change notifications in subscription order.
//!
//! # Invariants
//! - Notification fires only after a mutation actually changed state.
//! - Subscribers receive a shared reference; they cannot mutate the tree.

use crate::model::document::{Document, Frontmatter, LocationOverride};
use crate::model::entry::{
    Author, Entry, EntryId, EntryKind, EntryType, MediaType, PubType, Signal,
};
use crate::model::section::{Section, SectionId, SectionType};

/// Handle returned by `subscribe`, used to dispose the subscription.
pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(&Document)>;

/// Typed field-update command for `update_entry`.
///
/// A command addressing a field the target variant does not define is
/// silently ignored, preserving the editor's no-op tolerance.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryUpdate {
    Importance(u8),
    WhyItMatters(String),
    Signal(Option<Signal>),
    Title(String),
    PubType(PubType),
    ContainerTitle(String),
    Publisher(String),
    Date(String),
    Url(String),
    UrlText(String),
    OpenAccess(bool),
    Abstract(String),
    Volume(String),
    Issue(String),
    JournalName(String),
    Theme(String),
    GuestEditor(String),
    Description(String),
    DateStart(String),
    DateEnd(String),
    CfpDeadline(String),
    Place(String),
    Venue(String),
    Coords(String),
    CustomEventType(String),
    Deadline(String),
    MediaType(Option<MediaType>),
    Creator(String),
    Content(String),
}

/// Author sub-field selector for `update_author`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Name,
    Surname,
}

/// Override sub-field selector for `update_frontmatter_location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    Title,
    Description,
}

/// Owns the document plus the subscriber list.
#[derive(Default)]
pub struct DocumentStore {
    document: Document,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around an existing document (load path).
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // === Reads ===

    /// Current document. Callers must route mutations through the store.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Owned copy of the current document.
    pub fn snapshot(&self) -> Document {
        self.document.clone()
    }

    pub fn find_section(&self, id: SectionId) -> Option<&Section> {
        self.document.sections.iter().find(|s| s.id == id)
    }

    // === Subscriptions ===

    /// Registers a change listener; delivery order is registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Document) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&mut self) {
        // Listeners only see `&Document`, so no reentrant mutation is
        // possible while they run.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&self.document);
        }
        self.listeners = listeners;
    }

    // === Whole-document operations ===

    /// Replaces the document wholesale (import/load path).
    pub fn replace(&mut self, document: Document) {
        self.document = document;
        self.notify();
    }

    /// Replaces the frontmatter metadata.
    pub fn set_frontmatter(&mut self, frontmatter: Frontmatter) {
        self.document.frontmatter = frontmatter;
        self.notify();
    }

    // === Section operations ===

    /// Adds an empty section and returns its generated id.
    pub fn add_section(&mut self, kind: SectionType, custom_title: Option<&str>) -> SectionId {
        let section = Section::new(kind, custom_title);
        let id = section.id;
        self.document.sections.push(section);
        self.notify();
        id
    }

    /// Removes a section. Entry location overrides are left in place and
    /// filtered out by the location collector.
    pub fn delete_section(&mut self, id: SectionId) {
        let before = self.document.sections.len();
        self.document.sections.retain(|s| s.id != id);
        if self.document.sections.len() != before {
            self.notify();
        }
    }

    /// Swaps a section with its previous sibling. No-op at the top.
    pub fn move_section_up(&mut self, id: SectionId) {
        if let Some(idx) = self.section_index(id) {
            if idx > 0 {
                self.document.sections.swap(idx, idx - 1);
                self.notify();
            }
        }
    }

    /// Swaps a section with its next sibling. No-op at the bottom.
    pub fn move_section_down(&mut self, id: SectionId) {
        if let Some(idx) = self.section_index(id) {
            if idx + 1 < self.document.sections.len() {
                self.document.sections.swap(idx, idx + 1);
                self.notify();
            }
        }
    }

    /// Re-sorts sections to match the given id order. Ids missing from the
    /// list sort first and keep their relative order (stable sort).
    pub fn reorder_sections(&mut self, id_order: &[SectionId]) {
        self.document.sections.sort_by_key(|section| {
            id_order
                .iter()
                .position(|id| *id == section.id)
                .map(|pos| pos as i64)
                .unwrap_or(-1)
        });
        self.notify();
    }

    // === Entry operations ===

    /// Appends a defaulted entry; `None` when the section is missing.
    pub fn add_entry(&mut self, section_id: SectionId, entry_type: EntryType) -> Option<EntryId> {
        let section = self.find_section_mut(section_id)?;
        let entry = Entry::new(entry_type);
        let id = entry.id;
        section.entries.push(entry);
        self.notify();
        Some(id)
    }

    /// Appends already-built entries in one batch with a single
    /// notification (import path). No-op when the section is missing.
    pub fn extend_section(&mut self, section_id: SectionId, entries: Vec<Entry>) {
        if entries.is_empty() {
            return;
        }
        let Some(section) = self.find_section_mut(section_id) else {
            return;
        };
        section.entries.extend(entries);
        self.notify();
    }

    /// Removes an entry and cascades removal of its location override.
    pub fn delete_entry(&mut self, section_id: SectionId, entry_id: EntryId) {
        let Some(section) = self.find_section_mut(section_id) else {
            return;
        };
        let before = section.entries.len();
        section.entries.retain(|e| e.id != entry_id);
        if section.entries.len() == before {
            return;
        }
        self.document
            .frontmatter_locations
            .retain(|loc| loc.entry_id != entry_id);
        self.notify();
    }

    /// Applies one typed field update. Silently ignored when the section,
    /// entry, or field-on-variant is missing.
    pub fn update_entry(&mut self, section_id: SectionId, entry_id: EntryId, update: EntryUpdate) {
        let Some(entry) = self.find_entry_mut(section_id, entry_id) else {
            return;
        };
        if apply_entry_update(entry, update) {
            self.notify();
        }
    }

    /// Moves an entry between (or within) sections. Missing sections or an
    /// out-of-range source index are silent no-ops; the insert index is
    /// clamped to the target length.
    pub fn move_entry(
        &mut self,
        from_section: SectionId,
        to_section: SectionId,
        from_idx: usize,
        to_idx: usize,
    ) {
        let Some(from_pos) = self.section_index(from_section) else {
            return;
        };
        let Some(to_pos) = self.section_index(to_section) else {
            return;
        };
        if from_idx >= self.document.sections[from_pos].entries.len() {
            return;
        }
        let entry = self.document.sections[from_pos].entries.remove(from_idx);
        let target = &mut self.document.sections[to_pos].entries;
        target.insert(to_idx.min(target.len()), entry);
        self.notify();
    }

    // === Author operations (publication entries only) ===

    /// Appends a blank author. No-op unless the entry is a publication.
    pub fn add_author(&mut self, section_id: SectionId, entry_id: EntryId) {
        let Some(authors) = self.find_authors_mut(section_id, entry_id) else {
            return;
        };
        authors.push(Author::default());
        self.notify();
    }

    /// Updates one author field by index. Out-of-range indices are ignored.
    pub fn update_author(
        &mut self,
        section_id: SectionId,
        entry_id: EntryId,
        idx: usize,
        field: AuthorField,
        value: &str,
    ) {
        let Some(authors) = self.find_authors_mut(section_id, entry_id) else {
            return;
        };
        let Some(author) = authors.get_mut(idx) else {
            return;
        };
        match field {
            AuthorField::Name => author.name = value.to_string(),
            AuthorField::Surname => author.surname = value.to_string(),
        }
        self.notify();
    }

    /// Removes one author by index. Out-of-range indices are ignored.
    pub fn delete_author(&mut self, section_id: SectionId, entry_id: EntryId, idx: usize) {
        let Some(authors) = self.find_authors_mut(section_id, entry_id) else {
            return;
        };
        if idx >= authors.len() {
            return;
        }
        authors.remove(idx);
        self.notify();
    }

    // === Location override operations ===

    /// Upserts one override field for the given entry id.
    pub fn update_frontmatter_location(
        &mut self,
        entry_id: EntryId,
        field: LocationField,
        value: &str,
    ) {
        let overrides = &mut self.document.frontmatter_locations;
        let idx = overrides
            .iter()
            .position(|loc| loc.entry_id == entry_id)
            .unwrap_or_else(|| {
                overrides.push(LocationOverride::new(entry_id));
                overrides.len() - 1
            });
        let location = &mut overrides[idx];
        match field {
            LocationField::Title => location.title = Some(value.to_string()),
            LocationField::Description => location.description = Some(value.to_string()),
        }
        self.notify();
    }

    // === Internal lookups ===

    fn section_index(&self, id: SectionId) -> Option<usize> {
        self.document.sections.iter().position(|s| s.id == id)
    }

    fn find_section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.document.sections.iter_mut().find(|s| s.id == id)
    }

    fn find_entry_mut(&mut self, section_id: SectionId, entry_id: EntryId) -> Option<&mut Entry> {
        self.find_section_mut(section_id)?
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id)
    }

    fn find_authors_mut(
        &mut self,
        section_id: SectionId,
        entry_id: EntryId,
    ) -> Option<&mut Vec<Author>> {
        match &mut self.find_entry_mut(section_id, entry_id)?.kind {
            EntryKind::Publication(fields) => Some(&mut fields.authors),
            _ => None,
        }
    }
}

/// Applies one update command; returns whether the entry changed.
fn apply_entry_update(entry: &mut Entry, update: EntryUpdate) -> bool {
    use EntryKind as K;
    use EntryUpdate as U;

    match update {
        U::Importance(value) => entry.importance = value,
        U::WhyItMatters(value) => entry.why_it_matters = value,
        U::Signal(value) => entry.signal = value,
        U::Title(value) => match &mut entry.kind {
            K::Publication(f) => f.title = value,
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.title = value,
            K::CallForPapers(f) => f.title = value,
            K::Media(f) => f.title = value,
            _ => return false,
        },
        U::PubType(value) => match &mut entry.kind {
            K::Publication(f) => f.pub_type = value,
            _ => return false,
        },
        U::ContainerTitle(value) => match &mut entry.kind {
            K::Publication(f) => f.container_title = value,
            _ => return false,
        },
        U::Publisher(value) => match &mut entry.kind {
            K::Publication(f) => f.publisher = value,
            _ => return false,
        },
        U::Date(value) => match &mut entry.kind {
            K::Publication(f) => f.date = value,
            K::JournalIssue(f) => f.date = value,
            _ => return false,
        },
        U::Url(value) => match &mut entry.kind {
            K::Publication(f) => f.url = value,
            K::JournalIssue(f) => f.url = value,
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.url = value,
            K::CallForPapers(f) => f.url = value,
            K::Media(f) => f.url = value,
            K::Text(_) => return false,
        },
        U::UrlText(value) => match &mut entry.kind {
            K::Publication(f) => f.url_text = value,
            K::JournalIssue(f) => f.url_text = value,
            _ => return false,
        },
        U::OpenAccess(value) => match &mut entry.kind {
            K::Publication(f) => f.open_access = value,
            K::JournalIssue(f) => f.open_access = value,
            _ => return false,
        },
        U::Abstract(value) => match &mut entry.kind {
            K::Publication(f) => f.abstract_text = value,
            _ => return false,
        },
        U::Volume(value) => match &mut entry.kind {
            K::Publication(f) => f.volume = value,
            K::JournalIssue(f) => f.volume = value,
            _ => return false,
        },
        U::Issue(value) => match &mut entry.kind {
            K::Publication(f) => f.issue = value,
            K::JournalIssue(f) => f.issue = value,
            _ => return false,
        },
        U::JournalName(value) => match &mut entry.kind {
            K::JournalIssue(f) => f.journal_name = value,
            _ => return false,
        },
        U::Theme(value) => match &mut entry.kind {
            K::JournalIssue(f) => f.theme = value,
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.theme = value,
            K::CallForPapers(f) => f.theme = value,
            _ => return false,
        },
        U::GuestEditor(value) => match &mut entry.kind {
            K::JournalIssue(f) => f.guest_editor = value,
            _ => return false,
        },
        U::Description(value) => match &mut entry.kind {
            K::JournalIssue(f) => f.description = value,
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.description = value,
            K::Media(f) => f.description = value,
            _ => return false,
        },
        U::DateStart(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.date_start = value,
            _ => return false,
        },
        U::DateEnd(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.date_end = value,
            _ => return false,
        },
        U::CfpDeadline(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.cfp_deadline = value,
            _ => return false,
        },
        U::Place(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.place = value,
            _ => return false,
        },
        U::Venue(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.venue = value,
            _ => return false,
        },
        U::Coords(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.coords = value,
            _ => return false,
        },
        U::CustomEventType(value) => match &mut entry.kind {
            K::Conference(f) | K::Festival(f) | K::Exhibition(f) => f.custom_event_type = value,
            _ => return false,
        },
        U::Deadline(value) => match &mut entry.kind {
            K::CallForPapers(f) => f.deadline = value,
            _ => return false,
        },
        U::MediaType(value) => match &mut entry.kind {
            K::Media(f) => f.media_type = value,
            _ => return false,
        },
        U::Creator(value) => match &mut entry.kind {
            K::Media(f) => f.creator = value,
            _ => return false,
        },
        U::Content(value) => match &mut entry.kind {
            K::Text(f) => f.content = value,
            _ => return false,
        },
    }
    true
}
