use digestkit_core::render::frontmatter::generate_frontmatter;
use digestkit_core::render::locations::collect_locations;
use digestkit_core::{
    DocumentStore, EntryKind, EntryType, Frontmatter, LocationField, LocationOverride, SectionType,
};

fn store_with_conference() -> (DocumentStore, uuid::Uuid) {
    let mut store = DocumentStore::new();
    let section_id = store.add_section(SectionType::Conferences, None);
    let entry_id = store.add_entry(section_id, EntryType::Conference).unwrap();
    let mut document = store.snapshot();
    if let EntryKind::Conference(fields) = &mut document.sections[0].entries[0].kind {
        fields.title = "DH2025".to_string();
        fields.place = "Paris, France".to_string();
        fields.venue = "Sorbonne".to_string();
        fields.coords = "48.85, 2.35".to_string();
        fields.date_start = "2025-07-01".to_string();
        fields.date_end = "2025-07-03".to_string();
        fields.description = "Annual meeting".to_string();
    }
    store.replace(document);
    (store, entry_id)
}

#[test]
fn event_entries_derive_location_records() {
    let (store, entry_id) = store_with_conference();
    let document = store.document();

    let locations = collect_locations(&document.sections, &document.frontmatter_locations);
    assert_eq!(locations.len(), 1);

    let location = &locations[0];
    assert_eq!(location.title, "Conference: DH2025");
    assert_eq!(location.city, "Paris");
    assert_eq!(location.country, "France");
    assert_eq!(location.venue, "Sorbonne");
    assert_eq!(location.coords, vec![48.85, 2.35]);
    assert_eq!(location.date, "2025-07-01 to 2025-07-03");
    assert_eq!(location.description, "Annual meeting");
    assert_eq!(location.entry_id, entry_id);
}

#[test]
fn overrides_replace_title_and_description_only() {
    let (mut store, entry_id) = store_with_conference();
    store.update_frontmatter_location(entry_id, LocationField::Title, "Summer school");
    store.update_frontmatter_location(entry_id, LocationField::Description, "Hands-on");

    let document = store.document();
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);
    assert_eq!(locations[0].title, "Summer school");
    assert_eq!(locations[0].description, "Hands-on");
    // Derived geography is not overridable.
    assert_eq!(locations[0].city, "Paris");
    assert_eq!(locations[0].country, "France");
}

#[test]
fn empty_override_values_fall_back_to_derived_text() {
    let (mut store, entry_id) = store_with_conference();
    store.update_frontmatter_location(entry_id, LocationField::Title, "");

    let document = store.document();
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);
    assert_eq!(locations[0].title, "Conference: DH2025");
}

#[test]
fn dangling_overrides_are_ignored() {
    let (store, _) = store_with_conference();
    let mut overrides = store.document().frontmatter_locations.clone();
    overrides.push(LocationOverride::new(uuid::Uuid::new_v4()));

    let locations = collect_locations(&store.document().sections, &overrides);
    assert_eq!(locations.len(), 1);
}

#[test]
fn custom_event_type_replaces_the_derived_label() {
    let (mut store, _) = store_with_conference();
    let mut document = store.snapshot();
    if let EntryKind::Conference(fields) = &mut document.sections[0].entries[0].kind {
        fields.custom_event_type = "Symposium".to_string();
    }
    store.replace(document);

    let document = store.document();
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);
    assert_eq!(locations[0].title, "Symposium: DH2025");
}

#[test]
fn non_event_entries_produce_no_records() {
    let mut store = DocumentStore::new();
    let section_id = store.add_section(SectionType::Publications, None);
    store.add_entry(section_id, EntryType::Publication).unwrap();
    store.add_entry(section_id, EntryType::Text).unwrap();

    let document = store.document();
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);
    assert!(locations.is_empty());
}

#[test]
fn frontmatter_block_layout_is_fixed() {
    let (store, _) = store_with_conference();
    let document = store.document();
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);

    let block = generate_frontmatter(&Frontmatter::default(), &locations);
    assert_eq!(
        block,
        "---\n\
         layout: digest-entry\n\
         title: \"Untitled\"\n\
         date: \"2025-01-01\"\n\
         tags: []\n\
         draft: true\n\
         locations:\n\
         \x20\x20- title: \"Conference: DH2025\"\n\
         \x20\x20\x20\x20city: \"Paris\"\n\
         \x20\x20\x20\x20venue: \"Sorbonne\"\n\
         \x20\x20\x20\x20country: \"France\"\n\
         \x20\x20\x20\x20date: \"2025-07-01 to 2025-07-03\"\n\
         \x20\x20\x20\x20coords: [48.85, 2.35]\n\
         \x20\x20\x20\x20description: \"Annual meeting\"\n\
         ---\n\n"
    );
}

#[test]
fn populated_frontmatter_escapes_and_joins_tags() {
    let frontmatter = Frontmatter {
        title: "Issue \"42\"".to_string(),
        date: "2025-06-01".to_string(),
        tags: vec!["digest".to_string(), "media".to_string()],
        draft: false,
    };
    let block = generate_frontmatter(&frontmatter, &[]);
    assert!(block.contains("title: \"Issue \\\"42\\\"\"\n"));
    assert!(block.contains("date: \"2025-06-01\"\n"));
    assert!(block.contains("tags: [\"digest\", \"media\"]\n"));
    assert!(block.contains("draft: false\n"));
    assert!(!block.contains("locations:"));
}
