use digestkit_core::{sort_entries, Entry, EntryKind, EntryType, EntryUpdate};
use digestkit_core::{DocumentStore, SectionType};

fn publication(title: &str, date: &str, importance: u8) -> Entry {
    let mut entry = Entry::new(EntryType::Publication);
    entry.importance = importance;
    if let EntryKind::Publication(fields) = &mut entry.kind {
        fields.title = title.to_string();
        fields.date = date.to_string();
    }
    entry
}

fn titles(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.kind.title().to_string()).collect()
}

#[test]
fn importance_is_the_primary_key() {
    let entries = vec![
        publication("minor", "2025-12-01", 3),
        publication("major", "2020-01-01", 1),
        publication("normal", "2024-06-01", 2),
    ];
    let sorted = sort_entries(&entries);
    assert_eq!(titles(&sorted), vec!["major", "normal", "minor"]);
}

#[test]
fn newer_dates_come_first_within_equal_importance() {
    let entries = vec![
        publication("old", "2023-01-10", 2),
        publication("new", "2025-03-15", 2),
        publication("mid", "2024-07-01", 2),
    ];
    let sorted = sort_entries(&entries);
    assert_eq!(titles(&sorted), vec!["new", "mid", "old"]);
}

#[test]
fn partial_dates_compare_on_the_calendar() {
    // 2025 reads as 2025-01-01, so a full date later that year wins.
    let entries = vec![
        publication("bare year", "2025", 2),
        publication("spring", "2025-04", 2),
    ];
    let sorted = sort_entries(&entries);
    assert_eq!(titles(&sorted), vec!["spring", "bare year"]);
}

#[test]
fn unparseable_dates_fall_through_to_title() {
    let entries = vec![
        publication("zeta", "spring 2025", 2),
        publication("alpha", "sometime", 2),
    ];
    let sorted = sort_entries(&entries);
    assert_eq!(titles(&sorted), vec!["alpha", "zeta"]);
}

#[test]
fn title_breaks_remaining_ties() {
    let entries = vec![
        publication("b side", "2025-01-01", 2),
        publication("a side", "2025-01-01", 2),
    ];
    let sorted = sort_entries(&entries);
    assert_eq!(titles(&sorted), vec!["a side", "b side"]);
}

#[test]
fn equal_keys_keep_insertion_order() {
    let mut first = Entry::new(EntryType::Text);
    first.importance = 2;
    let mut second = Entry::new(EntryType::Text);
    second.importance = 2;
    let ids = (first.id, second.id);

    let entries = vec![first, second];
    let sorted = sort_entries(&entries);
    assert_eq!(sorted[0].id, ids.0);
    assert_eq!(sorted[1].id, ids.1);
}

#[test]
fn sorting_never_mutates_the_stored_order() {
    let mut store = DocumentStore::new();
    let section_id = store.add_section(SectionType::Publications, None);
    let first = store.add_entry(section_id, EntryType::Publication).unwrap();
    let second = store.add_entry(section_id, EntryType::Publication).unwrap();
    store.update_entry(section_id, second, EntryUpdate::Importance(1));

    let section = store.find_section(section_id).unwrap();
    let sorted = sort_entries(&section.entries);
    assert_eq!(sorted[0].id, second);

    // Stored order is untouched.
    assert_eq!(section.entries[0].id, first);
    assert_eq!(section.entries[1].id, second);
}
