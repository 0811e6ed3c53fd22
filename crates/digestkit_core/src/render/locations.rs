//! Geolocation record derivation for the frontmatter block.
//!
//! # Invariants
//! - Only conference/festival/exhibition entries produce records.
//! - Overrides may replace title and description; city, venue, country,
//!   coords and date always derive from the entry itself.
//! - Overrides whose entry no longer exists are ignored.

use crate::model::document::LocationOverride;
use crate::model::entry::EntryId;
use crate::model::section::Section;

/// Computed location record; embedded in frontmatter, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedLocation {
    pub title: String,
    pub city: String,
    pub venue: String,
    pub country: String,
    /// Normally empty or a `[lat, lng]` pair.
    pub coords: Vec<f64>,
    pub date: String,
    pub description: String,
    pub entry_id: EntryId,
}

/// Walks entries in section order and derives one record per event entry,
/// applying user overrides where present.
pub fn collect_locations(
    sections: &[Section],
    overrides: &[LocationOverride],
) -> Vec<DerivedLocation> {
    let mut locations = Vec::new();

    for section in sections {
        for entry in &section.entries {
            let Some((kind_label, fields)) = entry.kind.event_parts() else {
                continue;
            };

            let (city, country) = split_place(&fields.place);
            let type_label = if fields.custom_event_type.is_empty() {
                kind_label
            } else {
                &fields.custom_event_type
            };
            let entry_title = if fields.title.is_empty() {
                "Untitled"
            } else {
                &fields.title
            };

            let override_entry = overrides.iter().find(|loc| loc.entry_id == entry.id);
            let title = override_entry
                .and_then(|loc| loc.title.as_deref())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{type_label}: {entry_title}"));
            let description = override_entry
                .and_then(|loc| loc.description.as_deref())
                .filter(|d| !d.is_empty())
                .unwrap_or(&fields.description)
                .to_string();

            locations.push(DerivedLocation {
                title,
                city,
                venue: fields.venue.clone(),
                country,
                coords: parse_coordinates(&fields.coords),
                date: format_event_date(&fields.date_start, &fields.date_end),
                description,
                entry_id: entry.id,
            });
        }
    }

    locations
}

/// Splits free-text "City, Country" on commas: first segment is the city,
/// last is the country when at least two segments exist.
fn split_place(place: &str) -> (String, String) {
    if place.is_empty() {
        return (String::new(), String::new());
    }
    let parts: Vec<&str> = place.split(',').map(str::trim).collect();
    if parts.len() >= 2 {
        (parts[0].to_string(), parts[parts.len() - 1].to_string())
    } else {
        (parts[0].to_string(), String::new())
    }
}

/// Parses comma-separated floats, dropping non-numeric tokens.
fn parse_coordinates(coords: &str) -> Vec<f64> {
    coords
        .split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .collect()
}

/// `start`, or `start to end` when the end differs; empty without a start.
fn format_event_date(start: &str, end: &str) -> String {
    if start.is_empty() {
        return String::new();
    }
    if end.is_empty() || start == end {
        start.to_string()
    } else {
        format!("{start} to {end}")
    }
}
