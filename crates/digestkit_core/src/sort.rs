//! Deterministic display/export ordering over section entries.
//!
//! # Invariants
//! - Stable: ties after all keys keep input relative order.
//! - Pure: the input slice is never modified.

use crate::model::entry::Entry;
use std::cmp::Ordering;

/// Orders entries by ascending importance, then newest explicit date, then
/// ascending title. Returns references in the new order.
pub fn sort_entries(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        let by_importance = a.importance.cmp(&b.importance);
        if by_importance != Ordering::Equal {
            return by_importance;
        }

        let (date_a, date_b) = (a.kind.sort_date(), b.kind.sort_date());
        if !date_a.is_empty() && !date_b.is_empty() && date_a != date_b {
            // Unparseable dates skip this key and fall through to title.
            if let (Some(key_a), Some(key_b)) = (calendar_key(date_a), calendar_key(date_b)) {
                let by_date = key_b.cmp(&key_a);
                if by_date != Ordering::Equal {
                    return by_date;
                }
            }
        }

        a.kind.title().cmp(b.kind.title())
    });
    sorted
}

/// Calendar interpretation of `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
/// Missing month/day default to 1.
fn calendar_key(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = match parts.next() {
        Some(raw) => raw.trim().parse().ok()?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(raw) => raw.trim().parse().ok()?,
        None => 1,
    };
    Some((year, month, day))
}
