//! Stateless text formatting helpers shared by the entry renderers.

use once_cell::sync::Lazy;
use regex::Regex;

static DOI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"10\.\d{4,}/[^\s]+").expect("valid DOI regex"));
static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^a-z0-9\-_]").expect("valid filename regex"));
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date regex"));

/// Inline badge markup used for open-access links.
pub const OPEN_ACCESS_BADGE: &str = "<span style=\"background-color: #5a96d0; color: white; \
     padding: 0.25em 0.4em; border-radius: 0.25rem; font-size: 75%; line-height: 1;\">\
     Open Access</span>";

/// Abbreviated month names per MLA style; May, June and July stay full.
const MLA_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Small words kept lowercase in title case, except in first/last position.
const TITLE_SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "for", "yet", "so", "at", "by", "in", "of", "on",
    "to", "up", "as", "is", "if", "it", "from", "into", "with", "via", "per", "vs",
];

/// Turns internal newlines into markdown hard line breaks (two trailing
/// spaces before the newline), the Jekyll-compatible encoding.
pub fn hard_breaks(text: &str) -> String {
    text.replace('\n', "  \n")
}

/// Renders the trailing link of a citation, leading space included.
///
/// Precedence: open-access badge, then literal `DOI` for DOI urls, then the
/// custom text or `link`. Empty urls render nothing.
pub fn format_link(url: &str, custom_text: &str, open_access: bool) -> String {
    if url.is_empty() {
        return String::new();
    }
    if open_access {
        return format!(" [{OPEN_ACCESS_BADGE}]({url})");
    }
    if url.contains("doi.org/") && DOI_RE.is_match(url) {
        return format!(" [DOI]({url})");
    }
    let text = if custom_text.is_empty() {
        "link"
    } else {
        custom_text
    };
    format!(" [{text}]({url})")
}

/// First DOI found in the given url, if any.
pub fn extract_doi(url: &str) -> Option<&str> {
    DOI_RE.find(url).map(|m| m.as_str())
}

/// Formats an ISO `YYYY[-MM[-DD]]` date as an MLA citation date:
/// `15 Mar. 2025`, `Mar. 2025`, or `2025`. Anything unparseable passes
/// through unchanged.
pub fn mla_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            let (Some(month_name), Ok(day_number)) = (month_name(month), day.parse::<u32>())
            else {
                return date.to_string();
            };
            format!("{day_number} {month_name} {year}")
        }
        [year, month] => match month_name(month) {
            Some(month_name) => format!("{month_name} {year}"),
            None => date.to_string(),
        },
        _ => date.to_string(),
    }
}

fn month_name(raw: &str) -> Option<&'static str> {
    let month: usize = raw.parse().ok()?;
    if (1..=12).contains(&month) {
        Some(MLA_MONTHS[month - 1])
    } else {
        None
    }
}

/// Small-word-aware title casing: every word capitalized except listed
/// small words, with first and last words always capitalized.
pub fn title_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len() - 1;
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let lowered = word.to_lowercase();
            if idx != 0 && idx != last && TITLE_SMALL_WORDS.contains(&lowered.as_str()) {
                lowered
            } else {
                capitalize(&lowered)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strict `YYYY-MM-DD` shape check; empty input counts as valid.
pub fn validate_date(date: &str) -> bool {
    date.is_empty() || ISO_DATE_RE.is_match(date)
}

/// Lowercased filename slug: anything outside `[a-z0-9-_]` becomes `-`.
pub fn sanitize_filename(filename: &str) -> String {
    FILENAME_RE.replace_all(filename, "-").to_lowercase()
}
