//! Fixed-schema YAML frontmatter emission.
//!
//! The field set and ordering are a published contract: layout, title,
//! date, tags, draft, then an optional locations list. Consumers parse the
//! block positionally as well as by key, so nothing here may be reordered.

use crate::model::document::Frontmatter;
use crate::render::locations::DerivedLocation;
use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("valid newline run regex"));

/// Escapes a value for double-quoted YAML scalars: backslashes and quotes
/// escaped, newline runs collapsed to one space, result trimmed.
pub fn yaml_escape(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    NEWLINE_RUN_RE.replace_all(&escaped, " ").trim().to_string()
}

/// Renders the delimited frontmatter block, locations included only when
/// at least one exists.
pub fn generate_frontmatter(frontmatter: &Frontmatter, locations: &[DerivedLocation]) -> String {
    let mut md = String::from("---\n");

    md.push_str("layout: digest-entry\n");

    let title = if frontmatter.title.is_empty() {
        "Untitled"
    } else {
        &frontmatter.title
    };
    md.push_str(&format!("title: \"{}\"\n", yaml_escape(title)));

    let date = if frontmatter.date.is_empty() {
        "2025-01-01"
    } else {
        &frontmatter.date
    };
    md.push_str(&format!("date: \"{date}\"\n"));

    let tags = frontmatter
        .tags
        .iter()
        .map(|tag| format!("\"{}\"", yaml_escape(tag)))
        .collect::<Vec<_>>()
        .join(", ");
    md.push_str(&format!("tags: [{tags}]\n"));

    md.push_str(&format!("draft: {}\n", frontmatter.draft));

    if !locations.is_empty() {
        md.push_str("locations:\n");
        for location in locations {
            md.push_str(&format!("  - title: \"{}\"\n", yaml_escape(&location.title)));
            md.push_str(&format!("    city: \"{}\"\n", yaml_escape(&location.city)));
            md.push_str(&format!("    venue: \"{}\"\n", yaml_escape(&location.venue)));
            md.push_str(&format!(
                "    country: \"{}\"\n",
                yaml_escape(&location.country)
            ));
            md.push_str(&format!("    date: \"{}\"\n", yaml_escape(&location.date)));
            let coords = location
                .coords
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            md.push_str(&format!("    coords: [{coords}]\n"));
            md.push_str(&format!(
                "    description: \"{}\"\n",
                yaml_escape(&location.description)
            ));
        }
    }

    md.push_str("---\n\n");
    md
}
