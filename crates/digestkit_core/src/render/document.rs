//! Full-document assembly: frontmatter + table of contents + sectioned body.

use crate::model::document::{Document, Frontmatter};
use crate::render::entry::render_entry;
use crate::render::frontmatter::generate_frontmatter;
use crate::render::locations::collect_locations;
use crate::sort::sort_entries;
use once_cell::sync::Lazy;
use regex::Regex;

// Pictographic ranges stripped from TOC link text.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{1F300}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]")
        .expect("valid emoji regex")
});
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid anchor regex"));
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));
static TRAILING_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid trailing whitespace regex"));

/// Renders the exported digest: normalized, with a blank separator after
/// the frontmatter block. A frontmatter override (editor-sourced metadata
/// not yet committed to the document) wins over the stored one.
pub fn export_markdown(document: &Document, frontmatter_override: Option<&Frontmatter>) -> String {
    let mut md = assemble(document, frontmatter_override, true);
    md = normalize_markdown(&md);
    md
}

/// Renders the live-preview variant: same content, no separator after the
/// frontmatter and no final whitespace normalization.
pub fn preview_markdown(document: &Document, frontmatter_override: Option<&Frontmatter>) -> String {
    assemble(document, frontmatter_override, false)
}

fn assemble(
    document: &Document,
    frontmatter_override: Option<&Frontmatter>,
    separate_frontmatter: bool,
) -> String {
    let frontmatter = frontmatter_override.unwrap_or(&document.frontmatter);
    let locations = collect_locations(&document.sections, &document.frontmatter_locations);

    let mut md = generate_frontmatter(frontmatter, &locations);
    if separate_frontmatter {
        md.push_str("\n\n");
    }

    md.push_str("## Jump to\n\n");
    for section in &document.sections {
        if section.entries.is_empty() {
            continue;
        }
        md.push_str(&format!(
            "- [{}](#{})\n",
            toc_title(&section.title),
            section_anchor(&section.title)
        ));
    }
    md.push('\n');

    for section in &document.sections {
        if section.entries.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n\n", section.title));
        for entry in sort_entries(&section.entries) {
            md.push_str(&render_entry(entry));
        }
    }

    md
}

/// Section title with pictographic characters removed.
pub fn toc_title(title: &str) -> String {
    EMOJI_RE.replace_all(title, "").trim().to_string()
}

/// Anchor slug: lowercased title with non-alphanumeric runs collapsed to
/// single hyphens.
pub fn section_anchor(title: &str) -> String {
    ANCHOR_RE
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

/// Collapses runs of blank lines, strips trailing whitespace per line,
/// trims the whole text and ends it with exactly one newline.
pub fn normalize_markdown(md: &str) -> String {
    let collapsed = BLANK_RUN_RE.replace_all(md, "\n\n");
    let stripped = TRAILING_WS_RE.replace_all(&collapsed, "");
    format!("{}\n", stripped.trim())
}
