//! CSL-JSON publication import.
//!
//! Parsed records arrive from an external collaborator (reference-manager
//! export); this module maps them onto publication entries and skips
//! records already present in the publications section.

use crate::interchange::InterchangeError;
use crate::model::entry::{Author, Entry, EntryKind, PublicationFields, PubType};
use crate::model::section::SectionType;
use crate::render::util::extract_doi;
use crate::store::document_store::DocumentStore;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One parsed CSL-JSON item, restricted to the fields the editor uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CslRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "DOI")]
    pub doi: String,
    #[serde(default)]
    pub author: Vec<CslAuthor>,
    #[serde(default, rename = "type")]
    pub record_type: String,
    #[serde(default, rename = "container-title")]
    pub container_title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub issued: Option<CslIssued>,
    #[serde(default, rename = "URL")]
    pub url: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub issue: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CslAuthor {
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub family: String,
}

/// CSL issued date: structured date parts or a raw string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CslIssued {
    #[serde(default, rename = "date-parts")]
    pub date_parts: Vec<Vec<i64>>,
    #[serde(default)]
    pub raw: String,
}

/// Outcome of one import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<String>,
}

impl ImportReport {
    /// Human-readable batch summary, duplicate titles capped at five.
    pub fn summary(&self) -> String {
        let mut message = format!("Successfully imported {} new item(s)!", self.imported);
        if !self.skipped.is_empty() {
            message.push_str(&format!(
                "\n\nSkipped {} duplicate(s):\n",
                self.skipped.len()
            ));
            message.push_str(
                &self
                    .skipped
                    .iter()
                    .take(5)
                    .map(|title| format!("• {title}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
            if self.skipped.len() > 5 {
                message.push_str(&format!("\n... and {} more", self.skipped.len() - 5));
            }
        }
        message
    }
}

/// Maps a CSL item type onto the editor's bibliographic types.
/// Unknown types default to `Article`.
pub fn map_csl_type(csl_type: &str) -> PubType {
    match csl_type {
        "book" => PubType::Book,
        "chapter" => PubType::Chapter,
        "article-journal" | "article-magazine" | "article-newspaper" | "paper-conference" => {
            PubType::Article
        }
        "thesis" => PubType::Thesis,
        "webpage" => PubType::OnlineArticle,
        "post-weblog" => PubType::BlogPost,
        _ => PubType::Article,
    }
}

/// Formats a CSL issued date as hyphen-joined parts (`2024-3-5`), the raw
/// string fallback, or empty when absent.
pub fn format_csl_date(issued: Option<&CslIssued>) -> String {
    let Some(issued) = issued else {
        return String::new();
    };
    if let Some(parts) = issued.date_parts.first() {
        if !parts.is_empty() {
            return parts
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join("-");
        }
    }
    issued.raw.clone()
}

/// Parses a CSL-JSON payload; anything but a top-level array is rejected.
pub fn parse_csl(json: &str) -> Result<Vec<CslRecord>, InterchangeError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|err| {
        InterchangeError::InvalidStructure(format!("invalid CSL-JSON: {err}"))
    })?;
    if !value.is_array() {
        return Err(InterchangeError::InvalidStructure(
            "invalid CSL-JSON: expected an array of items".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| {
        InterchangeError::InvalidStructure(format!("invalid CSL-JSON item: {err}"))
    })
}

/// Imports records as publication entries, skipping duplicates.
///
/// Duplicate detection matches case/whitespace-normalized titles, or the
/// record DOI against a DOI extracted from any existing entry's url. The
/// publications section is created when absent; accepted entries land in
/// one batch with a single change notification.
pub fn import_publications(store: &mut DocumentStore, records: &[CslRecord]) -> ImportReport {
    let section_id = match store
        .document()
        .sections
        .iter()
        .find(|s| s.kind == SectionType::Publications)
    {
        Some(section) => section.id,
        None => store.add_section(SectionType::Publications, None),
    };

    let mut pending: Vec<Entry> = Vec::new();
    let mut report = ImportReport::default();

    for record in records {
        let title_key = normalize_title(&record.title);
        let doi = record.doi.trim();

        let existing = store
            .find_section(section_id)
            .map(|s| s.entries.as_slice())
            .unwrap_or(&[]);
        let duplicate = existing.iter().chain(pending.iter()).any(|entry| {
            if !title_key.is_empty() {
                let entry_key = normalize_title(entry.kind.title());
                if !entry_key.is_empty() && entry_key == title_key {
                    return true;
                }
            }
            if !doi.is_empty() {
                if let Some(entry_doi) = extract_doi(entry.kind.url()) {
                    if doi.eq_ignore_ascii_case(entry_doi) {
                        return true;
                    }
                }
            }
            false
        });

        if duplicate {
            report.skipped.push(record.title.clone());
        } else {
            pending.push(record.to_entry());
            report.imported += 1;
        }
    }

    debug!(
        "event=csl_import module=interchange status=ok imported={} skipped={}",
        report.imported,
        report.skipped.len()
    );
    store.extend_section(section_id, pending);
    report
}

fn normalize_title(title: &str) -> String {
    WHITESPACE_RE
        .replace_all(title.to_lowercase().trim(), " ")
        .into_owned()
}

impl CslRecord {
    fn to_entry(&self) -> Entry {
        let authors = if self.author.is_empty() {
            vec![Author::default()]
        } else {
            self.author
                .iter()
                .map(|a| Author {
                    name: a.given.clone(),
                    surname: a.family.clone(),
                })
                .collect()
        };
        let url = if !self.url.is_empty() {
            self.url.clone()
        } else if !self.doi.is_empty() {
            format!("https://doi.org/{}", self.doi)
        } else {
            String::new()
        };

        Entry::with_kind(EntryKind::Publication(PublicationFields {
            authors,
            title: self.title.clone(),
            pub_type: map_csl_type(&self.record_type),
            container_title: self.container_title.clone(),
            publisher: self.publisher.clone(),
            date: format_csl_date(self.issued.as_ref()),
            url,
            url_text: "link".to_string(),
            open_access: false,
            abstract_text: self.abstract_text.clone(),
            volume: self.volume.clone(),
            issue: self.issue.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_csl_date, map_csl_type, CslIssued};
    use crate::model::entry::PubType;

    #[test]
    fn type_table_matches_contract() {
        assert_eq!(map_csl_type("book"), PubType::Book);
        assert_eq!(map_csl_type("paper-conference"), PubType::Article);
        assert_eq!(map_csl_type("webpage"), PubType::OnlineArticle);
        assert_eq!(map_csl_type("post-weblog"), PubType::BlogPost);
        assert_eq!(map_csl_type("dataset"), PubType::Article);
    }

    #[test]
    fn issued_date_joins_parts_without_padding() {
        let issued = CslIssued {
            date_parts: vec![vec![2024, 3, 5]],
            raw: String::new(),
        };
        assert_eq!(format_csl_date(Some(&issued)), "2024-3-5");

        let raw = CslIssued {
            date_parts: vec![],
            raw: "Spring 2024".to_string(),
        };
        assert_eq!(format_csl_date(Some(&raw)), "Spring 2024");
        assert_eq!(format_csl_date(None), "");
    }
}
