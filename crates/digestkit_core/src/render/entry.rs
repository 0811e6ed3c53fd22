//! One markdown fragment renderer per entry kind.
//!
//! Publication citations follow a restricted MLA style keyed on `pubType`;
//! the other kinds use fixed label templates. Every fragment ends with a
//! blank line so sections stay separated.

use crate::model::entry::{
    CallForPapersFields, Entry, EntryKind, EventFields, JournalIssueFields, MediaFields,
    PublicationFields, PubType, TextFields,
};
use crate::render::util::{format_link, hard_breaks, mla_date, OPEN_ACCESS_BADGE};

/// Renders one entry, dispatching exhaustively on its kind.
pub fn render_entry(entry: &Entry) -> String {
    match &entry.kind {
        EntryKind::Publication(fields) => publication_markdown(entry, fields),
        EntryKind::JournalIssue(fields) => journal_issue_markdown(entry, fields),
        EntryKind::Conference(fields) | EntryKind::Festival(fields) | EntryKind::Exhibition(fields) => {
            event_markdown(entry, fields)
        }
        EntryKind::CallForPapers(fields) => call_for_papers_markdown(entry, fields),
        EntryKind::Media(fields) => media_markdown(entry, fields),
        EntryKind::Text(fields) => text_markdown(fields),
    }
}

/// Shared editorial tail: italicized annotation plus signal label.
/// Publication lines end bare; every other kind uses hard breaks.
fn editorial_tail(md: &mut String, entry: &Entry, line_end: &str) {
    if !entry.why_it_matters.is_empty() {
        md.push_str(&format!(
            "*{}*{line_end}",
            hard_breaks(&entry.why_it_matters)
        ));
    }
    if let Some(signal) = entry.signal {
        md.push_str(&format!("**Signal**: {}{line_end}", signal.as_str()));
    }
}

fn year_of(date: &str) -> &str {
    date.split('-').next().unwrap_or(date)
}

fn publication_markdown(entry: &Entry, fields: &PublicationFields) -> String {
    let mut md = String::new();

    // First author inverted ("Surname, First"), the rest in reading order.
    let authors = fields
        .authors
        .iter()
        .filter(|a| !a.surname.is_empty() || !a.name.is_empty())
        .enumerate()
        .map(|(idx, a)| {
            if idx == 0 {
                format!("{}, {}", a.surname, a.name)
            } else {
                format!("{} {}", a.name, a.surname)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    if !authors.is_empty() {
        md.push_str(&format!("{authors}. "));
    }

    match fields.pub_type {
        PubType::Book => {
            md.push_str(&format!("*{}*", fields.title));
            if !fields.publisher.is_empty() {
                md.push_str(&format!(". {}", fields.publisher));
            }
            if !fields.date.is_empty() {
                md.push_str(&format!(", {}", year_of(&fields.date)));
            }
            md.push('.');
            md.push_str(&format_link(&fields.url, &fields.url_text, fields.open_access));
        }
        PubType::Chapter => {
            md.push_str(&format!("\"{}.\"", fields.title));
            if !fields.container_title.is_empty() {
                md.push_str(&format!(" *{}*", fields.container_title));
            }
            if !fields.publisher.is_empty() {
                md.push_str(&format!(", {}", fields.publisher));
            }
            if !fields.date.is_empty() {
                md.push_str(&format!(", {}", year_of(&fields.date)));
            }
            md.push('.');
            md.push_str(&format_link(&fields.url, &fields.url_text, fields.open_access));
        }
        PubType::Article | PubType::OnlineArticle => {
            md.push_str(&format!("\"{}.\"", fields.title));
            if !fields.container_title.is_empty() {
                md.push_str(&format!(" *{}*", fields.container_title));
            }
            if !fields.volume.is_empty() {
                md.push_str(&format!(", vol. {}", fields.volume));
            }
            if !fields.issue.is_empty() {
                md.push_str(&format!(", no. {}", fields.issue));
            }
            if !fields.date.is_empty() {
                md.push_str(&format!(", {}", mla_date(&fields.date)));
            }
            md.push_str(&format_link(&fields.url, &fields.url_text, fields.open_access));
            md.push('.');
        }
        PubType::Thesis => {
            md.push_str(&format!("*{}*", fields.title));
            if !fields.date.is_empty() {
                md.push_str(&format!(". {}", year_of(&fields.date)));
            }
            if !fields.publisher.is_empty() {
                md.push_str(&format!(". {}", fields.publisher));
            }
            md.push('.');
            md.push_str(&format_link(&fields.url, &fields.url_text, fields.open_access));
        }
        PubType::BlogPost => {
            // Generic citation shape for types without a dedicated template.
            md.push_str(&format!("\"{}.\"", fields.title));
            if !fields.container_title.is_empty() {
                md.push_str(&format!(" *{}*", fields.container_title));
            }
            if !fields.volume.is_empty() {
                md.push_str(&format!(", vol. {}", fields.volume));
            }
            if !fields.issue.is_empty() {
                md.push_str(&format!(", no. {}", fields.issue));
            }
            if !fields.publisher.is_empty() {
                md.push_str(&format!(", {}", fields.publisher));
            }
            if !fields.date.is_empty() {
                md.push_str(&format!(", {}", fields.date));
            }
            md.push_str(&format_link(&fields.url, &fields.url_text, fields.open_access));
            md.push('.');
        }
    }
    md.push('\n');

    editorial_tail(&mut md, entry, "\n");

    if !fields.abstract_text.is_empty() {
        let label = match fields.pub_type {
            PubType::Book | PubType::Chapter | PubType::Thesis => "Annotation",
            _ => "Abstract",
        };
        md.push_str(&format!(
            "<details markdown=\"1\"><summary>{label}</summary>\n{}\n</details>\n",
            hard_breaks(&fields.abstract_text)
        ));
    }

    md.push('\n');
    md
}

fn journal_issue_markdown(entry: &Entry, fields: &JournalIssueFields) -> String {
    let mut md = String::new();

    if !fields.journal_name.is_empty() {
        md.push_str(&format!("*{}*", fields.journal_name));
    }
    if !fields.volume.is_empty() {
        md.push_str(&format!(", Vol. {}", fields.volume));
    }
    if !fields.issue.is_empty() {
        md.push_str(&format!(", No. {}", fields.issue));
    }
    if !fields.date.is_empty() {
        md.push_str(&format!(" ({})", fields.date));
    }
    if !fields.theme.is_empty() {
        md.push_str(&format!(": \"{}\"", fields.theme));
    }
    if !fields.guest_editor.is_empty() {
        md.push_str(&format!(", edited by {}", fields.guest_editor));
    }
    md.push_str(".  \n");

    if !fields.description.is_empty() {
        md.push_str(&format!("{}  \n", hard_breaks(&fields.description)));
    }

    editorial_tail(&mut md, entry, "  \n");

    if !fields.url.is_empty() {
        if fields.open_access {
            md.push_str(&format!("[{OPEN_ACCESS_BADGE}]({})", fields.url));
        } else {
            let text = if fields.url_text.is_empty() {
                "Link"
            } else {
                &fields.url_text
            };
            md.push_str(&format!("[{text}]({})", fields.url));
        }
    }

    md.push_str("\n\n");
    md
}

fn event_markdown(entry: &Entry, fields: &EventFields) -> String {
    let mut md = String::new();

    if !fields.title.is_empty() {
        md.push_str(&format!("**{}**", fields.title));
        if !fields.theme.is_empty() {
            md.push_str(&format!(" \"{}\"", fields.theme));
        }
        md.push_str("  \n");
    }
    if !fields.date_start.is_empty() {
        if fields.date_end.is_empty() {
            md.push_str(&format!("Dates: {}  \n", fields.date_start));
        } else {
            md.push_str(&format!(
                "Dates: {} to {}  \n",
                fields.date_start, fields.date_end
            ));
        }
    }
    if !fields.cfp_deadline.is_empty() {
        md.push_str(&format!("CfP Deadline: {}  \n", fields.cfp_deadline));
    }
    if !fields.place.is_empty() {
        if fields.venue.is_empty() {
            md.push_str(&format!("Place: {}  \n", fields.place));
        } else {
            md.push_str(&format!("Place: {}, {}  \n", fields.place, fields.venue));
        }
    }
    if !fields.description.is_empty() {
        md.push_str(&format!(
            "Description: {}  \n",
            hard_breaks(&fields.description)
        ));
    }

    editorial_tail(&mut md, entry, "  \n");

    if !fields.url.is_empty() {
        md.push_str(&format!("[Website]({})  \n", fields.url));
    }
    md.push('\n');
    md
}

fn call_for_papers_markdown(entry: &Entry, fields: &CallForPapersFields) -> String {
    let mut md = String::new();

    if !fields.title.is_empty() {
        md.push_str(&format!("**{}** - {}  \n", fields.title, fields.theme));
    }
    if !fields.deadline.is_empty() {
        md.push_str(&format!("Deadline: {}  \n", fields.deadline));
    }

    editorial_tail(&mut md, entry, "  \n");

    if !fields.url.is_empty() {
        md.push_str(&format!("[Apply]({})  \n", fields.url));
    }
    md.push('\n');
    md
}

fn media_markdown(entry: &Entry, fields: &MediaFields) -> String {
    let mut md = String::new();

    if !fields.title.is_empty() {
        let media_type = fields.media_type.map(|m| m.as_str()).unwrap_or("Media");
        md.push_str(&format!("**{}** ({media_type})  \n", fields.title));
    }
    if !fields.creator.is_empty() {
        md.push_str(&format!("By: {}  \n", fields.creator));
    }
    if !fields.description.is_empty() {
        md.push_str(&format!("{}  \n", hard_breaks(&fields.description)));
    }

    editorial_tail(&mut md, entry, "  \n");

    if !fields.url.is_empty() {
        md.push_str(&format!("[Watch/Listen]({})  \n", fields.url));
    }
    md.push('\n');
    md
}

fn text_markdown(fields: &TextFields) -> String {
    format!("{}\n\n", fields.content)
}
