use digestkit_core::render::entry::render_entry;
use digestkit_core::render::util::OPEN_ACCESS_BADGE;
use digestkit_core::{Author, Entry, EntryKind, EntryType, Signal};

fn publication(build: impl FnOnce(&mut digestkit_core::model::entry::PublicationFields)) -> Entry {
    let mut entry = Entry::new(EntryType::Publication);
    if let EntryKind::Publication(fields) = &mut entry.kind {
        build(fields);
    }
    entry
}

#[test]
fn article_citation_follows_mla_shape() {
    let entry = publication(|f| {
        f.authors = vec![Author {
            name: "Jane".into(),
            surname: "Doe".into(),
        }];
        f.title = "Digital Archives".into();
        f.container_title = "Media History".into();
        f.volume = "12".into();
        f.issue = "3".into();
        f.date = "2025-03-15".into();
        f.url = "https://example.org/a".into();
    });

    assert_eq!(
        render_entry(&entry),
        "Doe, Jane. \"Digital Archives.\" *Media History*, vol. 12, no. 3, \
         15 Mar. 2025 [link](https://example.org/a).\n\n"
    );
}

#[test]
fn only_the_first_author_is_inverted() {
    let entry = publication(|f| {
        f.authors = vec![
            Author {
                name: "Jane".into(),
                surname: "Doe".into(),
            },
            Author {
                name: "John".into(),
                surname: "Smith".into(),
            },
            Author::default(),
        ];
        f.title = "Shared Work".into();
    });

    let md = render_entry(&entry);
    assert!(md.starts_with("Doe, Jane, John Smith. "));
}

#[test]
fn book_citation_uses_year_and_open_access_badge() {
    let entry = publication(|f| {
        f.pub_type = digestkit_core::PubType::Book;
        f.authors = vec![Author {
            name: "Manuel".into(),
            surname: "Castells".into(),
        }];
        f.title = "The Network Society".into();
        f.publisher = "Polity".into();
        f.date = "2024-05-01".into();
        f.url = "https://example.org/b".into();
        f.open_access = true;
    });

    assert_eq!(
        render_entry(&entry),
        format!(
            "Castells, Manuel. *The Network Society*. Polity, 2024. \
             [{OPEN_ACCESS_BADGE}](https://example.org/b)\n\n"
        )
    );
}

#[test]
fn doi_urls_render_a_doi_link() {
    let entry = publication(|f| {
        f.title = "Linked Data".into();
        f.url = "https://doi.org/10.1234/xyz".into();
        f.url_text = "ignored".into();
    });

    let md = render_entry(&entry);
    assert!(md.contains(" [DOI](https://doi.org/10.1234/xyz)"));
}

#[test]
fn editorial_tail_and_annotation_follow_the_citation() {
    let mut entry = publication(|f| {
        f.pub_type = digestkit_core::PubType::Book;
        f.title = "Annotated".into();
        f.abstract_text = "First line\nsecond line".into();
    });
    entry.why_it_matters = "Key result".into();
    entry.signal = Some(Signal::Event);

    let md = render_entry(&entry);
    assert!(md.contains("*Key result*\n"));
    assert!(md.contains("**Signal**: event\n"));
    assert!(md.contains(
        "<details markdown=\"1\"><summary>Annotation</summary>\nFirst line  \nsecond line\n</details>\n"
    ));
}

#[test]
fn articles_label_the_details_block_abstract() {
    let entry = publication(|f| {
        f.title = "Paper".into();
        f.abstract_text = "Summary".into();
    });
    assert!(render_entry(&entry).contains("<summary>Abstract</summary>"));
}

#[test]
fn conference_lines_use_hard_breaks() {
    let mut entry = Entry::new(EntryType::Conference);
    if let EntryKind::Conference(fields) = &mut entry.kind {
        fields.title = "DH2025".into();
        fields.theme = "Openness".into();
        fields.date_start = "2025-07-01".into();
        fields.date_end = "2025-07-03".into();
        fields.cfp_deadline = "2025-02-01".into();
        fields.place = "Lisbon, Portugal".into();
        fields.venue = "NOVA".into();
        fields.description = "Two tracks".into();
        fields.url = "https://dh.org".into();
    }

    assert_eq!(
        render_entry(&entry),
        "**DH2025** \"Openness\"  \n\
         Dates: 2025-07-01 to 2025-07-03  \n\
         CfP Deadline: 2025-02-01  \n\
         Place: Lisbon, Portugal, NOVA  \n\
         Description: Two tracks  \n\
         [Website](https://dh.org)  \n\n"
    );
}

#[test]
fn journal_issue_defaults_to_capitalized_link_text() {
    let mut entry = Entry::new(EntryType::JournalIssue);
    if let EntryKind::JournalIssue(fields) = &mut entry.kind {
        fields.journal_name = "Media History".into();
        fields.volume = "31".into();
        fields.issue = "2".into();
        fields.date = "2025".into();
        fields.theme = "Sound".into();
        fields.guest_editor = "A. Editor".into();
        fields.url = "https://example.org/issue".into();
        fields.url_text = String::new();
    }

    assert_eq!(
        render_entry(&entry),
        "*Media History*, Vol. 31, No. 2 (2025): \"Sound\", edited by A. Editor.  \n\
         [Link](https://example.org/issue)\n\n"
    );
}

#[test]
fn call_for_papers_and_media_templates() {
    let mut cfp = Entry::new(EntryType::CallForPapers);
    if let EntryKind::CallForPapers(fields) = &mut cfp.kind {
        fields.title = "Special Issue".into();
        fields.theme = "AI".into();
        fields.deadline = "2025-09-01".into();
        fields.url = "https://cfp.org".into();
    }
    assert_eq!(
        render_entry(&cfp),
        "**Special Issue** - AI  \nDeadline: 2025-09-01  \n[Apply](https://cfp.org)  \n\n"
    );

    let mut media = Entry::new(EntryType::Media);
    if let EntryKind::Media(fields) = &mut media.kind {
        fields.title = "Archive Fever".into();
        fields.media_type = Some(digestkit_core::MediaType::Podcast);
        fields.creator = "J. Host".into();
        fields.url = "https://pod.example".into();
    }
    assert_eq!(
        render_entry(&media),
        "**Archive Fever** (Podcast)  \nBy: J. Host  \n[Watch/Listen](https://pod.example)  \n\n"
    );

    let mut untyped = Entry::new(EntryType::Media);
    if let EntryKind::Media(fields) = &mut untyped.kind {
        fields.title = "Clip".into();
    }
    assert!(render_entry(&untyped).starts_with("**Clip** (Media)"));
}

#[test]
fn text_entries_pass_through_with_a_blank_line() {
    let mut entry = Entry::new(EntryType::Text);
    if let EntryKind::Text(fields) = &mut entry.kind {
        fields.content = "Plain note.".into();
    }
    assert_eq!(render_entry(&entry), "Plain note.\n\n");
}
