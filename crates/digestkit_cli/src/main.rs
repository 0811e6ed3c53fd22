//! Command-line front end for the digest editor core.
//!
//! # Responsibility
//! - Load drafts, import CSL-JSON references, and export markdown from
//!   the command line.
//! - Keep output deterministic for quick local sanity checks.

use digestkit_core::{
    export_markdown, import_publications, load_draft_into, parse_csl, parse_document, save_draft,
    DocumentStore, DraftStorage, StorageError, DRAFT_FILENAME,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Directory-backed draft storage: one fixed blob per directory.
struct FileDraftStorage {
    dir: PathBuf,
}

impl FileDraftStorage {
    fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DraftStorage for FileDraftStorage {
    fn save(&mut self, blob: &str) -> Result<String, StorageError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        let path = self.dir.join(DRAFT_FILENAME);
        std::fs::write(&path, blob).map_err(|err| StorageError::Backend(err.to_string()))?;
        Ok(path.display().to_string())
    }

    fn load(&mut self, id: &str) -> Result<String, StorageError> {
        if id.trim().is_empty() {
            return Err(StorageError::MissingIdentifier);
        }
        let path = self.dir.join(id);
        if !path.exists() {
            return Err(StorageError::MissingContent(id.to_string()));
        }
        std::fs::read_to_string(&path).map_err(|err| StorageError::Backend(err.to_string()))
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("export") if args.len() == 3 => cmd_export(&args[1], &args[2]),
        Some("import-csl") if args.len() == 3 => cmd_import_csl(&args[1], &args[2]),
        Some("draft-save") if args.len() == 3 => cmd_draft_save(&args[1], &args[2]),
        Some("draft-load") if args.len() == 3 => cmd_draft_load(&args[1], &args[2]),
        Some("version") => {
            println!("digestkit_core version={}", digestkit_core::core_version());
            Ok(())
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

const USAGE: &str = "usage: digestkit <command>
  export <draft.json> <out.md>       render the digest markdown
  import-csl <draft.json> <refs.json> import CSL-JSON publications
  draft-save <draft.json> <dir>      persist a draft into a directory
  draft-load <dir> <out.json>        restore the persisted draft
  version                            print the core version";

fn cmd_export(draft_path: &str, out_path: &str) -> Result<(), String> {
    let json = read_file(draft_path)?;
    let document = parse_document(&json).map_err(|err| err.to_string())?;
    let markdown = export_markdown(&document, None);
    std::fs::write(out_path, markdown)
        .map_err(|err| format!("failed to write `{out_path}`: {err}"))?;
    println!("exported {out_path}");
    Ok(())
}

fn cmd_import_csl(draft_path: &str, refs_path: &str) -> Result<(), String> {
    let draft_json = read_file(draft_path)?;
    let document = parse_document(&draft_json).map_err(|err| err.to_string())?;
    let mut store = DocumentStore::with_document(document);

    let refs_json = read_file(refs_path)?;
    let records = parse_csl(&refs_json).map_err(|err| err.to_string())?;
    let report = import_publications(&mut store, &records);
    println!("{}", report.summary());

    let updated =
        digestkit_core::serialize_document(store.document()).map_err(|err| err.to_string())?;
    std::fs::write(draft_path, updated)
        .map_err(|err| format!("failed to write `{draft_path}`: {err}"))
}

fn cmd_draft_save(draft_path: &str, dir: &str) -> Result<(), String> {
    let json = read_file(draft_path)?;
    let document = parse_document(&json).map_err(|err| err.to_string())?;
    let mut storage = FileDraftStorage::new(dir);
    let id = save_draft(&mut storage, &document).map_err(|err| err.to_string())?;
    println!("saved {id}");
    Ok(())
}

fn cmd_draft_load(dir: &str, out_path: &str) -> Result<(), String> {
    let mut storage = FileDraftStorage::new(dir);
    let mut store = DocumentStore::new();
    load_draft_into(&mut storage, DRAFT_FILENAME, &mut store).map_err(|err| err.to_string())?;
    let json =
        digestkit_core::serialize_document(store.document()).map_err(|err| err.to_string())?;
    std::fs::write(out_path, json)
        .map_err(|err| format!("failed to write `{out_path}`: {err}"))?;
    println!("loaded into {out_path}");
    Ok(())
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))
}
