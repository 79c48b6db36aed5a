//! Dossier Core - Platform-agnostic document export and project backups
//!
//! This crate holds the logic behind the editor's export menu: the Word
//! envelope, the PDF render configuration, and JSON project save/load. The
//! browser itself is reached only through the [`DocumentHost`] and
//! [`PdfRenderer`] traits, so the same code runs in WASM and in native tests.

pub mod error;
pub mod export;
pub mod host;
pub mod pdf;
pub mod project;
pub mod word;

pub use error::{Error, Result};
pub use export::{
    export_to_pdf, export_to_pdf_with, export_to_word, load_project, load_project_with, save_project,
    save_project_json, ExportOutcome,
};
pub use host::{DocumentHost, DownloadFile};
pub use pdf::{PdfOptions, PdfRenderer};
pub use project::{backup_filename, from_json, to_json, BACKUP_PREFIX, INVALID_PROJECT_MESSAGE};
pub use word::{word_envelope, WORD_MIME};
