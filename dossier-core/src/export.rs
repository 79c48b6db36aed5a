//! The four export menu operations, written against [`DocumentHost`]

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::host::{DocumentHost, DownloadFile};
use crate::pdf::{PdfOptions, PdfRenderer};
use crate::project::{self, INVALID_PROJECT_MESSAGE, JSON_MIME};
use crate::word::{self, UTF8_BOM, WORD_MIME};

/// What an export did. A missing element is not an error: nothing is
/// written and nothing is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported,
    ElementMissing,
    /// The renderer failed; the failure has been logged.
    RenderFailed,
}

/// Render an element to PDF with the default A4 configuration
pub async fn export_to_pdf<H, R>(host: &H, renderer: &R, element_id: &str, filename: &str) -> ExportOutcome
where
    H: DocumentHost,
    R: PdfRenderer<Element = H::Element>,
{
    export_to_pdf_with(host, renderer, element_id, &PdfOptions::new(filename)).await
}

/// Render an element to PDF with caller-supplied options
pub async fn export_to_pdf_with<H, R>(
    host: &H,
    renderer: &R,
    element_id: &str,
    options: &PdfOptions,
) -> ExportOutcome
where
    H: DocumentHost,
    R: PdfRenderer<Element = H::Element>,
{
    let Some(element) = host.element_by_id(element_id) else {
        debug!(element_id, "PDF export skipped, element not found");
        return ExportOutcome::ElementMissing;
    };

    match renderer.render(&element, options).await {
        Ok(()) => {
            info!(filename = %options.filename, "PDF exported");
            ExportOutcome::Exported
        }
        Err(e) => {
            error!(error = ?e, "PDF generation failed");
            ExportOutcome::RenderFailed
        }
    }
}

/// Download an element's markup as a Word-compatible `.doc`
pub fn export_to_word<H: DocumentHost>(host: &H, element_id: &str, filename: &str) -> Result<ExportOutcome> {
    let Some(element) = host.element_by_id(element_id) else {
        debug!(element_id, "Word export skipped, element not found");
        return Ok(ExportOutcome::ElementMissing);
    };

    let html = word::word_envelope(&host.inner_html(&element));
    let file = DownloadFile::new(filename, WORD_MIME, html).with_prefix(UTF8_BOM);
    deliver(host, &file)?;

    Ok(ExportOutcome::Exported)
}

/// Download `state` as `dossier_backup_DDMMYYYY.json`, returning the filename
pub fn save_project<H, T>(host: &H, state: &T, date: NaiveDate) -> Result<String>
where
    H: DocumentHost,
    T: Serialize + ?Sized,
{
    save_project_json(host, project::to_json(state)?, date)
}

/// Download already-serialized state text as the dated backup file
pub fn save_project_json<H: DocumentHost>(host: &H, json: String, date: NaiveDate) -> Result<String> {
    let file = DownloadFile::new(project::backup_filename(date), JSON_MIME, json);
    deliver(host, &file)?;

    Ok(file.filename)
}

/// Parse project file text and hand the state to `on_loaded`.
///
/// Malformed JSON alerts the user once and drops `on_loaded` uncalled. The
/// returned error is for logging only; the user has already been told.
pub fn load_project<H, T, F>(host: &H, text: &str, on_loaded: F) -> Result<()>
where
    H: DocumentHost,
    T: DeserializeOwned,
    F: FnOnce(T),
{
    load_project_with(host, text, project::from_json, |state| {
        on_loaded(state);
        Ok(())
    })
}

/// Like [`load_project`], with a caller-supplied parser and a fallible
/// continuation. A parse error or an `Err` from `on_loaded` both raise the
/// single "Invalid project file" alert.
pub fn load_project_with<H, T, P, F>(host: &H, text: &str, parse: P, on_loaded: F) -> Result<()>
where
    H: DocumentHost,
    P: FnOnce(&str) -> Result<T>,
    F: FnOnce(T) -> Result<()>,
{
    match parse(text).and_then(on_loaded) {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(error = %e, "Rejected project file");
            host.alert(INVALID_PROJECT_MESSAGE);
            Err(e)
        }
    }
}

fn deliver<H: DocumentHost>(host: &H, file: &DownloadFile) -> Result<()> {
    host.download(file).map_err(|source| Error::Download {
        filename: file.filename.clone(),
        source,
    })?;
    info!(filename = %file.filename, mime = file.mime, "File downloaded");
    Ok(())
}
