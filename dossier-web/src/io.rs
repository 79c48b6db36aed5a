//! Browser-based file I/O using Web APIs

use anyhow::{anyhow, Context, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, File, HtmlAnchorElement, Node, Url};

use dossier_core::DownloadFile;

/// Wrap a thrown JS value so it can carry anyhow context
pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{:?}", value),
    }
}

/// Object URL that is revoked when dropped
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self> {
        let url = Url::create_object_url_with_blob(blob)
            .map_err(js_error)
            .context("Failed to create object URL")?;
        Ok(Self(url))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            tracing::warn!("Failed to revoke object URL {}: {:?}", self.0, e);
        }
    }
}

/// Child node that is detached from its parent when dropped
struct Attached<'a> {
    parent: &'a Node,
    child: &'a Node,
}

impl<'a> Attached<'a> {
    fn new(parent: &'a Node, child: &'a Node) -> Result<Self> {
        parent
            .append_child(child)
            .map_err(js_error)
            .context("Failed to attach download link")?;
        Ok(Self { parent, child })
    }
}

impl Drop for Attached<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.parent.remove_child(self.child) {
            tracing::warn!("Failed to detach download link: {:?}", e);
        }
    }
}

/// Build a blob from the file's parts
pub fn to_blob(file: &DownloadFile) -> Result<Blob> {
    let blob_parts = js_sys::Array::new();
    for part in &file.parts {
        blob_parts.push(&JsValue::from_str(part));
    }

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(file.mime);

    Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)
        .map_err(js_error)
        .with_context(|| format!("Failed to create blob for {}", file.filename))
}

/// Trigger a browser download through a temporary anchor element.
///
/// The object URL is revoked and the anchor removed on every path out.
pub fn download(document: &Document, file: &DownloadFile) -> Result<()> {
    let blob = to_blob(file)?;
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("Created element is not an anchor"))?;

    anchor.set_href(&url.0);
    anchor.set_download(&file.filename);

    // Some browsers ignore clicks on detached anchors
    let body = document.body();
    let _attached = body
        .as_ref()
        .map(|body| Attached::new(body, &anchor))
        .transpose()?;
    anchor.click();

    Ok(())
}

/// Read an uploaded file's full text
pub async fn read_text(file: &File) -> Result<String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(js_error)
        .with_context(|| format!("Failed to read {}", file.name()))?;

    text.as_string()
        .with_context(|| format!("{} did not produce text", file.name()))
}
