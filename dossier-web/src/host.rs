//! `DocumentHost` backed by the live browser document

use anyhow::{Context, Result};
use web_sys::{Document, Element, Window};

use dossier_core::{DocumentHost, DownloadFile};

use crate::io;

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().context("No window")?;
        let document = window.document().context("No document")?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DocumentHost for BrowserHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn inner_html(&self, element: &Element) -> String {
        element.inner_html()
    }

    fn download(&self, file: &DownloadFile) -> Result<()> {
        io::download(&self.document, file)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("Alert failed: {:?}", e);
        }
    }
}
