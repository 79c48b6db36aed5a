//! Binding to the page's global `html2pdf.js`

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

use dossier_core::{PdfOptions, PdfRenderer};

#[wasm_bindgen]
extern "C" {
    /// Chainable worker returned by `html2pdf()`.
    pub type Html2PdfWorker;

    #[wasm_bindgen(js_name = html2pdf, catch)]
    fn html2pdf() -> Result<Html2PdfWorker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn from_element(this: &Html2PdfWorker, element: &Element) -> Result<Html2PdfWorker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = set)]
    fn set_options(this: &Html2PdfWorker, options: &JsValue) -> Result<Html2PdfWorker, JsValue>;

    /// Thenable that settles once the file has been handed to the browser.
    #[wasm_bindgen(method, catch)]
    fn save(this: &Html2PdfWorker) -> Result<JsValue, JsValue>;
}

/// Renders through `html2pdf.js`, which must already be loaded on the page
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2Pdf;

impl PdfRenderer for Html2Pdf {
    type Element = Element;
    type Error = JsValue;

    async fn render(&self, element: &Element, options: &PdfOptions) -> Result<(), JsValue> {
        let json = serde_json::to_string(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let options = js_sys::JSON::parse(&json)?;

        let saved = html2pdf()?.from_element(element)?.set_options(&options)?.save()?;
        JsFuture::from(Promise::resolve(&saved)).await?;

        Ok(())
    }
}
