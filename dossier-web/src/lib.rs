//! Dossier Web - WebAssembly bindings for document export and project backups
//!
//! Exposes `exportToPdf`, `exportToWord`, `saveProject` and `loadProject` to
//! the editor's JavaScript, backed by the live document and `html2pdf.js`.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use web_sys::File;

use dossier_core::{Error, ExportOutcome};

pub mod host;
pub mod html2pdf;
pub mod io;

pub use host::BrowserHost;
pub use html2pdf::Html2Pdf;

/// Initialize panic reporting and console logging
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_tracing();

    tracing::debug!("Dossier WASM initialized");

    Ok(())
}

fn init_tracing() {
    use tracing::subscriber::set_global_default;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let reg = Registry::default().with(wasm_layer);

    // Already installed when the module is initialized twice
    let _ = set_global_default(reg);
}

fn to_js(e: impl Display) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn browser_host() -> Result<BrowserHost, JsValue> {
    BrowserHost::new().map_err(to_js)
}

async fn read_project_text(file: &File) -> anyhow::Result<String> {
    io::read_text(file).await.inspect_err(|e| {
        tracing::error!("Project file could not be read: {:#}", e);
    })
}

/// Read a project file and hand the parsed state to `on_loaded`.
///
/// Unreadable files are logged only. Malformed JSON alerts the user and
/// `on_loaded` is never called.
pub async fn load_project_file<T, F>(host: &BrowserHost, file: &File, on_loaded: F) -> anyhow::Result<()>
where
    T: DeserializeOwned,
    F: FnOnce(T),
{
    let text = read_project_text(file).await?;
    dossier_core::load_project(host, &text, on_loaded)?;
    Ok(())
}

/// Read a project file with the browser's own `JSON.parse` and call
/// `callback(state)`.
///
/// Anything `JSON.parse` accepts is delivered, including values serde
/// cannot represent (lone surrogates, numbers beyond `f64`). A parse error
/// or a throwing callback alerts the user once.
pub async fn load_project_value(host: &BrowserHost, file: &File, callback: &js_sys::Function) -> anyhow::Result<()> {
    let text = read_project_text(file).await?;

    let parse = |text: &str| js_sys::JSON::parse(text).map_err(|e| Error::InvalidProject(io::js_error(e)));
    let deliver = |state: JsValue| {
        callback
            .call1(&JsValue::NULL, &state)
            .map(drop)
            .map_err(|e| Error::Rejected(io::js_error(e)))
    };

    dossier_core::load_project_with(host, &text, parse, deliver)?;
    Ok(())
}

/// Render an element to an A4 PDF. Missing elements and renderer errors
/// are logged, never thrown.
#[wasm_bindgen(js_name = exportToPdf)]
pub async fn export_to_pdf(element_id: String, filename: String) -> Result<(), JsValue> {
    let host = browser_host()?;
    dossier_core::export_to_pdf(&host, &Html2Pdf, &element_id, &filename).await;
    Ok(())
}

/// Download an element's markup as a `.doc`. Returns whether a file was
/// produced.
#[wasm_bindgen(js_name = exportToWord)]
pub fn export_to_word(element_id: &str, filename: &str) -> Result<bool, JsValue> {
    let host = browser_host()?;
    let outcome = dossier_core::export_to_word(&host, element_id, filename).map_err(to_js)?;
    Ok(outcome == ExportOutcome::Exported)
}

/// Download the state as `dossier_backup_DDMMYYYY.json` and return the
/// filename. Throws if `JSON.stringify` does (e.g. cyclic state).
#[wasm_bindgen(js_name = saveProject)]
pub fn save_project(state: &JsValue) -> Result<String, JsValue> {
    let json = js_sys::JSON::stringify_with_replacer_and_space(state, &JsValue::NULL, &JsValue::from_f64(2.0))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("Project state is not serializable"))?;

    let host = browser_host()?;
    let today = chrono::Local::now().date_naive();
    dossier_core::save_project_json(&host, json, today).map_err(to_js)
}

/// Read `file` in the background and call `callback(state)` once parsed
#[wasm_bindgen(js_name = loadProject)]
pub fn load_project(file: File, callback: js_sys::Function) -> Result<(), JsValue> {
    let host = browser_host()?;

    wasm_bindgen_futures::spawn_local(async move {
        // Failures are already logged and, for bad JSON, alerted
        let _ = load_project_value(&host, &file, &callback).await;
    });

    Ok(())
}
