//! PDF render configuration and the renderer capability
//!
//! `PdfOptions` serializes to the option object `html2pdf.js` accepts, so the
//! browser binding can pass it through unchanged.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Class that forces a page break before an element
pub const PAGE_BREAK_BEFORE: &str = ".page-break-before";

/// Converts an element into a downloaded PDF.
#[allow(async_fn_in_trait)]
pub trait PdfRenderer {
    type Element;
    type Error: Debug;

    async fn render(&self, element: &Self::Element, options: &PdfOptions) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfOptions {
    /// Millimetres: top, left, bottom, right
    pub margin: [f64; 4],
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: PageOptions,
    pub pagebreak: PageBreakOptions,
}

impl PdfOptions {
    /// A4 portrait, print-quality raster, no breaks inside rows or media.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            margin: [10.0, 0.0, 10.0, 0.0],
            filename: filename.into(),
            image: ImageOptions::default(),
            html2canvas: CanvasOptions::default(),
            js_pdf: PageOptions::default(),
            pagebreak: PageBreakOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jpeg,
    Png,
    Webp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub kind: ImageType,
    /// 0.0 to 1.0
    pub quality: f64,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            kind: ImageType::Jpeg,
            quality: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasOptions {
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub letter_rendering: bool,
    pub dpi: u32,
    pub logging: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            scale: 4.0,
            use_cors: true,
            letter_rendering: true,
            dpi: 300,
            logging: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOptions {
    pub unit: String,
    pub format: String,
    pub orientation: Orientation,
    pub compress: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            unit: "mm".to_string(),
            format: "a4".to_string(),
            orientation: Orientation::Portrait,
            compress: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageBreakMode {
    AvoidAll,
    Css,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBreakOptions {
    pub mode: Vec<PageBreakMode>,
    pub before: String,
    pub avoid: Vec<String>,
}

impl Default for PageBreakOptions {
    fn default() -> Self {
        Self {
            mode: vec![PageBreakMode::AvoidAll, PageBreakMode::Css, PageBreakMode::Legacy],
            before: PAGE_BREAK_BEFORE.to_string(),
            avoid: ["tr", "td", "img", "video", "audio"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
