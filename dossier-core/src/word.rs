//! Word-compatible `.doc` export
//!
//! Word opens HTML saved with a `.doc` extension as long as the Office
//! namespaces are declared on the root element.

/// Legacy Word MIME type
pub const WORD_MIME: &str = "application/msword";

/// Written ahead of the envelope so Word detects UTF-8
pub const UTF8_BOM: &str = "\u{feff}";

pub const WORD_HEADER: &str = concat!(
    "<html xmlns:o='urn:schemas-microsoft-com:office:office' ",
    "xmlns:w='urn:schemas-microsoft-com:office:word' ",
    "xmlns='http://www.w3.org/TR/REC-html40'>",
    "<head><meta charset='utf-8'><title>Export HTML To Doc</title>",
    "<style>",
    "table { border-collapse: collapse; width: 100%; } ",
    "td { border: 1px solid black; padding: 4px; font-family: Arial; font-size: 10pt; } ",
    "tr { page-break-inside: avoid; break-inside: avoid; }",
    "</style></head><body>",
);

pub const WORD_FOOTER: &str = "</body></html>";

/// Wrap element markup in the Word envelope
pub fn word_envelope(inner_html: &str) -> String {
    let mut html = String::with_capacity(WORD_HEADER.len() + inner_html.len() + WORD_FOOTER.len());
    html.push_str(WORD_HEADER);
    html.push_str(inner_html);
    html.push_str(WORD_FOOTER);
    html
}
