//! The document environment the exporters run against

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub mime: &'static str,
    /// Blob parts, concatenated in order.
    pub parts: Vec<String>,
}

impl DownloadFile {
    pub fn new(filename: impl Into<String>, mime: &'static str, contents: String) -> Self {
        Self {
            filename: filename.into(),
            mime,
            parts: vec![contents],
        }
    }

    /// Prepend a blob part, e.g. a byte order mark.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.parts.insert(0, prefix.to_string());
        self
    }

    /// Full file contents as a single string
    pub fn contents(&self) -> String {
        self.parts.concat()
    }
}

/// Element lookup, file delivery and user notification.
///
/// In the browser this is backed by `document`, `Blob`/`URL` and
/// `window.alert`. Implementations must release any temporary handle they
/// create for a download (object URLs, detached nodes) before `download`
/// returns, on success and on failure.
pub trait DocumentHost {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn inner_html(&self, element: &Self::Element) -> String;

    fn download(&self, file: &DownloadFile) -> anyhow::Result<()>;

    /// Blocking, user-facing notification.
    fn alert(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory host that records every side effect
    #[derive(Default)]
    pub struct RecordingHost {
        pub elements: HashMap<String, String>,
        pub downloads: RefCell<Vec<DownloadFile>>,
        pub alerts: RefCell<Vec<String>>,
        pub fail_downloads: bool,
    }

    impl RecordingHost {
        pub fn with_element(mut self, id: &str, html: &str) -> Self {
            self.elements.insert(id.to_string(), html.to_string());
            self
        }
    }

    impl DocumentHost for RecordingHost {
        type Element = String;

        fn element_by_id(&self, id: &str) -> Option<String> {
            self.elements.get(id).map(|_| id.to_string())
        }

        fn inner_html(&self, element: &String) -> String {
            self.elements.get(element).cloned().unwrap_or_default()
        }

        fn download(&self, file: &DownloadFile) -> anyhow::Result<()> {
            if self.fail_downloads {
                anyhow::bail!("blob construction refused");
            }
            self.downloads.borrow_mut().push(file.clone());
            Ok(())
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_prefix_is_first_part() {
        let file = DownloadFile::new("a.doc", "text/plain", "body".to_string()).with_prefix("\u{feff}");
        assert_eq!(file.parts.len(), 2);
        assert_eq!(file.contents(), "\u{feff}body");
    }
}
