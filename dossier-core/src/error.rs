use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The state value could not be encoded as JSON.
    #[error("failed to serialize project state")]
    Serialize(#[source] serde_json::Error),

    /// Loaded text is not valid JSON.
    #[error("invalid project file")]
    InvalidProject(#[source] anyhow::Error),

    /// The parsed state was refused by the caller's continuation.
    #[error("project state was rejected")]
    Rejected(#[source] anyhow::Error),

    /// The host could not hand the file to the user.
    #[error("failed to download {filename}")]
    Download {
        filename: String,
        #[source]
        source: anyhow::Error,
    },
}
