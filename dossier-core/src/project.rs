//! Project backup files: JSON encoding and naming

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const BACKUP_PREFIX: &str = "dossier_backup";
pub const JSON_MIME: &str = "application/json";

/// Shown to the user when a project file cannot be parsed
pub const INVALID_PROJECT_MESSAGE: &str = "Invalid project file";

/// Serialize state to pretty JSON (2-space indent)
pub fn to_json<T: Serialize + ?Sized>(state: &T) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(Error::Serialize)
}

/// Parse project file text. Only JSON syntax is checked against `T`;
/// nesting depth is unbounded.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    let invalid = |e: serde_json::Error| Error::InvalidProject(e.into());

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let state = T::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(invalid)?;
    de.end().map_err(invalid)?;

    Ok(state)
}

/// `dossier_backup_DDMMYYYY.json`
pub fn backup_filename(date: NaiveDate) -> String {
    format!("{}_{}.json", BACKUP_PREFIX, date.format("%d%m%Y"))
}
