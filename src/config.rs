// ── Demo settings ─────────────────────────────────────────────────────────────
//
// Optional JSON file read by the `inhibit-sleep` binary.  Every field has a
// default, so `{}` and a missing file both give a usable configuration.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Label used when neither the settings file nor `--name` supplies one.
pub const DEFAULT_IDENTIFIER: &str = "inhibit-sleep demo";

/// Key the user types to end the demo's inhibition.
pub const DEFAULT_RELEASE_KEY: char = 'c';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label attached to the macOS power assertion.
    pub identifier: String,
    /// Case-insensitive key that ends the inhibition.
    pub release_key: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_IDENTIFIER.to_owned(),
            release_key: DEFAULT_RELEASE_KEY,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from `path`.  A missing or malformed file is an error;
    /// callers that want defaults should not pass a path.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
