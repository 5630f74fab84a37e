use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::model::Profile;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a profile document from JSON text.
pub fn parse_profile(json: &str) -> Result<Profile, ProfileError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a profile document from a JSON file.
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_profile(&json)
}

/// Lookup table from a display name (company or technology) to an icon path,
/// matched case-insensitively on the exact name.
#[derive(Debug, Clone, Default)]
pub struct IconMap {
    entries: HashMap<String, String>,
}

impl IconMap {
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            entries: raw
                .into_iter()
                .map(|(name, path)| (name.to_lowercase(), path))
                .collect(),
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
