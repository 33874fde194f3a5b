//! Profile document loading with an explicit fallback step.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::Profile, error::LoadError};

pub const PROFILE_FILE_NAME: &str = "profile.json";

impl Profile {
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

/// Where the profile in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Document(PathBuf),
    BuiltinDefault,
}

#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub source: ProfileSource,
}

impl LoadedProfile {
    /// Picks the loaded document, or the built-in default when loading failed.
    ///
    /// The default is used as-is; nothing from a failed document survives.
    pub fn select(path: &Path, loaded: Result<Profile, LoadError>) -> Self {
        match loaded {
            Ok(profile) => Self {
                profile,
                source: ProfileSource::Document(path.to_path_buf()),
            },
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "using built-in default profile");
                Self {
                    profile: Profile::builtin_default(),
                    source: ProfileSource::BuiltinDefault,
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ProfileSource::BuiltinDefault
    }
}

pub fn load_or_default(path: &Path) -> LoadedProfile {
    LoadedProfile::select(path, Profile::load(path))
}
