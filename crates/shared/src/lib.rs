//! Profile data model and profile document loading shared by the viewer and tools.

pub mod document;
pub mod domain;
pub mod error;

pub use document::{load_or_default, LoadedProfile, ProfileSource, PROFILE_FILE_NAME};
pub use domain::{Profile, Section, Skill, TextFragments};
pub use error::{LoadError, SectionParseError};

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod document_tests;

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod domain_tests;
