use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SectionParseError;

/// One of the three text sections a profile can display in the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Experience,
    Education,
}

impl Section {
    /// Display order used by the navigation buttons and the combined view.
    pub const ALL: [Section; 3] = [Section::Summary, Section::Experience, Section::Education];

    pub fn name(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Experience => "Experience",
            Section::Education => "Education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "summary" => Ok(Section::Summary),
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            other => Err(SectionParseError::Unknown(other.to_string())),
        }
    }
}

/// Ordered text fragments joined without a separator for display.
///
/// Documents may give either an array of strings or a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextFragments(Vec<String>);

impl TextFragments {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fragments.into_iter().map(Into::into).collect())
    }

    pub fn fragments(&self) -> &[String] {
        &self.0
    }

    pub fn joined(&self) -> String {
        self.0.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }
}

impl<'de> Deserialize<'de> for TextFragments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(text) => Self(vec![text]),
            Raw::Many(fragments) => Self(fragments),
        })
    }
}

/// A skill entry, stored in documents as `[iconRef, label]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Skill {
    pub icon: String,
    pub label: String,
}

impl Skill {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for Skill {
    fn from((icon, label): (String, String)) -> Self {
        Self { icon, label }
    }
}

impl From<Skill> for (String, String) {
    fn from(value: Skill) -> Self {
        (value.icon, value.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub about: TextFragments,
    pub skills: Vec<Skill>,
    pub summary: TextFragments,
    pub experience: TextFragments,
    pub education: TextFragments,
}

impl Profile {
    /// The profile shown whenever the profile document cannot be used.
    pub fn builtin_default() -> Self {
        Self {
            name: "First Last".to_string(),
            email: "name@email.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            about: TextFragments::new(["I am a person who does stuff."]),
            skills: vec![Skill::new("python.svg", "Python")],
            summary: TextFragments::default(),
            experience: TextFragments::new(["A\n", "B\n\n"]),
            education: TextFragments::new(["BA, School of Stuff\n", "PhD, University of Things"]),
        }
    }

    pub fn section(&self, section: Section) -> &TextFragments {
        match section {
            Section::Summary => &self.summary,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
        }
    }

    pub fn section_text(&self, section: Section) -> String {
        self.section(section).joined()
    }

    pub fn about_text(&self) -> String {
        self.about.joined()
    }

    pub fn window_title(&self) -> String {
        format!("{}'s CV", self.name)
    }
}
