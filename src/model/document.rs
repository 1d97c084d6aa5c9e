//! Document-level types.

use super::{Section, SectionType};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Header fields (name, title, contact lines)
    pub header: Header,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document previously dumped with [`crate::render::to_json`].
    ///
    /// Unknown section type tags load as [`SectionType::Unrecognized`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a section. Sections with an empty title are ignored.
    pub fn add_section(&mut self, section: Section) {
        if section.title.is_empty() {
            log::debug!("Ignoring section without a title");
            return;
        }
        self.sections.push(section);
    }

    /// First section with the given title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of sections with the given type.
    pub fn count_of(&self, section_type: SectionType) -> usize {
        self.sections
            .iter()
            .filter(|s| s.section_type == section_type)
            .count()
    }

    /// Check if neither header fields nor sections were found.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.sections.is_empty()
    }
}

/// Resume header.
///
/// `specialization` is only meaningful together with `title`; the parser
/// never sets one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Person's name (from the `#` heading)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Professional title (from the bold line under the name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Specialization following the title's `|` separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,

    /// Contact lines in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<String>,
}

impl Header {
    /// Set the title and its optional specialization together.
    pub fn set_title(&mut self, title: impl Into<String>, specialization: Option<String>) {
        self.title = Some(title.into());
        self.specialization = specialization;
    }

    /// Specialization, only when a title is present.
    pub fn specialization(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and(self.specialization.as_deref())
    }

    /// Check if no header field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.specialization.is_none()
            && self.contact.is_empty()
    }
}
