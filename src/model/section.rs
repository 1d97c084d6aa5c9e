//! Section types.

use super::{DescriptionItem, ExperienceEntry, LabeledPair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A titled block of resume content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title (text after `##`)
    pub title: String,

    /// Layout classification decided when the section was closed
    #[serde(rename = "type")]
    pub section_type: SectionType,

    /// Raw content with line breaks kept and blank runs collapsed
    pub content: String,
}

impl Section {
    /// Create a new section.
    pub fn new(
        title: impl Into<String>,
        section_type: SectionType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            section_type,
            content: content.into(),
        }
    }

    /// Content lines as stored (untrimmed).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Timeline entries derived from the content.
    pub fn experience_entries(&self) -> Vec<ExperienceEntry> {
        ExperienceEntry::parse_all(&self.content)
    }

    /// `**Label:** value` rows derived from the content.
    pub fn labeled_pairs(&self) -> Vec<LabeledPair> {
        LabeledPair::extract(&self.content)
    }

    /// `**Term** - description` rows derived from the content.
    pub fn description_items(&self) -> Vec<DescriptionItem> {
        DescriptionItem::extract(&self.content)
    }
}

/// Layout classification of a section.
///
/// The classifier only ever produces the first five variants.
/// `Unrecognized` is what an unknown tag deserializes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// Repeated `### Company | Role` entries
    Timeline,
    /// Repeated `**Label:** value` rows
    AlignedList,
    /// Repeated `**Term** - description` rows
    DescriptionList,
    /// Dash bullets
    BulletList,
    /// Free text (fallback)
    #[default]
    Paragraph,
    /// Tag not known to this version
    #[serde(other)]
    Unrecognized,
}

impl SectionType {
    /// All tags the classifier can produce, in precedence order.
    pub const CLASSIFIED: [SectionType; 5] = [
        SectionType::Timeline,
        SectionType::AlignedList,
        SectionType::DescriptionList,
        SectionType::BulletList,
        SectionType::Paragraph,
    ];

    /// Tag name as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Timeline => "timeline",
            SectionType::AlignedList => "aligned_list",
            SectionType::DescriptionList => "description_list",
            SectionType::BulletList => "bullet_list",
            SectionType::Paragraph => "paragraph",
            SectionType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
