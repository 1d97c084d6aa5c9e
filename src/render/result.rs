//! Rendering result with statistics and warnings.

use crate::model::SectionType;
use serde::{Deserialize, Serialize};

/// Result of rendering a resume, including statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML document
    pub html: String,

    /// Rendering statistics
    pub stats: RenderStats,

    /// Non-fatal problems met while rendering
    pub warnings: Vec<String>,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(html: String, stats: RenderStats, warnings: Vec<String>) -> Self {
        Self {
            html,
            stats,
            warnings,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(html: String) -> Self {
        Self {
            html,
            stats: RenderStats::default(),
            warnings: Vec::new(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.html.len()
    }

    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Sections rendered
    pub section_count: u32,

    /// Sections rendered per layout
    pub timeline_sections: u32,
    pub aligned_list_sections: u32,
    pub description_list_sections: u32,
    pub bullet_list_sections: u32,
    pub paragraph_sections: u32,
    pub unrecognized_sections: u32,

    /// Sections rendered through the Education override
    pub education_overrides: u32,

    /// Timeline entries emitted
    pub timeline_entries: u32,

    /// `<li>` items emitted (bullet lists and timeline bullets)
    pub list_item_count: u32,

    /// Label and description rows emitted
    pub row_count: u32,

    /// Non-blank lines that matched nothing in their section's layout
    pub skipped_lines: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a section of the given type.
    pub fn add_section(&mut self, section_type: SectionType) {
        self.section_count += 1;
        let counter = match section_type {
            SectionType::Timeline => &mut self.timeline_sections,
            SectionType::AlignedList => &mut self.aligned_list_sections,
            SectionType::DescriptionList => &mut self.description_list_sections,
            SectionType::BulletList => &mut self.bullet_list_sections,
            SectionType::Paragraph => &mut self.paragraph_sections,
            SectionType::Unrecognized => &mut self.unrecognized_sections,
        };
        *counter += 1;
    }

    /// Increment Education override count.
    pub fn add_education_override(&mut self) {
        self.education_overrides += 1;
    }

    /// Increment timeline entry count.
    pub fn add_timeline_entry(&mut self) {
        self.timeline_entries += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment row count.
    pub fn add_row(&mut self) {
        self.row_count += 1;
    }

    /// Add skipped lines.
    pub fn add_skipped(&mut self, count: usize) {
        self.skipped_lines += count as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.timeline_sections += other.timeline_sections;
        self.aligned_list_sections += other.aligned_list_sections;
        self.description_list_sections += other.description_list_sections;
        self.bullet_list_sections += other.bullet_list_sections;
        self.paragraph_sections += other.paragraph_sections;
        self.unrecognized_sections += other.unrecognized_sections;
        self.education_overrides += other.education_overrides;
        self.timeline_entries += other.timeline_entries;
        self.list_item_count += other.list_item_count;
        self.row_count += other.row_count;
        self.skipped_lines += other.skipped_lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_counts_per_type() {
        let mut stats = RenderStats::new();
        stats.add_section(SectionType::Timeline);
        stats.add_section(SectionType::Paragraph);
        stats.add_section(SectionType::Paragraph);

        assert_eq!(stats.section_count, 3);
        assert_eq!(stats.timeline_sections, 1);
        assert_eq!(stats.paragraph_sections, 2);
    }

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.row_count = 5;
        stats1.list_item_count = 2;

        let stats2 = RenderStats {
            row_count: 3,
            list_item_count: 1,
            skipped_lines: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.row_count, 8);
        assert_eq!(stats1.list_item_count, 3);
        assert_eq!(stats1.skipped_lines, 4);
    }

    #[test]
    fn test_render_result_content_only() {
        let result = RenderResult::content_only("<html></html>".to_string());
        assert_eq!(result.content_len(), 13);
        assert!(!result.has_warnings());
    }
}
