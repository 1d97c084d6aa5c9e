//! Section type classification.
//!
//! A section's layout is decided from its content lines alone, never from
//! its title. Rules are tested in a fixed precedence order and the first
//! one that holds wins:
//!
//! 1. timeline: any line is a sub-entry marker
//! 2. aligned list: at least half of the non-blank lines are `**Label:** value`
//! 3. description list: at least half are `**Term** - description`
//! 4. bullet list: at least half are dash bullets
//! 5. paragraph: everything else, including empty content

use crate::model::SectionType;
use crate::syntax;

/// Classify a section from its content lines.
pub fn classify_section<S: AsRef<str>>(lines: &[S]) -> SectionType {
    let non_blank: Vec<&str> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .collect();

    if non_blank.is_empty() {
        return SectionType::Paragraph;
    }

    if non_blank.iter().any(|line| syntax::is_sub_entry_marker(line)) {
        return SectionType::Timeline;
    }
    if at_least_half(&non_blank, |line| syntax::aligned_pair(line).is_some()) {
        return SectionType::AlignedList;
    }
    if at_least_half(&non_blank, |line| syntax::description_pair(line).is_some()) {
        return SectionType::DescriptionList;
    }
    if at_least_half(&non_blank, |line| syntax::bullet_text(line).is_some()) {
        return SectionType::BulletList;
    }

    SectionType::Paragraph
}

fn at_least_half(lines: &[&str], predicate: impl Fn(&str) -> bool) -> bool {
    let matching = lines.iter().filter(|line| predicate(line)).count();
    matching * 2 >= lines.len()
}
