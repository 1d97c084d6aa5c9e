//! Structured rows derived from a section's raw content.

use crate::syntax;
use serde::Serialize;

/// One entry of a timeline section.
///
/// ```text
/// ### Acme | Engineer
/// _2020 - 2021_
/// - Shipped X
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    /// Text before the `|` separator
    pub company: String,
    /// Text after the `|` separator, empty if there is none
    pub role: String,
    /// Inner text of an `_..._` line right after the header, or empty
    pub date: String,
    /// Dash bullets with the marker stripped
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    /// Split timeline content at sub-entry markers and parse every fragment.
    ///
    /// Blank fragments and fragments without a company are skipped.
    pub fn parse_all(content: &str) -> Vec<Self> {
        split_fragments(content)
            .into_iter()
            .filter_map(|fragment| Self::parse(&fragment))
            .collect()
    }

    /// Parse a single fragment; `None` if no company can be extracted.
    pub fn parse(fragment: &[&str]) -> Option<Self> {
        let mut lines = fragment
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .peekable();

        let header = lines.next()?.trim_start_matches('#').trim();
        let (company, role) = match header.split_once('|') {
            Some((company, role)) => (company.trim(), role.trim()),
            None => (header, ""),
        };
        if company.is_empty() {
            log::debug!("Skipping timeline entry without a company");
            return None;
        }

        let date = match lines.peek().and_then(|line| syntax::emphasis_wrapped(*line)) {
            Some(date) => {
                lines.next();
                date.to_string()
            }
            None => String::new(),
        };

        let bullets = lines
            .filter_map(syntax::bullet_text)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            company: company.to_string(),
            role: role.to_string(),
            date,
            bullets,
        })
    }
}

/// Group content lines into fragments, each starting at a marker line.
/// Lines before the first marker form their own fragment.
fn split_fragments(content: &str) -> Vec<Vec<&str>> {
    let mut fragments: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if syntax::is_sub_entry_marker(line) && !current.is_empty() {
            fragments.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    fragments.push(current);

    fragments.retain(|lines| lines.iter().any(|line| !line.trim().is_empty()));
    fragments
}

/// A `**Label:** value` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledPair {
    /// Category label (without colon)
    pub label: String,
    /// Value text after the label
    pub value: String,
}

impl LabeledPair {
    /// Collect all matching rows; other lines are skipped.
    pub fn extract(content: &str) -> Vec<Self> {
        content
            .lines()
            .filter_map(syntax::aligned_pair)
            .map(|(label, value)| Self {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}

/// A `**Term** - description` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionItem {
    /// Bold term
    pub term: String,
    /// Text after the dash, may be empty
    pub description: String,
}

impl DescriptionItem {
    /// Collect all matching rows; other lines are skipped.
    pub fn extract(content: &str) -> Vec<Self> {
        content
            .lines()
            .filter_map(syntax::description_pair)
            .map(|(term, description)| Self {
                term: term.to_string(),
                description: description.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let entries =
            ExperienceEntry::parse_all("### Acme | Engineer\n_2020 - 2021_\n- Shipped X\n- Fixed Y");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            ExperienceEntry {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                date: "2020 - 2021".to_string(),
                bullets: vec!["Shipped X".to_string(), "Fixed Y".to_string()],
            }
        );
    }

    #[test]
    fn test_entry_without_role_or_date() {
        let entries = ExperienceEntry::parse_all("### Freelance\n- Built sites");
        assert_eq!(entries[0].company, "Freelance");
        assert_eq!(entries[0].role, "");
        assert_eq!(entries[0].date, "");
        assert_eq!(entries[0].bullets, vec!["Built sites"]);
    }

    #[test]
    fn test_multiple_entries_keep_order() {
        let content = "### Alpha | Lead\n_2022_\n- One\n\n### Beta | Dev\n_2019_\n- Two";
        let entries = ExperienceEntry::parse_all(content);
        let companies: Vec<_> = entries.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Alpha", "Beta"]);
        assert_eq!(entries[1].date, "2019");
    }

    #[test]
    fn test_entry_with_empty_company_is_skipped() {
        let entries = ExperienceEntry::parse_all("### | Ghost\n- Nothing\n### Real | Job");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Real");
    }

    #[test]
    fn test_non_bullet_lines_in_entry_ignored() {
        let entries = ExperienceEntry::parse_all("### Acme\nSome prose\n- Kept");
        assert_eq!(entries[0].bullets, vec!["Kept"]);
        assert_eq!(entries[0].date, "");
    }

    #[test]
    fn test_labeled_pairs_skip_other_lines() {
        let pairs = LabeledPair::extract("**Skills:** Go, Rust\nstray line\n**Tools:** CLI");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].label, "Skills");
        assert_eq!(pairs[1].value, "CLI");
    }

    #[test]
    fn test_description_items() {
        let items = DescriptionItem::extract("**BSc** - State University\n**Cert** -\nnoise");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "State University");
        assert_eq!(items[1].description, "");
    }
}
