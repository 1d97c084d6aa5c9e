//! Line recognition rules.
//!
//! Every non-blank line is offered to [`LineRule::CHAIN`] in order. The
//! first rule whose guard matches consumes the line; lines no rule accepts
//! are dropped.

use super::classify::classify_section;
use crate::model::{Header, Section};
use crate::syntax;

/// Section that is still collecting lines.
#[derive(Debug, Clone, Default)]
pub struct OpenSection {
    /// Title from the `##` line
    pub title: String,
    /// Content lines; blank runs are stored as a single `""`
    pub lines: Vec<String>,
}

/// State threaded through one parse run.
#[derive(Debug, Default)]
pub struct ParseState {
    /// Header fields seen so far
    pub header: Header,
    /// Section currently collecting content
    pub open: Option<OpenSection>,
    /// Finalized sections in source order
    pub sections: Vec<Section>,
}

impl ParseState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a blank line in the open section, collapsing runs.
    pub fn push_blank(&mut self) {
        if let Some(open) = self.open.as_mut() {
            if open.lines.last().is_some_and(|last| !last.is_empty()) {
                open.lines.push(String::new());
            }
        }
    }

    /// Close the open section, classify it and record it if it has a title.
    pub fn close_section(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };

        let mut lines = open.lines;
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        let leading = lines
            .iter()
            .take_while(|line| line.trim().is_empty())
            .count();
        lines.drain(..leading);

        if open.title.is_empty() {
            log::debug!("Dropping section without a title ({} lines)", lines.len());
            return;
        }

        let section_type = classify_section(&lines);
        log::debug!("Section '{}' classified as {}", open.title, section_type);
        self.sections
            .push(Section::new(open.title, section_type, lines.join("\n")));
    }

    /// Close anything still open and hand back the results.
    pub fn finish(mut self) -> (Header, Vec<Section>) {
        self.close_section();
        (self.header, self.sections)
    }
}

/// One step of the line recognition chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    /// `# Name`, only while no name is recorded
    Name,
    /// `**Title** | Specialization`, only after the name and before a title
    Title,
    /// `## Section`
    SectionHeader,
    /// Any line after name and title while no section is open
    Contact,
    /// Any line while a section is open
    SectionContent,
}

impl LineRule {
    /// Rules in evaluation order.
    pub const CHAIN: [LineRule; 5] = [
        LineRule::Name,
        LineRule::Title,
        LineRule::SectionHeader,
        LineRule::Contact,
        LineRule::SectionContent,
    ];

    /// Check whether this rule accepts the line in the given state.
    pub fn matches(self, state: &ParseState, line: &str) -> bool {
        match self {
            LineRule::Name => {
                state.header.name.is_none() && syntax::heading_name(line).is_some()
            }
            LineRule::Title => {
                state.header.name.is_some()
                    && state.header.title.is_none()
                    && syntax::title_line(line).is_some()
            }
            LineRule::SectionHeader => syntax::section_header(line).is_some(),
            LineRule::Contact => {
                state.header.name.is_some()
                    && state.header.title.is_some()
                    && state.open.is_none()
                    && !line.trim().is_empty()
            }
            LineRule::SectionContent => state.open.is_some(),
        }
    }

    /// Consume the line. Only called after [`LineRule::matches`] returned true.
    pub fn apply(self, state: &mut ParseState, line: &str) {
        match self {
            LineRule::Name => {
                state.close_section();
                state.header.name = syntax::heading_name(line).map(str::to_string);
            }
            LineRule::Title => {
                if let Some(parsed) = syntax::title_line(line) {
                    state.header.set_title(
                        parsed.title,
                        parsed.specialization.map(str::to_string),
                    );
                }
            }
            LineRule::SectionHeader => {
                state.close_section();
                let title = syntax::section_header(line).unwrap_or_default();
                state.open = Some(OpenSection {
                    title: title.to_string(),
                    lines: Vec::new(),
                });
            }
            LineRule::Contact => {
                state.header.contact.push(line.trim().to_string());
            }
            LineRule::SectionContent => {
                if let Some(open) = state.open.as_mut() {
                    open.lines.push(line.to_string());
                }
            }
        }
    }

    /// Offer a non-blank line to the chain. Returns the rule that consumed it.
    pub fn dispatch(state: &mut ParseState, line: &str) -> Option<LineRule> {
        let rule = Self::CHAIN
            .into_iter()
            .find(|rule| rule.matches(state, line))?;
        rule.apply(state, line);
        Some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionType;

    fn state_with_header() -> ParseState {
        let mut state = ParseState::new();
        state.header.name = Some("Jane".to_string());
        state.header.title = Some("Engineer".to_string());
        state
    }

    #[test]
    fn test_name_only_once() {
        let mut state = ParseState::new();
        assert!(LineRule::Name.matches(&state, "# Jane"));
        LineRule::Name.apply(&mut state, "# Jane");
        assert!(!LineRule::Name.matches(&state, "# Other"));
    }

    #[test]
    fn test_title_requires_name() {
        let state = ParseState::new();
        assert!(!LineRule::Title.matches(&state, "**Engineer**"));

        let mut state = ParseState::new();
        state.header.name = Some("Jane".to_string());
        assert!(LineRule::Title.matches(&state, "**Engineer** | Backend"));
        LineRule::Title.apply(&mut state, "**Engineer** | Backend");
        assert_eq!(state.header.title.as_deref(), Some("Engineer"));
        assert_eq!(state.header.specialization.as_deref(), Some("Backend"));
    }

    #[test]
    fn test_contact_needs_closed_header_and_no_section() {
        let mut state = ParseState::new();
        state.header.name = Some("Jane".to_string());
        assert!(!LineRule::Contact.matches(&state, "jane@example.com"));

        let mut state = state_with_header();
        assert!(LineRule::Contact.matches(&state, "jane@example.com"));

        LineRule::SectionHeader.apply(&mut state, "## Summary");
        assert!(!LineRule::Contact.matches(&state, "jane@example.com"));
    }

    #[test]
    fn test_dispatch_first_match_wins() {
        let mut state = state_with_header();
        assert_eq!(
            LineRule::dispatch(&mut state, "## Skills"),
            Some(LineRule::SectionHeader)
        );
        assert_eq!(
            LineRule::dispatch(&mut state, "- Rust"),
            Some(LineRule::SectionContent)
        );
    }

    #[test]
    fn test_dispatch_drops_stray_lines() {
        let mut state = ParseState::new();
        assert_eq!(LineRule::dispatch(&mut state, "stray text"), None);
    }

    #[test]
    fn test_close_section_trims_and_classifies() {
        let mut state = ParseState::new();
        state.open = Some(OpenSection {
            title: "Skills".to_string(),
            lines: vec![
                "".to_string(),
                "- Rust".to_string(),
                "".to_string(),
                "- Go".to_string(),
                "".to_string(),
            ],
        });
        state.close_section();

        assert_eq!(state.sections.len(), 1);
        assert_eq!(state.sections[0].content, "- Rust\n\n- Go");
        assert_eq!(state.sections[0].section_type, SectionType::BulletList);
    }

    #[test]
    fn test_close_section_drops_empty_title() {
        let mut state = ParseState::new();
        state.open = Some(OpenSection::default());
        state.close_section();
        assert!(state.sections.is_empty());
    }

    #[test]
    fn test_push_blank_collapses_runs() {
        let mut state = ParseState::new();
        state.open = Some(OpenSection {
            title: "Summary".to_string(),
            lines: vec!["text".to_string()],
        });
        state.push_blank();
        state.push_blank();
        assert_eq!(state.open.as_ref().unwrap().lines.len(), 2);
    }
}
