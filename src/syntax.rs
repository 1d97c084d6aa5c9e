//! Line-level syntax of the resume Markdown dialect.
//!
//! Every recognizer works on a single line, ignores surrounding whitespace
//! and returns borrowed slices of its input. The patterns are compiled once
//! and shared; they carry no mutable state.
//!
//! | Construct | Form |
//! |---|---|
//! | name | `# Jane Doe` |
//! | title | `**Engineer** \| Specialization` or `**Engineer \| Specialization**` |
//! | section header | `## Experience` |
//! | sub-entry marker | `### Acme \| Engineer` |
//! | aligned pair | `**Label:** value` |
//! | description pair | `**Term** - description` |
//! | bullet | `- item` |
//! | emphasis line | `_2020 - 2021_` |

use regex::Regex;
use std::sync::OnceLock;

/// Section title that triggers the description-list rendering override.
pub const EDUCATION_SECTION: &str = "Education";

pub(crate) struct Patterns {
    name: Regex,
    title: Regex,
    section_header: Regex,
    sub_entry: Regex,
    aligned_pair: Regex,
    description_pair: Regex,
    bullet: Regex,
    emphasis_line: Regex,
    pub(crate) link: Regex,
    pub(crate) strong: Regex,
    pub(crate) emphasis: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            name: compile(r"^#\s+(.+)$"),
            title: compile(r"^\*\*([^*]+)\*\*\s*(?:\|\s*(.*))?$"),
            section_header: compile(r"^##(?:\s+(.*))?$"),
            sub_entry: compile(r"^###(?:\s|$)"),
            aligned_pair: compile(r"^\*\*([^*]+?):\*\*\s*(.*)$"),
            description_pair: compile(r"^\*\*([^*]+)\*\*\s*-\s*(.*)$"),
            bullet: compile(r"^-(?:\s+(.*))?$"),
            emphasis_line: compile(r"^_(.+)_$"),
            link: compile(r"\[([^\]]+)\]\(([^)]+)\)"),
            strong: compile(r"\*\*([^*]+)\*\*"),
            emphasis: compile(r"_([^_]+)_"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

pub(crate) fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::new)
}

/// Title line of the header, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine<'a> {
    /// Text inside the strong-emphasis markers (before any `|`)
    pub title: &'a str,
    /// Text after the `|` separator, if any
    pub specialization: Option<&'a str>,
}

/// Name from a single-`#` heading line.
pub fn heading_name(line: &str) -> Option<&str> {
    let caps = patterns().name.captures(line.trim())?;
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then_some(name)
}

/// Title and optional specialization from a strong-emphasis wrapped line.
///
/// Both `**Title** | Spec` and `**Title | Spec**` are accepted.
pub fn title_line(line: &str) -> Option<TitleLine<'_>> {
    let caps = patterns().title.captures(line.trim())?;
    let bold = caps.get(1)?.as_str();
    let trailing = caps.get(2).map(|m| m.as_str());

    let (title, specialization) = match trailing {
        Some(rest) => (bold.trim(), Some(rest.trim())),
        None => match bold.split_once('|') {
            Some((title, rest)) => (title.trim(), Some(rest.trim())),
            None => (bold.trim(), None),
        },
    };

    if title.is_empty() {
        return None;
    }

    Some(TitleLine {
        title,
        specialization: specialization.filter(|s| !s.is_empty()),
    })
}

/// Title of a `##` section header line. An empty title is returned as `""`.
pub fn section_header(line: &str) -> Option<&str> {
    let caps = patterns().section_header.captures(line.trim())?;
    Some(caps.get(1).map_or("", |m| m.as_str().trim()))
}

/// Whether the line opens a timeline sub-entry (`### ...`).
pub fn is_sub_entry_marker(line: &str) -> bool {
    patterns().sub_entry.is_match(line.trim())
}

/// `(label, value)` from a `**Label:** value` line.
pub fn aligned_pair(line: &str) -> Option<(&str, &str)> {
    let caps = patterns().aligned_pair.captures(line.trim())?;
    let label = caps.get(1)?.as_str().trim();
    let value = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((label, value))
}

/// `(term, description)` from a `**Term** - description` line.
pub fn description_pair(line: &str) -> Option<(&str, &str)> {
    let caps = patterns().description_pair.captures(line.trim())?;
    let term = caps.get(1)?.as_str().trim();
    let description = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((term, description))
}

/// Text of a dash bullet with the marker stripped. A bare `-` yields `""`.
pub fn bullet_text(line: &str) -> Option<&str> {
    let caps = patterns().bullet.captures(line.trim())?;
    Some(caps.get(1).map_or("", |m| m.as_str().trim()))
}

/// Inner text of a line fully wrapped in `_..._`.
pub fn emphasis_wrapped(line: &str) -> Option<&str> {
    let caps = patterns().emphasis_line.captures(line.trim())?;
    Some(caps.get(1)?.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_name() {
        assert_eq!(heading_name("# Jane Doe"), Some("Jane Doe"));
        assert_eq!(heading_name("  #   Jane  "), Some("Jane"));
        assert_eq!(heading_name("#"), None);
        assert_eq!(heading_name("## Experience"), None);
        assert_eq!(heading_name("#hashtag"), None);
    }

    #[test]
    fn test_title_line_forms() {
        let t = title_line("**Software Engineer** | AI Specialist").unwrap();
        assert_eq!(t.title, "Software Engineer");
        assert_eq!(t.specialization, Some("AI Specialist"));

        let t = title_line("**Engineer | Backend**").unwrap();
        assert_eq!(t.title, "Engineer");
        assert_eq!(t.specialization, Some("Backend"));

        let t = title_line("**Product Manager**").unwrap();
        assert_eq!(t.title, "Product Manager");
        assert_eq!(t.specialization, None);

        let t = title_line("**Manager** |").unwrap();
        assert_eq!(t.specialization, None);

        assert!(title_line("**Skills:** Go").is_none());
        assert!(title_line("Plain text").is_none());
    }

    #[test]
    fn test_section_header() {
        assert_eq!(section_header("## Experience"), Some("Experience"));
        assert_eq!(section_header("##"), Some(""));
        assert_eq!(section_header("### Acme | Engineer"), None);
        assert_eq!(section_header("# Name"), None);
    }

    #[test]
    fn test_sub_entry_marker() {
        assert!(is_sub_entry_marker("### Acme | Engineer"));
        assert!(is_sub_entry_marker("###"));
        assert!(!is_sub_entry_marker("## Experience"));
        assert!(!is_sub_entry_marker("#### Deeper"));
    }

    #[test]
    fn test_aligned_pair() {
        assert_eq!(aligned_pair("**Skills:** Go, Rust"), Some(("Skills", "Go, Rust")));
        assert_eq!(aligned_pair("**Tools**: CLI"), None);
        assert_eq!(aligned_pair("**Time: zones:** UTC"), Some(("Time: zones", "UTC")));
        assert_eq!(aligned_pair("**BSc** - State University"), None);
        assert_eq!(aligned_pair("Skills: Go"), None);
    }

    #[test]
    fn test_description_pair() {
        assert_eq!(
            description_pair("**BSc** - State University"),
            Some(("BSc", "State University"))
        );
        assert_eq!(description_pair("**BSc** -"), Some(("BSc", "")));
        assert_eq!(description_pair("**Skills:** Go"), None);
    }

    #[test]
    fn test_bullet_text() {
        assert_eq!(bullet_text("- Shipped X"), Some("Shipped X"));
        assert_eq!(bullet_text("  - Nested"), Some("Nested"));
        assert_eq!(bullet_text("-"), Some(""));
        assert_eq!(bullet_text("-dash"), None);
        assert_eq!(bullet_text("Plain"), None);
    }

    #[test]
    fn test_emphasis_wrapped() {
        assert_eq!(emphasis_wrapped("_2020 - 2021_"), Some("2020 - 2021"));
        assert_eq!(emphasis_wrapped("_open"), None);
        assert_eq!(emphasis_wrapped("text _with_ emphasis"), None);
    }
}
