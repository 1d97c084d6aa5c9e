//! # mdresume
//!
//! Markdown resume to print-ready HTML converter.
//!
//! This library reads a constrained Markdown dialect describing a resume,
//! recovers its structure (header, titled sections, section layouts) and
//! renders it as a single self-contained HTML page with a print stylesheet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdresume::{parse_file, render};
//!
//! fn main() -> mdresume::Result<()> {
//!     // Parse a Markdown resume
//!     let doc = parse_file("resume.md")?;
//!
//!     // Render the page
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options);
//!     std::fs::write("resume.html", html)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section layouts**: timelines, aligned lists, description lists,
//!   bullet lists and paragraphs, picked from the section content
//! - **Inline spans**: strong emphasis, emphasis and links
//! - **Print styling**: built-in stylesheet, custom file or external link
//! - **JSON**: dump and reload the parsed structure
//! - **Batch conversion**: independent files converted in parallel with Rayon

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod syntax;

// Re-export commonly used types
pub use convert::{convert_file, convert_many, convert_str, ConvertOptions, ConvertOutcome};
pub use error::{Error, Result};
pub use model::{
    DescriptionItem, ExperienceEntry, Header, LabeledPair, ResumeDocument, Section, SectionType,
};
pub use parser::{classify_section, ParseOptions, ResumeParser};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats, StylesheetSource};

use std::path::Path;

/// Parse Markdown resume text.
///
/// Parsing never fails: lines that match no rule are dropped.
///
/// # Example
///
/// ```
/// use mdresume::parse_str;
///
/// let doc = parse_str("# Jane Doe\n\n## Summary\nBuilds things.");
/// assert_eq!(doc.header.name.as_deref(), Some("Jane Doe"));
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn parse_str(input: &str) -> ResumeDocument {
    ResumeParser::new().parse(input)
}

/// Parse Markdown resume text with custom options.
pub fn parse_str_with_options(input: &str, options: ParseOptions) -> ResumeDocument {
    ResumeParser::with_options(options).parse(input)
}

/// Parse a Markdown resume file.
///
/// # Arguments
///
/// * `path` - Path to the Markdown file
///
/// # Example
///
/// ```no_run
/// use mdresume::parse_file;
///
/// let doc = parse_file("resume.md").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    ResumeParser::new().parse_file(path)
}

/// Parse a Markdown resume file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ResumeDocument> {
    ResumeParser::with_options(options).parse_file(path)
}

/// Parse a Markdown resume from UTF-8 bytes.
pub fn parse_bytes(data: &[u8]) -> Result<ResumeDocument> {
    ResumeParser::new().parse_bytes(data)
}

/// Convert Markdown resume text to a complete HTML page.
///
/// # Example
///
/// ```
/// let html = mdresume::to_html("# Jane Doe");
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<h1>Jane Doe</h1>"));
/// ```
pub fn to_html(input: &str) -> String {
    render::to_html(&parse_str(input), &RenderOptions::default())
}

/// Convert Markdown resume text to HTML with custom render options.
///
/// # Example
///
/// ```
/// use mdresume::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_stylesheet_link("print.css")
///     .with_print_notice(false);
/// let html = to_html_with_options("# Jane Doe", &options);
/// assert!(html.contains("href=\"print.css\""));
/// ```
pub fn to_html_with_options(input: &str, options: &RenderOptions) -> String {
    render::to_html(&parse_str(input), options)
}

/// Parse Markdown resume text and dump the structure as JSON.
pub fn to_json(input: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&parse_str(input), format)
}

/// Builder for parsing and rendering resumes.
///
/// # Example
///
/// ```no_run
/// use mdresume::MdResume;
///
/// let html = MdResume::new()
///     .with_stylesheet_file("print.css")
///     .escape_html()
///     .without_print_notice()
///     .parse_file("resume.md")?
///     .to_html();
/// # Ok::<(), mdresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MdResume {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl MdResume {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan input exactly as given, without Unicode normalization.
    pub fn raw(mut self) -> Self {
        self.parse_options = self.parse_options.raw();
        self
    }

    /// Inline a stylesheet file instead of the built-in one.
    pub fn with_stylesheet_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_stylesheet_file(path);
        self
    }

    /// Link an external stylesheet instead of inlining one.
    pub fn with_stylesheet_link(mut self, href: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_stylesheet_link(href);
        self
    }

    /// Escape HTML-significant characters in the source text.
    pub fn escape_html(mut self) -> Self {
        self.render_options = self.render_options.with_escape_html(true);
        self
    }

    /// Leave out the "save as PDF" notice.
    pub fn without_print_notice(mut self) -> Self {
        self.render_options = self.render_options.with_print_notice(false);
        self
    }

    /// Set the `lang` attribute of the page.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_lang(lang);
        self
    }

    /// Parse Markdown text and return a result wrapper.
    pub fn parse(self, input: &str) -> MdResumeResult {
        let document = ResumeParser::with_options(self.parse_options).parse(input);
        MdResumeResult {
            document,
            render_options: self.render_options,
        }
    }

    /// Parse a Markdown file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<MdResumeResult> {
        let document = ResumeParser::with_options(self.parse_options).parse_file(path)?;
        Ok(MdResumeResult {
            document,
            render_options: self.render_options,
        })
    }
}

/// Result of parsing a resume.
#[derive(Debug, Clone)]
pub struct MdResumeResult {
    /// The parsed document
    pub document: ResumeDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl MdResumeResult {
    /// Render the HTML page.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render the HTML page with statistics and warnings.
    pub fn to_html_with_stats(&self) -> RenderResult {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }
}
