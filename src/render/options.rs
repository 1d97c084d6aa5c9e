//! Rendering options and configuration.

use std::path::PathBuf;

/// Title used for the HTML `<title>` when the resume has no name.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Resume";

/// Options for rendering a resume to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Where the page styling comes from
    pub stylesheet: StylesheetSource,

    /// Escape `&`, `<`, `>` and `"` in source text before applying markup
    pub escape_html: bool,

    /// Append the "save as PDF" notice (hidden when printing)
    pub print_notice: bool,

    /// `<title>` used when the header has no name
    pub default_title: String,

    /// Value of the `<html lang>` attribute
    pub lang: String,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stylesheet source.
    pub fn with_stylesheet(mut self, stylesheet: StylesheetSource) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Embed the stylesheet read from a file.
    pub fn with_stylesheet_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = StylesheetSource::File(path.into());
        self
    }

    /// Reference an external stylesheet with a `<link>` element.
    pub fn with_stylesheet_link(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = StylesheetSource::Link(href.into());
        self
    }

    /// Enable or disable HTML escaping of source text.
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Enable or disable the print notice.
    pub fn with_print_notice(mut self, include: bool) -> Self {
        self.print_notice = include;
        self
    }

    /// Set the fallback document title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stylesheet: StylesheetSource::Default,
            escape_html: false,
            print_notice: true,
            default_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            lang: "en".to_string(),
            collect_stats: false,
        }
    }
}

/// Where the document's CSS comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StylesheetSource {
    /// Built-in print stylesheet, embedded inline
    #[default]
    Default,
    /// Caller-supplied CSS, embedded inline
    Inline(String),
    /// CSS file read at render time, embedded inline
    File(PathBuf),
    /// External stylesheet referenced by URL
    Link(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_escape_html(true)
            .with_print_notice(false)
            .with_default_title("CV")
            .with_stylesheet_link("print.css");

        assert!(options.escape_html);
        assert!(!options.print_notice);
        assert_eq!(options.default_title, "CV");
        assert_eq!(
            options.stylesheet,
            StylesheetSource::Link("print.css".to_string())
        );
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(!options.escape_html);
        assert!(options.print_notice);
        assert_eq!(options.default_title, DEFAULT_DOCUMENT_TITLE);
        assert_eq!(options.stylesheet, StylesheetSource::Default);
    }

    #[test]
    fn test_stylesheet_file_builder() {
        let options = RenderOptions::new().with_stylesheet_file("style.css");
        assert_eq!(
            options.stylesheet,
            StylesheetSource::File(PathBuf::from("style.css"))
        );
    }
}
