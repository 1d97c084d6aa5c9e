//! Stylesheet resolution.

use std::fs;

use super::StylesheetSource;

/// Built-in print stylesheet.
pub const DEFAULT_STYLESHEET: &str = include_str!("default.css");

/// Stylesheet ready to be placed in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStylesheet {
    /// CSS text for a `<style>` block
    Inline(String),
    /// URL for a `<link rel="stylesheet">` element
    Link(String),
}

/// Resolve a stylesheet source.
///
/// A file that cannot be read falls back to the built-in stylesheet; the
/// returned warning describes what happened.
pub fn resolve(source: &StylesheetSource) -> (ResolvedStylesheet, Option<String>) {
    match source {
        StylesheetSource::Default => (
            ResolvedStylesheet::Inline(DEFAULT_STYLESHEET.to_string()),
            None,
        ),
        StylesheetSource::Inline(css) => (ResolvedStylesheet::Inline(css.clone()), None),
        StylesheetSource::Link(href) => (ResolvedStylesheet::Link(href.clone()), None),
        StylesheetSource::File(path) => match fs::read_to_string(path) {
            Ok(css) => {
                log::debug!("Loaded stylesheet from {}", path.display());
                (ResolvedStylesheet::Inline(css), None)
            }
            Err(e) => {
                let warning = format!(
                    "Could not read stylesheet {}: {}; using the built-in stylesheet",
                    path.display(),
                    e
                );
                log::warn!("{}", warning);
                (
                    ResolvedStylesheet::Inline(DEFAULT_STYLESHEET.to_string()),
                    Some(warning),
                )
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_stylesheet() {
        let (sheet, warning) = resolve(&StylesheetSource::Default);
        assert!(warning.is_none());
        match sheet {
            ResolvedStylesheet::Inline(css) => assert!(css.contains(".no-print")),
            other => panic!("Expected inline stylesheet, got {:?}", other),
        }
    }

    #[test]
    fn test_file_stylesheet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "body {{ color: red; }}").unwrap();

        let (sheet, warning) = resolve(&StylesheetSource::File(file.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(
            sheet,
            ResolvedStylesheet::Inline("body { color: red; }".to_string())
        );
    }

    #[test]
    fn test_missing_file_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.css");

        let (sheet, warning) = resolve(&StylesheetSource::File(missing));
        assert_eq!(
            sheet,
            ResolvedStylesheet::Inline(DEFAULT_STYLESHEET.to_string())
        );
        assert!(warning.unwrap().contains("missing.css"));
    }

    #[test]
    fn test_link_passes_through() {
        let (sheet, _) = resolve(&StylesheetSource::Link("https://cdn.example/cv.css".into()));
        assert_eq!(
            sheet,
            ResolvedStylesheet::Link("https://cdn.example/cv.css".to_string())
        );
    }
}
