//! Inline span formatting: strong emphasis, emphasis and links.

use crate::syntax::patterns;

/// Converts inline Markdown spans in a run of text to HTML.
///
/// Links are located first. Their labels get the emphasis transforms, their
/// URLs are left alone so underscores or asterisks in a URL never turn into
/// markup. Text outside links gets `**strong**` first, then `_emphasis_`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter {
    escape_html: bool,
}

impl InlineFormatter {
    /// Create a formatter. With `escape_html` set, `& < > "` in the source
    /// text are escaped before any markup is inserted.
    pub fn new(escape_html: bool) -> Self {
        Self { escape_html }
    }

    /// Format a run of text.
    pub fn format(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() + 16);
        let mut last = 0;

        for caps in patterns().link.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            output.push_str(&self.format_spans(&text[last..whole.start()]));
            output.push_str("<a href=\"");
            output.push_str(&self.format_url(url.as_str()));
            output.push_str("\">");
            output.push_str(&self.format_spans(label.as_str()));
            output.push_str("</a>");
            last = whole.end();
        }

        output.push_str(&self.format_spans(&text[last..]));
        output
    }

    fn format_spans(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let escaped;
        let text = if self.escape_html {
            escaped = escape_html(text);
            escaped.as_str()
        } else {
            text
        };

        let patterns = patterns();
        let strong = patterns.strong.replace_all(text, "<strong>${1}</strong>");
        patterns
            .emphasis
            .replace_all(&strong, "<em>${1}</em>")
            .into_owned()
    }

    fn format_url(&self, url: &str) -> String {
        if self.escape_html {
            escape_html(url)
        } else {
            url.to_string()
        }
    }
}

/// Apply the inline transform with default settings (no escaping).
pub fn process_text(text: &str) -> String {
    InlineFormatter::default().format(text)
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
