//! Rendering module for converting parsed resumes to HTML and JSON.

mod html;
mod inline;
mod json;
mod options;
mod result;
pub mod stylesheet;

pub use html::{to_html, to_html_with_stats, HtmlRenderer, PRINT_NOTICE};
pub use inline::{escape_html, process_text, InlineFormatter};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, StylesheetSource, DEFAULT_DOCUMENT_TITLE};
pub use result::{RenderResult, RenderStats};
pub use stylesheet::DEFAULT_STYLESHEET;
