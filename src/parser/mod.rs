//! Resume parsing module.

mod classify;
mod options;
mod resume_parser;
mod rules;

pub use classify::classify_section;
pub use options::ParseOptions;
pub use resume_parser::ResumeParser;
pub use rules::{LineRule, OpenSection, ParseState};
