//! Document model types for resume content representation.
//!
//! This module defines the intermediate representation that bridges
//! parsing and rendering: a header plus an ordered list of typed sections.
//! Structured entries (timeline entries, label rows) are derived from a
//! section's raw content on demand and never stored.

mod document;
mod entry;
mod section;

pub use document::{Header, ResumeDocument};
pub use entry::{DescriptionItem, ExperienceEntry, LabeledPair};
pub use section::{Section, SectionType};
