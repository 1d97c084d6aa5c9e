//! File-level conversion helpers.
//!
//! These tie the parser and the HTML renderer together and handle the file
//! plumbing around them: reading the source, choosing the output path and
//! writing the page. Batch conversion runs on the rayon pool, one isolated
//! conversion per input.
//!
//! # Example
//!
//! ```no_run
//! use mdresume::convert::{convert_file, ConvertOptions};
//!
//! fn main() -> mdresume::Result<()> {
//!     let outcome = convert_file("resume.md", None::<&str>, &ConvertOptions::default())?;
//!     println!("wrote {}", outcome.output.display());
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::parser::{ParseOptions, ResumeParser};
use crate::render::{to_html_with_stats, RenderOptions, RenderResult};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to generated pages.
pub const HTML_EXTENSION: &str = "html";

/// Options for a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Source file
    pub input: PathBuf,

    /// Written HTML file
    pub output: PathBuf,

    /// Rendered page with statistics and warnings
    pub result: RenderResult,
}

impl ConvertOutcome {
    /// Warnings raised while rendering this file.
    pub fn warnings(&self) -> &[String] {
        &self.result.warnings
    }
}

/// Convert Markdown source text to an HTML page.
pub fn convert_str(input: &str, options: &ConvertOptions) -> RenderResult {
    let doc = ResumeParser::with_options(options.parse.clone()).parse(input);
    to_html_with_stats(&doc, &options.render)
}

/// Default output path for a source file: the same path with `.html`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension(HTML_EXTENSION)
}

/// Convert one file and write the page.
///
/// With no `output`, the page is written next to the input with the
/// extension replaced by `.html`.
pub fn convert_file<P, Q>(
    input: P,
    output: Option<Q>,
    options: &ConvertOptions,
) -> Result<ConvertOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = match output {
        Some(path) => path.as_ref().to_path_buf(),
        None => default_output_path(input),
    };
    if output == input {
        return Err(Error::InvalidInput(format!(
            "output path is the same as the input: {}",
            input.display()
        )));
    }

    let doc = ResumeParser::with_options(options.parse.clone()).parse_file(input)?;
    let result = to_html_with_stats(&doc, &options.render);
    for warning in &result.warnings {
        log::warn!("{}: {}", input.display(), warning);
    }

    fs::write(&output, &result.html)?;
    log::info!(
        "Converted {} -> {} ({} sections)",
        input.display(),
        output.display(),
        result.stats.section_count
    );

    Ok(ConvertOutcome {
        input: input.to_path_buf(),
        output,
        result,
    })
}

/// Convert many files in parallel.
///
/// Each input is written to `out_dir` (or next to itself when `out_dir` is
/// `None`) under its file stem with an `.html` extension. Results come back
/// in input order; a failure affects only its own entry. An input whose
/// output path was already claimed by an earlier input is not converted and
/// gets an [`Error::InvalidInput`]. `on_progress` is called once per finished
/// input, from whichever worker finished it.
pub fn convert_many<P, F>(
    inputs: &[P],
    out_dir: Option<&Path>,
    options: &ConvertOptions,
    on_progress: F,
) -> Vec<Result<ConvertOutcome>>
where
    P: AsRef<Path> + Sync,
    F: Fn(&Path) + Sync,
{
    let planned = plan_outputs(inputs, out_dir);

    inputs
        .par_iter()
        .zip(planned)
        .map(|(input, output)| {
            let input = input.as_ref();
            let result = output.and_then(|output| convert_file(input, Some(output), options));
            on_progress(input);
            result
        })
        .collect()
}

/// Output path for each input, refusing paths already claimed earlier.
fn plan_outputs<P: AsRef<Path>>(
    inputs: &[P],
    out_dir: Option<&Path>,
) -> Vec<Result<PathBuf>> {
    let mut claimed = HashSet::new();

    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let output = batch_output_path(input, out_dir)?;
            if !claimed.insert(output.clone()) {
                log::warn!(
                    "Skipping {}: {} is already written by another input",
                    input.display(),
                    output.display()
                );
                return Err(Error::InvalidInput(format!(
                    "{} would overwrite {}, written by an earlier input",
                    input.display(),
                    output.display()
                )));
            }
            Ok(output)
        })
        .collect()
}

fn batch_output_path(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    let Some(dir) = out_dir else {
        return Ok(default_output_path(input));
    };
    let stem = input
        .file_stem()
        .ok_or_else(|| Error::InvalidInput(format!("no file name: {}", input.display())))?;
    let mut output = dir.join(stem);
    output.set_extension(HTML_EXTENSION);
    Ok(output)
}
