//! mdresume CLI - Markdown resume to HTML converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdresume::{
    convert_file, convert_many, parse_file, ConvertOptions, JsonFormat, RenderOptions,
    RenderResult, SectionType,
};

#[derive(Parser)]
#[command(name = "mdresume")]
#[command(version)]
#[command(about = "Generate a print-ready HTML resume from Markdown", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to the input with an .html extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a resume to HTML
    Html {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input with an .html extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Dump the parsed resume structure as JSON
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the header and the detected section layouts
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert several resumes in parallel
    Batch {
        /// Input Markdown files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (defaults to next to each input)
        #[arg(short = 'd', long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show version information
    Version,
}

/// Page styling flags shared by the converting commands.
#[derive(Args)]
struct StyleArgs {
    /// Inline this CSS file instead of the built-in stylesheet
    #[arg(long, value_name = "PATH", env = "MDRESUME_CSS", conflicts_with = "link_css")]
    css: Option<PathBuf>,

    /// Link an external stylesheet instead of inlining one
    #[arg(long, value_name = "URL")]
    link_css: Option<String>,

    /// Escape HTML-significant characters in the resume text
    #[arg(long)]
    escape_html: bool,

    /// Leave out the "save as PDF" notice
    #[arg(long)]
    no_notice: bool,
}

impl StyleArgs {
    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new()
            .with_escape_html(self.escape_html)
            .with_print_notice(!self.no_notice);

        if let Some(ref path) = self.css {
            options = options.with_stylesheet_file(path);
        } else if let Some(ref href) = self.link_css {
            options = options.with_stylesheet_link(href);
        }

        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            style,
        }) => cmd_html(&input, output.as_deref(), &style),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Batch {
            inputs,
            out_dir,
            style,
        }) => cmd_batch(&inputs, out_dir.as_deref(), &style),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_html(&input, cli.output.as_deref(), &cli.style)
            } else {
                println!("{}", "Usage: mdresume <FILE> [OUTPUT]".yellow());
                println!("       mdresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn ensure_input(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_file() {
        return Err(format!("Input file '{}' not found", input.display()).into());
    }
    Ok(())
}

fn print_warnings(result: &RenderResult) {
    for warning in &result.warnings {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_input(input)?;

    let options = ConvertOptions::new().with_render_options(style.render_options());
    let outcome = convert_file(input, output, &options)?;
    print_warnings(&outcome.result);

    println!(
        "{} {}",
        "Resume generated successfully:".green(),
        outcome.output.display()
    );
    println!(
        "{}",
        "To convert to PDF, open the HTML file in a browser and print to PDF".dimmed()
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_input(input)?;
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdresume::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    ensure_input(input)?;
    let doc = parse_file(input)?;

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref name) = doc.header.name {
        println!("{}: {}", "Name".bold(), name);
    }
    if let Some(ref title) = doc.header.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(specialization) = doc.header.specialization() {
        println!("{}: {}", "Specialization".bold(), specialization);
    }
    println!("{}: {}", "Contact lines".bold(), doc.header.contact.len());

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if doc.sections.is_empty() {
        println!("{}", "(none)".dimmed());
    }
    for section in &doc.sections {
        let detail = match section.section_type {
            SectionType::Timeline => format!("{} entries", section.experience_entries().len()),
            SectionType::AlignedList => format!("{} rows", section.labeled_pairs().len()),
            SectionType::DescriptionList => format!("{} rows", section.description_items().len()),
            _ => format!("{} lines", section.lines().count()),
        };
        println!(
            "  {} {} {}",
            section.title.bold(),
            format!("[{}]", section.section_type).cyan(),
            detail.dimmed()
        );
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let options = ConvertOptions::new().with_render_options(style.render_options());
    log::debug!("Converting {} files", inputs.len());
    let results = convert_many(inputs, out_dir, &options, |input| {
        pb.set_message(input.display().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!();
    for (input, result) in inputs.iter().zip(&results) {
        match result {
            Ok(outcome) => {
                println!("  {} {}", "✓".green(), outcome.output.display());
                print_warnings(&outcome.result);
            }
            Err(e) => {
                failed += 1;
                println!("  {} {}: {}", "✗".red(), input.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    println!(
        "\n{} {} resumes converted",
        "Done!".green().bold(),
        results.len()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown resume to print-ready HTML converter");
    println!();
    println!("License: MIT");
}
