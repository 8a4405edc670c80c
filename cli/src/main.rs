//! doccat CLI - concatenate PDF and DOCX text into one file

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use doccat::{bundle_with_progress, BundleConfig, BundleStep, ExtractorRegistry};

#[derive(Parser)]
#[command(name = "doccat")]
#[command(version)]
#[command(about = "Concatenate PDF and DOCX text into one labeled text file", long_about = None)]
struct Cli {
    #[command(flatten)]
    bundle: BundleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct BundleArgs {
    /// Input PDF file
    #[arg(long, value_name = "FILE", env = "DOCCAT_PDF")]
    pdf: Option<PathBuf>,

    /// Input DOCX file
    #[arg(long, value_name = "FILE", env = "DOCCAT_DOCX")]
    docx: Option<PathBuf>,

    /// Output text file (overwritten)
    #[arg(short, long, value_name = "FILE", env = "DOCCAT_OUTPUT")]
    output: Option<PathBuf>,

    /// Header title of the PDF section
    #[arg(long, value_name = "TITLE", default_value = doccat::bundle::DEFAULT_PDF_TITLE)]
    pdf_title: String,

    /// Header title of the DOCX section
    #[arg(long, value_name = "TITLE", default_value = doccat::bundle::DEFAULT_DOCX_TITLE)]
    docx_title: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Write PDF and DOCX text into one file under section headers
    Bundle(BundleArgs),

    /// Extract text from a PDF file
    Pdf {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract text from a DOCX file
    Docx {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input PDF or DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Bundle(args)) => cmd_bundle(args),
        Some(Commands::Pdf { input, output }) => cmd_extract(&input, output.as_deref(), "pdf"),
        Some(Commands::Docx { input, output }) => cmd_extract(&input, output.as_deref(), "docx"),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: bundle when any input or output is given
            if cli.bundle.pdf.is_some() || cli.bundle.docx.is_some() || cli.bundle.output.is_some()
            {
                cmd_bundle(cli.bundle)
            } else {
                println!(
                    "{}",
                    "Usage: doccat --pdf <FILE> --docx <FILE> --output <FILE>".yellow()
                );
                println!("       doccat --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn bundle_config(args: BundleArgs) -> Result<BundleConfig, String> {
    let pdf = args.pdf.ok_or("missing --pdf <FILE>")?;
    let docx = args.docx.ok_or("missing --docx <FILE>")?;
    let output = args.output.ok_or("missing --output <FILE>")?;

    Ok(BundleConfig::new(pdf, docx, output)
        .with_pdf_title(args.pdf_title)
        .with_docx_title(args.docx_title))
}

fn cmd_bundle(args: BundleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = bundle_config(args)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut started = false;
    let result = bundle_with_progress(&config, |step: BundleStep| {
        if started {
            pb.inc(1);
        }
        started = true;
        pb.set_message(step.message());
    });

    let report = match result {
        Ok(report) => {
            pb.inc(1);
            pb.finish_with_message("Done!");
            report
        }
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };

    println!(
        "\n{} {} ({} bytes)",
        "Saved to".green().bold(),
        report.output.display(),
        report.bytes_written
    );
    println!("  {} {} pages", "├─".dimmed(), report.pdf_pages);
    println!("  {} {} paragraphs", "└─".dimmed(), report.docx_paragraphs);

    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    extractor: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ExtractorRegistry::with_defaults();
    let extractor = registry
        .get_by_name(extractor)
        .ok_or_else(|| format!("No extractor named {}", extractor))?;
    let extraction = extractor.extract(input)?;

    if let Some(path) = output {
        fs::write(path, &extraction.text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", extraction.text);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = doccat::detect_format_from_path(input)?;
    let extraction = ExtractorRegistry::with_defaults().extract_detected(input)?;

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "format": format,
            "units": extraction.units,
            "words": extraction.word_count(),
            "characters": extraction.char_count(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {} {}",
        "Length".bold(),
        extraction.units,
        extraction.kind.unit_name()
    );
    println!("{}: {}", "Words".bold(), extraction.word_count());
    println!("{}: {}", "Characters".bold(), extraction.char_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "doccat".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF and DOCX text concatenation tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pdf: Option<&str>, docx: Option<&str>, output: Option<&str>) -> BundleArgs {
        BundleArgs {
            pdf: pdf.map(PathBuf::from),
            docx: docx.map(PathBuf::from),
            output: output.map(PathBuf::from),
            pdf_title: doccat::bundle::DEFAULT_PDF_TITLE.to_string(),
            docx_title: doccat::bundle::DEFAULT_DOCX_TITLE.to_string(),
        }
    }

    #[test]
    fn test_bundle_config_complete() {
        let config = bundle_config(args(Some("a.pdf"), Some("b.docx"), Some("out.txt"))).unwrap();
        assert_eq!(config, BundleConfig::new("a.pdf", "b.docx", "out.txt"));
    }

    #[test]
    fn test_bundle_config_missing_output() {
        let err = bundle_config(args(Some("a.pdf"), Some("b.docx"), None)).unwrap_err();
        assert_eq!(err, "missing --output <FILE>");
    }

    #[test]
    fn test_cli_parses_subcommand() {
        let cli = Cli::try_parse_from([
            "doccat",
            "bundle",
            "--pdf",
            "a.pdf",
            "--docx",
            "b.docx",
            "-o",
            "out.txt",
            "--docx-title",
            "CASE 2",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Bundle(args)) => {
                let config = bundle_config(args).unwrap();
                assert_eq!(config.docx_title, "CASE 2");
                assert_eq!(config.pdf_title, "TEAM PROJECT INSTRUCTIONS");
            }
            _ => panic!("expected bundle subcommand"),
        }
    }

    #[test]
    fn test_cmd_bundle_missing_pdf_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let result = cmd_bundle(BundleArgs {
            output: Some(output.clone()),
            ..args(Some("/nonexistent/doccat/a.pdf"), Some("b.docx"), None)
        });
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
