//! Annotation Layout CLI
//!
//! Usage:
//!   annotation-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>    Layout configuration overrides (TOML format)
//!   -f, --format <FORMAT>  Output format: toml, json or svg
//!   --fit-content          Size every box from its text before adjusting
//!   --check                Report layout defects; exit 1 if any remain
//!   -d, --debug            Log every resolution step to stderr
//!   -h, --help             Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use annotation_layout::layout::DragOverlay;
use annotation_layout::{
    adjust_document, lint, render_svg, AdjustConfig, AdjustReport, PageDocument, SvgConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Toml,
    Json,
    Svg,
}

#[derive(Parser)]
#[command(name = "annotation-layout")]
#[command(about = "Resolve overlapping comment boxes on a page")]
struct Cli {
    /// Page document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Layout configuration overrides (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Toml)]
    format: Format,

    /// Size every box from its text content before adjusting
    #[arg(long)]
    fit_content: bool,

    /// Report remaining layout defects and exit 1 if there are any
    #[arg(long)]
    check: bool,

    /// Log every resolution step to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => match AdjustConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                let source = fs::read_to_string(path).unwrap_or_default();
                eprintln!("{}", e.format(&source, &path.display().to_string()));
                return ExitCode::FAILURE;
            }
        },
        None => AdjustConfig::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let mut doc = match PageDocument::parse(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            return ExitCode::FAILURE;
        }
    };
    if cli.fit_content {
        doc.fit_to_content();
    }

    let report = match adjust_document(&doc, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        let warnings = lint(&report, &config);
        for warning in &warnings {
            eprintln!("{}: {}", filename, warning);
        }
        if !warnings.is_empty() {
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match render(&report, cli.format) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn render(report: &AdjustReport, format: Format) -> Result<String, String> {
    match format {
        Format::Toml => report.to_toml().map_err(|e| e.to_string()),
        Format::Json => report.to_json().map_err(|e| e.to_string()),
        Format::Svg => Ok(render_svg(
            &report.page.container(),
            &report.annotations(),
            &DragOverlay::new(),
            &SvgConfig::default(),
        )),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}
