//! ocrpdf CLI - OCR a folder of PDFs into one report

mod fonts;
mod ocr_client;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ocrpdf::model::{batch_from_json, Document};
use ocrpdf::writer::render_pages;
use ocrpdf::{
    create_report_with_font, find_pdfs, DocumentBreak, JsonFormat, RecordingWriter, Report,
    ReportAssembler, ReportOptions,
};

use ocr_client::{OcrClient, DEFAULT_API_URL};

#[derive(Parser)]
#[command(name = "ocrpdf")]
#[command(version)]
#[command(about = "OCR a folder of PDFs and lay the results out as one PDF report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OCR every PDF in a directory and write the report
    Run {
        /// Directory containing the PDF files
        #[arg(value_name = "DIR", default_value = "pdfs")]
        input: PathBuf,

        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Write a report from a JSON file of extracted texts (no network)
    Render {
        /// JSON file of `[{"name": .., "text": ..}]` entries
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Check that the OCR service is reachable with the configured token
    Check {
        #[command(flatten)]
        service: ServiceArgs,
    },
}

#[derive(Args)]
struct ServiceArgs {
    /// OCR service API token
    #[arg(long, env = "OCRPDF_TOKEN", hide_env_values = true)]
    token: String,

    /// OCR service endpoint
    #[arg(long, env = "OCRPDF_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Args)]
struct ReportArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ocrpdf::report::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Report file name
    #[arg(long, default_value = ocrpdf::report::DEFAULT_FILE_NAME)]
    name: String,

    /// TrueType font with Persian glyphs (enables right-to-left shaping)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Ignore any font and write Latin labels only
    #[arg(long, conflicts_with = "font")]
    no_shaping: bool,

    /// Maximum characters per line
    #[arg(long, default_value_t = ocrpdf::layout::DEFAULT_MAX_CHARS)]
    max_chars: usize,

    /// When a new document starts on a new page
    #[arg(long, value_enum, default_value = "always")]
    document_break: BreakMode,

    /// Also export the laid-out report as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print the laid-out pages instead of writing a PDF
    #[arg(long)]
    dry_run: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BreakMode {
    /// Every document starts on a new page
    Always,
    /// Break only when the next title block does not fit
    WhenNeeded,
}

impl From<BreakMode> for DocumentBreak {
    fn from(mode: BreakMode) -> Self {
        match mode {
            BreakMode::Always => DocumentBreak::Always,
            BreakMode::WhenNeeded => DocumentBreak::WhenInsufficient,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            service,
            report,
        } => cmd_run(&input, &service, &report),
        Commands::Render { input, report } => cmd_render(&input, &report),
        Commands::Check { service } => cmd_check(&service),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_run(
    input: &Path,
    service: &ServiceArgs,
    args: &ReportArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Err(format!("Directory {} not found", input.display()).into());
    }

    let paths = find_pdfs(input)?;
    if paths.is_empty() {
        println!("{}", "No PDF files found.".yellow());
        return Ok(());
    }

    println!(
        "{} {} PDF files in {}",
        "Found".green(),
        paths.len(),
        input.display()
    );
    for path in &paths {
        println!("  {} {}", "─".dimmed(), path.display());
    }

    let batch = ocr_batch(&paths, service)?;
    write_report(&batch, args)
}

fn ocr_batch(
    paths: &[PathBuf],
    service: &ServiceArgs,
) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    let client = OcrClient::new(&service.api_url, &service.token)
        .map_err(|e| format!("Could not build HTTP client: {}", e))?;
    let runtime = tokio::runtime::Runtime::new()?;

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut batch = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let name = path.display().to_string();
        pb.set_message(name.clone());

        let document = match runtime.block_on(client.extract(path)) {
            Ok(text) => {
                pb.println(format!("{} {}", "OCR done:".green(), name));
                Document::from_pair(index + 1, name, text)
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "OCR failed:".red(), name, e));
                log::warn!("OCR failed for {}: {}", name, e);
                Document::failed(index + 1, name, e.to_string())
            }
        };
        batch.push(document);
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    Ok(batch)
}

fn cmd_render(input: &Path, args: &ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let batch = batch_from_json(&json)?;
    println!(
        "{} {} entries from {}",
        "Loaded".green(),
        batch.len(),
        input.display()
    );
    write_report(&batch, args)
}

fn write_report(batch: &[Document], args: &ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = if args.no_shaping {
        None
    } else {
        fonts::load_font(args.font.as_deref(), Path::new("."))
    };
    if args.font.is_some() && loaded.is_none() {
        return Err(format!("Font not readable: {}", display_opt(args.font.as_deref())).into());
    }
    let font = match loaded {
        Some(font) if font.is_usable() => {
            println!("{} {}", "Using font".green(), font.path.display());
            Some(font)
        }
        Some(font) => {
            println!(
                "{} {}",
                "Font could not be parsed, writing Latin labels without shaping:".yellow(),
                font.path.display()
            );
            None
        }
        None if !args.no_shaping => {
            println!(
                "{}",
                "No Persian font found, writing Latin labels without shaping".yellow()
            );
            None
        }
        None => None,
    };

    let options = ReportOptions::new()
        .with_shaping(font.is_some())
        .with_max_chars(args.max_chars)
        .with_document_break(args.document_break.into())
        .with_output_dir(&args.output)
        .with_file_name(&args.name);
    options.layout.validate()?;

    if args.dry_run || args.json.is_some() {
        let report = ReportAssembler::new(options.clone()).assemble(batch);
        if let Some(path) = &args.json {
            export_json(&report, path)?;
        }
        if args.dry_run {
            let mut writer = RecordingWriter::new().with_width(args.max_chars);
            render_pages(&report, &mut writer)?;
            println!("{}", writer.to_text());
            return Ok(());
        }
    }

    let font_bytes = font.as_ref().map(|f| f.bytes.as_slice());
    match create_report_with_font(batch, &options, font_bytes) {
        Some(path) => {
            println!(
                "{} {}",
                "PDF report successfully created:".green().bold(),
                path.display()
            );
            Ok(())
        }
        None => Err("Error creating PDF report".into()),
    }
}

fn export_json(report: &Report, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = report.to_json(JsonFormat::Pretty)?;
    fs::write(path, json)?;
    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_check(service: &ServiceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = OcrClient::new(&service.api_url, &service.token)
        .map_err(|e| format!("Could not build HTTP client: {}", e))?;
    let runtime = tokio::runtime::Runtime::new()?;

    println!("{} {}", "Checking".cyan().bold(), service.api_url);
    let status = runtime
        .block_on(client.check())
        .map_err(|e| format!("Connection failed: {}", e))?;

    if status.is_server_error() {
        println!("{} {}", "Service error:".red(), status);
    } else if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
    {
        println!("{} {}", "Token rejected:".red(), status);
    } else {
        println!("{} {}", "Service reachable:".green(), status);
    }
    Ok(())
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
