//! Text command - extract fields from already-recognized text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use idscan_core::{extract_document, DocumentKind, RecognizedText};

use super::output::{format_record, load_config, OutputFormat};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Text file, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Document kind: vehicle, passport, id-card, voter-card
    #[arg(short, long)]
    kind: DocumentKind,

    /// OCR confidence to record with the text (0 - 100)
    #[arg(long, default_value_t = 0.0)]
    confidence: f32,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: TextArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !(0.0..=100.0).contains(&args.confidence) {
        anyhow::bail!("Confidence must be between 0 and 100, got {}", args.confidence);
    }

    let raw_text = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read_to_string(&args.input)?
    };

    info!("Extracting {} from {} bytes of text", args.kind, raw_text.len());

    let record = extract_document(args.kind, &RecognizedText::new(raw_text, args.confidence));
    let output = format_record(&record, args.format, &config.output)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
