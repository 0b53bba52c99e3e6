//! Process command - recognize and extract a single document image.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idscan_core::models::config::IdscanConfig;
use idscan_core::{DocumentKind, DocumentPipeline, PureOcrEngine};

use super::output::{format_record, is_image, load_config, OutputFormat, IMAGE_EXTENSIONS};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image (png, jpg, jpeg, webp, tiff, bmp)
    #[arg(required = true)]
    input: PathBuf,

    /// Document kind: vehicle, passport, id-card, voter-card
    #[arg(short, long)]
    kind: DocumentKind,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory (overrides the configuration)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Show OCR confidence and processing time
    #[arg(long)]
    show_confidence: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if !is_image(&args.input) {
        anyhow::bail!(
            "Unsupported file format: {} (expected one of: {})",
            args.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        );
    }

    info!("Processing {} as {}", args.input.display(), args.kind);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    pb.set_message("Loading OCR models...");
    let engine = load_engine(&config, args.model_dir.clone())?;
    let pipeline = DocumentPipeline::new(engine);

    pb.set_message("Running OCR...");
    let image = fs::read(&args.input)?;
    let result = pipeline.process(args.kind, &image)?;

    pb.finish_and_clear();

    let output = format_record(&result.record, args.format, &config.output)?;

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

    if args.show_confidence {
        println!();
        println!(
            "{} OCR confidence: {:.1}%",
            style("ℹ").blue(),
            result.record.confidence()
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load the OCR engine from `model_dir`, or the configured model directory.
pub fn load_engine(
    config: &IdscanConfig,
    model_dir: Option<PathBuf>,
) -> anyhow::Result<PureOcrEngine> {
    let mut config = config.clone();
    if let Some(model_dir) = model_dir {
        config.ocr.model_dir = model_dir;
    }

    let det_model = config.model_path(&config.ocr.detection_model);
    let rec_model = config.model_path(&config.ocr.recognition_model);

    if !det_model.exists() || !rec_model.exists() {
        anyhow::bail!(
            "OCR models not found at {}.\n\n\
             Place {} and {} there, or point --model-dir / 'idscan config set ocr.model_dir' at them.",
            config.ocr.model_dir.display(),
            config.ocr.detection_model,
            config.ocr.recognition_model
        );
    }

    debug!("Using models from {}", config.ocr.model_dir.display());

    PureOcrEngine::from_config(&config.ocr)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))
}
